//! Bivariate cubic surface evaluation

use crate::transforms::distortion::types::SurfaceCoefficients;

impl SurfaceCoefficients {
    /// Evaluates the surface at (u, v).
    ///
    /// Horner accumulation in both variables; powers are never formed
    /// explicitly, so a 4x4 grid costs 15 multiply-adds per call.
    #[inline]
    pub fn eval(&self, u: f64, v: f64) -> f64 {
        let coeffs = self.coeffs();
        let mut value = 0.0;
        for i in (0..4).rev() {
            let row = &coeffs[i];
            let mut row_value = 0.0;
            for j in (0..4).rev() {
                row_value = row_value * v + row[j];
            }
            value = value * u + row_value;
        }
        value
    }
}
