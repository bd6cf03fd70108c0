//! Distortion coefficient and resampling configuration types

/// Coefficient grid of one bivariate cubic displacement surface.
///
/// Evaluates as `Σ_i Σ_j coeffs[i][j] · u^i · v^j`, with `u` the column and
/// `v` the row coordinate in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCoefficients {
    coeffs: [[f64; 4]; 4],
}

impl SurfaceCoefficients {
    pub fn new(coeffs: [[f64; 4]; 4]) -> Self {
        Self { coeffs }
    }

    /// All-zero grid; the surface vanishes everywhere.
    pub fn zero() -> Self {
        Self::new([[0.0; 4]; 4])
    }

    /// Grid whose surface is `value` everywhere (a pure shift).
    pub fn constant(value: f64) -> Self {
        let mut coeffs = [[0.0; 4]; 4];
        coeffs[0][0] = value;
        Self::new(coeffs)
    }

    pub fn coeffs(&self) -> &[[f64; 4]; 4] {
        &self.coeffs
    }
}

/// Resolved displacement surfaces for one camera.
///
/// The instrument's dual-beam geometry carries two surface pairs per
/// calibration; which pair serves which camera index is decided by the
/// caller, which passes one resolved pair per camera present in the cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDistortion {
    /// Column-axis displacement surface.
    pub dx: SurfaceCoefficients,
    /// Row-axis displacement surface.
    pub dy: SurfaceCoefficients,
}

impl CameraDistortion {
    pub fn new(dx: SurfaceCoefficients, dy: SurfaceCoefficients) -> Self {
        Self { dx, dy }
    }

    /// Zero displacement on both axes; correction becomes the identity.
    pub fn identity() -> Self {
        Self::new(SurfaceCoefficients::zero(), SurfaceCoefficients::zero())
    }
}

/// Configuration for the interpolation kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleParams {
    /// Cubic-convolution sharpness parameter (conventionally -0.5)
    pub cubic: f32,
    /// Value substituted for samples outside the resolvable domain
    pub missing: f32,
}

impl Default for ResampleParams {
    fn default() -> Self {
        Self {
            cubic: -0.5,
            missing: 0.0,
        }
    }
}

impl ResampleParams {
    pub fn builder() -> ResampleParamsBuilder {
        ResampleParamsBuilder::default()
    }
}

/// Builder for ResampleParams
#[derive(Default)]
pub struct ResampleParamsBuilder {
    cubic: Option<f32>,
    missing: Option<f32>,
}

impl ResampleParamsBuilder {
    pub fn cubic(mut self, cubic: f32) -> Self {
        self.cubic = Some(cubic);
        self
    }

    pub fn missing(mut self, missing: f32) -> Self {
        self.missing = Some(missing);
        self
    }

    pub fn build(self) -> ResampleParams {
        let default = ResampleParams::default();
        ResampleParams {
            cubic: self.cubic.unwrap_or(default.cubic),
            missing: self.missing.unwrap_or(default.missing),
        }
    }
}
