//! Demodulation matrix type

use crate::transforms::common::error::{Result, TransformError};

/// Square polarization-state mixing matrix, row-major.
///
/// Row `r` holds the weights that produce output state `r` from the measured
/// states. The extent must match the cube's polarization axis (4 for this
/// instrument).
#[derive(Debug, Clone, PartialEq)]
pub struct DemodulationMatrix {
    size: usize,
    data: Vec<f32>,
}

impl DemodulationMatrix {
    /// Wraps a row-major coefficient buffer of length `size * size`.
    pub fn from_vec(size: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TransformError::BufferSizeMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }

        Ok(Self { size, data })
    }

    /// Identity matrix; demodulating with it leaves a cube unchanged.
    pub fn identity(size: usize) -> Self {
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            data[i * size + i] = 1.0;
        }
        Self { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.size + col]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
