use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Demodulation matrix is {0}x{0} but cube has {1} polarization states")]
    MatrixSizeMismatch(usize, usize),

    #[error("Invalid cube dimensions {0:?}: expected 4 or 5 positive axis extents")]
    InvalidDimensions(Vec<usize>),

    #[error("Data buffer holds {actual} elements but the cube shape requires {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("No distortion coefficients supplied for camera {0}")]
    MissingCoefficients(usize),
}

pub type Result<T> = std::result::Result<T, TransformError>;
