//! Geometric distortion correction module
//!
//! Corrects optical warping by resampling every spatial slice of a cube
//! through a displacement field derived from per-camera polynomial surfaces.

pub mod corrector;
pub mod resample;
pub mod surface;
pub mod types;


pub use corrector::{correct_distortion, correct_distortion_with};
pub use resample::{resample_slice, sample_cubic};
pub use types::{CameraDistortion, ResampleParams, ResampleParamsBuilder, SurfaceCoefficients};
