//! Cube transform module
//!
//! This module provides the pixel-wise transforms applied to instrument image
//! cubes, with separate modules for the cube data model, polarization
//! demodulation, and distortion correction.

pub mod common;
pub mod cube;
pub mod demodulation;
pub mod distortion;

pub use common::{
    Result,
    TransformError,
};

pub use cube::{
    CubeShape,
    ImageCube,
};

pub use demodulation::{
    DemodulationMatrix,
    demodulate,
};

pub use distortion::{
    CameraDistortion,
    ResampleParams,
    ResampleParamsBuilder,
    SurfaceCoefficients,
    correct_distortion,
    correct_distortion_with,
};
