//! Pixel-wise transform core for polarimetric instrument image cubes.
//!
//! Provides the two numeric transforms applied to level-1 camera data:
//! polarization demodulation and geometric distortion correction. The host
//! adapter that marshals array handles in and out of this crate lives
//! elsewhere; everything here is a pure buffer-to-buffer computation.

pub mod logger;
pub mod transforms;
