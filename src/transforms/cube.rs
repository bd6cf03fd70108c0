//! Image cube data model

pub mod types;

pub use types::{CubeShape, ImageCube};
