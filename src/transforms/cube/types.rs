//! Cube shape descriptor and pixel buffer types

use std::fmt;

use crate::transforms::common::error::{Result, TransformError};

/// Axis extents of an instrument image cube.
///
/// Axis order is fixed: column, row, polarization state, camera, extension.
/// The column axis has unit stride in memory. Cubes recorded with only four
/// axes get an extension extent of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeShape {
    /// Number of detector columns (x).
    pub n_cols: usize,
    /// Number of detector rows (y).
    pub n_rows: usize,
    /// Number of polarization-state samples per pixel.
    pub n_polstates: usize,
    /// Number of cameras.
    pub n_cameras: usize,
    /// Number of extensions (1 when the source array has four axes).
    pub n_extensions: usize,
}

impl CubeShape {
    /// Builds a shape from a raw dimension list of rank 4 or 5.
    pub fn from_dims(dims: &[usize]) -> Result<Self> {
        if dims.len() < 4 || dims.len() > 5 || dims.iter().any(|&d| d == 0) {
            return Err(TransformError::InvalidDimensions(dims.to_vec()));
        }

        Ok(Self {
            n_cols: dims[0],
            n_rows: dims[1],
            n_polstates: dims[2],
            n_cameras: dims[3],
            n_extensions: if dims.len() < 5 { 1 } else { dims[4] },
        })
    }

    /// Total number of samples in a cube of this shape.
    pub fn len(&self) -> usize {
        self.n_cols * self.n_rows * self.n_polstates * self.n_cameras * self.n_extensions
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples in one 2-D spatial slice.
    pub fn slice_len(&self) -> usize {
        self.n_cols * self.n_rows
    }

    /// Flat offset of sample (x, y, p, c, e).
    #[inline]
    pub fn offset(&self, x: usize, y: usize, p: usize, c: usize, e: usize) -> usize {
        x + self.n_cols * (y + self.n_rows * (p + self.n_polstates * (c + self.n_cameras * e)))
    }

    /// Flat offset of the first sample of the 2-D slice (p, c, e).
    #[inline]
    pub fn slice_offset(&self, p: usize, c: usize, e: usize) -> usize {
        self.offset(0, 0, p, c, e)
    }
}

impl fmt::Display for CubeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}x{}x{}",
            self.n_cols, self.n_rows, self.n_polstates, self.n_cameras, self.n_extensions
        )
    }
}

/// A dense single-precision image cube.
///
/// The buffer is owned and laid out with the column axis fastest, matching
/// the instrument's array convention.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCube {
    shape: CubeShape,
    data: Vec<f32>,
}

impl ImageCube {
    /// Wraps an existing buffer, validating its length against `shape`.
    pub fn from_vec(shape: CubeShape, data: Vec<f32>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(TransformError::BufferSizeMismatch {
                expected: shape.len(),
                actual: data.len(),
            });
        }

        Ok(Self { shape, data })
    }

    /// Wraps a buffer described by a raw dimension list of rank 4 or 5.
    pub fn from_dims(dims: &[usize], data: Vec<f32>) -> Result<Self> {
        Self::from_vec(CubeShape::from_dims(dims)?, data)
    }

    /// Allocates a zero-filled cube of the given shape.
    pub fn zeros(shape: CubeShape) -> Self {
        Self {
            shape,
            data: vec![0.0; shape.len()],
        }
    }

    pub fn shape(&self) -> CubeShape {
        self.shape
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Sample at (x, y, p, c, e). Panics if any index is out of range.
    #[inline]
    pub fn at(&self, x: usize, y: usize, p: usize, c: usize, e: usize) -> f32 {
        assert!(
            x < self.shape.n_cols
                && y < self.shape.n_rows
                && p < self.shape.n_polstates
                && c < self.shape.n_cameras
                && e < self.shape.n_extensions,
            "cube index out of bounds"
        );
        self.data[self.shape.offset(x, y, p, c, e)]
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeShape, ImageCube};
    use crate::transforms::common::error::TransformError;

    #[test]
    fn shape_from_four_dims_defaults_extension() {
        let shape = CubeShape::from_dims(&[8, 6, 4, 2]).unwrap();
        assert_eq!(shape.n_extensions, 1);
        assert_eq!(shape.len(), 8 * 6 * 4 * 2);
        assert_eq!(shape.to_string(), "8x6x4x2x1");
    }

    #[test]
    fn shape_rejects_bad_ranks_and_extents() {
        assert!(matches!(
            CubeShape::from_dims(&[8, 6, 4]),
            Err(TransformError::InvalidDimensions(_))
        ));
        assert!(matches!(
            CubeShape::from_dims(&[8, 6, 4, 2, 3, 1]),
            Err(TransformError::InvalidDimensions(_))
        ));
        assert!(matches!(
            CubeShape::from_dims(&[8, 0, 4, 2]),
            Err(TransformError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn offsets_follow_column_fastest_layout() {
        let shape = CubeShape::from_dims(&[4, 3, 2, 2, 2]).unwrap();
        assert_eq!(shape.offset(0, 0, 0, 0, 0), 0);
        assert_eq!(shape.offset(1, 0, 0, 0, 0), 1);
        assert_eq!(shape.offset(0, 1, 0, 0, 0), 4);
        assert_eq!(shape.offset(0, 0, 1, 0, 0), 12);
        assert_eq!(shape.offset(0, 0, 0, 1, 0), 24);
        assert_eq!(shape.offset(0, 0, 0, 0, 1), 48);
        assert_eq!(shape.slice_offset(1, 1, 1), 48 + 24 + 12);
    }

    #[test]
    fn cube_rejects_wrong_buffer_length() {
        let shape = CubeShape::from_dims(&[4, 4, 2, 1]).unwrap();
        let result = ImageCube::from_vec(shape, vec![0.0; 7]);
        assert!(matches!(
            result,
            Err(TransformError::BufferSizeMismatch {
                expected: 32,
                actual: 7
            })
        ));
    }

    #[test]
    fn cube_indexing_round_trips() {
        let shape = CubeShape::from_dims(&[2, 2, 2, 1]).unwrap();
        let data: Vec<f32> = (0..shape.len()).map(|i| i as f32).collect();
        let cube = ImageCube::from_vec(shape, data).unwrap();

        assert_eq!(cube.at(0, 0, 0, 0, 0), 0.0);
        assert_eq!(cube.at(1, 0, 0, 0, 0), 1.0);
        assert_eq!(cube.at(0, 1, 0, 0, 0), 2.0);
        assert_eq!(cube.at(1, 1, 1, 0, 0), 7.0);
    }
}
