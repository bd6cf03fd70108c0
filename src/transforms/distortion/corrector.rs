//! Distortion correction orchestration

use rayon::prelude::*;
use tracing::{info, instrument};

use crate::transforms::{
    common::error::{Result, TransformError},
    cube::ImageCube,
    distortion::resample::resample_slice,
    distortion::types::{CameraDistortion, ResampleParams},
};

/// Corrects geometric distortion with the conventional kernel parameters
/// (cubic -0.5, missing value 0.0).
pub fn correct_distortion(data: &ImageCube, cameras: &[CameraDistortion]) -> Result<ImageCube> {
    correct_distortion_with(data, cameras, ResampleParams::default())
}

/// Corrects geometric distortion of every spatial slice of `data`.
///
/// `cameras[c]` holds the resolved displacement surfaces for camera index
/// `c` and must cover every camera present in the cube. For each
/// (extension, camera) pair the surfaces are evaluated once at every integer
/// destination pixel; the resulting target-coordinate field is shared by all
/// polarization slices of that pair. Destination pixels whose target
/// coordinate cannot be resolved receive the missing value.
#[instrument(skip(data, cameras), fields(shape = %data.shape(), cameras = cameras.len()))]
pub fn correct_distortion_with(
    data: &ImageCube,
    cameras: &[CameraDistortion],
    params: ResampleParams,
) -> Result<ImageCube> {
    let shape = data.shape();
    if cameras.len() < shape.n_cameras {
        return Err(TransformError::MissingCoefficients(cameras.len()));
    }

    let n_cols = shape.n_cols;
    let n_rows = shape.n_rows;
    let slice_len = shape.slice_len();
    let input = data.data();

    let mut out = ImageCube::zeros(shape);

    for e in 0..shape.n_extensions {
        for c in 0..shape.n_cameras {
            let field = {
                let _span =
                    tracing::info_span!("evaluate_surfaces", camera = c, extension = e).entered();
                target_field(&cameras[c], n_cols, n_rows)
            };

            let _span =
                tracing::info_span!("resample_slices", camera = c, extension = e).entered();
            for p in 0..shape.n_polstates {
                let offset = shape.slice_offset(p, c, e);
                let src = &input[offset..offset + slice_len];
                let dst = &mut out.data_mut()[offset..offset + slice_len];
                resample_slice(src, n_cols, n_rows, &field, dst, &params);
            }
        }
    }

    info!(shape = %shape, "Distortion correction complete");
    Ok(out)
}

/// Target sampling coordinates for one camera: the identity grid plus the
/// displacement surfaces evaluated at every integer destination pixel.
fn target_field(camera: &CameraDistortion, n_cols: usize, n_rows: usize) -> Vec<(f32, f32)> {
    let mut field = vec![(0.0f32, 0.0f32); n_cols * n_rows];
    field
        .par_chunks_mut(n_cols)
        .enumerate()
        .for_each(|(y, row)| {
            let v = y as f64;
            for (x, target) in row.iter_mut().enumerate() {
                let u = x as f64;
                *target = (
                    (u + camera.dx.eval(u, v)) as f32,
                    (v + camera.dy.eval(u, v)) as f32,
                );
            }
        });
    field
}
