//! Per-pixel demodulation of the polarization axis

use rayon::prelude::*;
use tracing::{info, instrument};

use crate::transforms::{
    common::error::{Result, TransformError},
    cube::ImageCube,
    demodulation::DemodulationMatrix,
};

/// Applies `matrix` to the polarization axis of `data` at every pixel.
///
/// For every column, row, camera, and extension:
///
/// ```text
/// out[x, y, p_row, c, e] = Σ_k matrix[p_row, k] · data[x, y, k, c, e]
/// ```
///
/// The result has the same shape as `data`. The matrix extent must equal the
/// cube's polarization-axis extent. Non-finite input samples propagate
/// through the accumulation unchanged.
#[instrument(skip(data, matrix), fields(shape = %data.shape(), states = matrix.size()))]
pub fn demodulate(data: &ImageCube, matrix: &DemodulationMatrix) -> Result<ImageCube> {
    let shape = data.shape();
    if matrix.size() != shape.n_polstates {
        return Err(TransformError::MatrixSizeMismatch(
            matrix.size(),
            shape.n_polstates,
        ));
    }

    let n_cols = shape.n_cols;
    let n_rows = shape.n_rows;
    let n_polstates = shape.n_polstates;
    let input = data.data();

    let mut out = ImageCube::zeros(shape);

    // Each unit-stride output row (y, p_row, c, e) reads only the input rows
    // sharing its (y, c, e), so rows fan out with no synchronization. The
    // contraction runs one accumulation pass per matrix entry, keeping the
    // column axis innermost.
    out.data_mut()
        .par_chunks_mut(n_cols)
        .enumerate()
        .for_each(|(row_index, out_row)| {
            let y = row_index % n_rows;
            let rest = row_index / n_rows;
            let p_row = rest % n_polstates;
            let camext = rest / n_polstates;

            for p_col in 0..n_polstates {
                let weight = matrix.get(p_row, p_col);
                let start = n_cols * (y + n_rows * (p_col + n_polstates * camext));
                let src = &input[start..start + n_cols];
                for (acc, &sample) in out_row.iter_mut().zip(src) {
                    *acc += weight * sample;
                }
            }
        });

    info!(shape = %shape, "Demodulation complete");
    Ok(out)
}
