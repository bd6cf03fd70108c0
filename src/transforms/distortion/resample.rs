//! Cubic-convolution resampling of 2-D image slices

use rayon::prelude::*;

use crate::transforms::distortion::types::ResampleParams;

/// One-dimensional cubic-convolution weights at phase `t` in `[0, 1)`.
///
/// Taps sit at offsets -1, 0, 1, 2 from the floor of the sampling
/// coordinate. At `t = 0` the weights collapse to (0, 1, 0, 0), so integer
/// coordinates reproduce the source sample exactly.
#[inline]
fn kernel_weights(t: f32, a: f32) -> [f32; 4] {
    // Keys kernel: (a+2)|s|^3 - (a+3)|s|^2 + 1        for |s| <= 1
    //              a(|s|^3 - 5|s|^2 + 8|s| - 4)       for 1 < |s| < 2
    let s0 = 1.0 + t;
    let s1 = t;
    let s2 = 1.0 - t;
    let s3 = 2.0 - t;
    [
        a * (((s0 - 5.0) * s0 + 8.0) * s0 - 4.0),
        ((a + 2.0) * s1 - (a + 3.0)) * s1 * s1 + 1.0,
        ((a + 2.0) * s2 - (a + 3.0)) * s2 * s2 + 1.0,
        a * (((s3 - 5.0) * s3 + 8.0) * s3 - 4.0),
    ]
}

/// Samples a 2-D slice (`n_cols` x `n_rows`, column axis unit stride) at
/// (x, y) with the cubic-convolution kernel.
///
/// Returns the missing value when (x, y) lies outside
/// `[0, n_cols-1] x [0, n_rows-1]`, or when a fractional coordinate sits too
/// close to the border for its four-tap footprint. A coordinate that is
/// exact on an axis needs only its own grid line there, so integer
/// coordinates resolve everywhere in the domain, borders included.
pub fn sample_cubic(
    slice: &[f32],
    n_cols: usize,
    n_rows: usize,
    x: f32,
    y: f32,
    params: &ResampleParams,
) -> f32 {
    if n_cols == 0 || n_rows == 0 {
        return params.missing;
    }

    if !(x >= 0.0 && x <= (n_cols - 1) as f32 && y >= 0.0 && y <= (n_rows - 1) as f32) {
        return params.missing;
    }

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;
    let exact_x = fx == 0.0;
    let exact_y = fy == 0.0;

    if (!exact_x && (x0 < 1 || x0 + 2 > n_cols as isize - 1))
        || (!exact_y && (y0 < 1 || y0 + 2 > n_rows as isize - 1))
    {
        return params.missing;
    }

    if exact_x && exact_y {
        return slice[y0 as usize * n_cols + x0 as usize];
    }

    if exact_y {
        let wx = kernel_weights(fx, params.cubic);
        let row = &slice[y0 as usize * n_cols..][..n_cols];
        let base = (x0 - 1) as usize;
        return (0..4).map(|i| wx[i] * row[base + i]).sum();
    }

    if exact_x {
        let wy = kernel_weights(fy, params.cubic);
        let col = x0 as usize;
        let base = (y0 - 1) as usize;
        return (0..4).map(|j| wy[j] * slice[(base + j) * n_cols + col]).sum();
    }

    let wx = kernel_weights(fx, params.cubic);
    let wy = kernel_weights(fy, params.cubic);
    let x_base = (x0 - 1) as usize;
    let y_base = (y0 - 1) as usize;

    let mut acc = 0.0;
    for j in 0..4 {
        let row = &slice[(y_base + j) * n_cols..][..n_cols];
        let mut row_acc = 0.0;
        for i in 0..4 {
            row_acc += wx[i] * row[x_base + i];
        }
        acc += wy[j] * row_acc;
    }
    acc
}

/// Resamples a 2-D slice through a per-pixel target-coordinate field.
///
/// `field[y * n_cols + x]` holds the source coordinate whose interpolated
/// value lands in output pixel (x, y). Output rows fan out in parallel.
pub fn resample_slice(
    src: &[f32],
    n_cols: usize,
    n_rows: usize,
    field: &[(f32, f32)],
    out: &mut [f32],
    params: &ResampleParams,
) {
    out.par_chunks_mut(n_cols)
        .enumerate()
        .for_each(|(y, out_row)| {
            let field_row = &field[y * n_cols..][..n_cols];
            for (out_px, &(sx, sy)) in out_row.iter_mut().zip(field_row) {
                *out_px = sample_cubic(src, n_cols, n_rows, sx, sy, params);
            }
        });
}
