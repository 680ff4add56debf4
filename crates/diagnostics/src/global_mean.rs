//! Area-weighted global means per timestep.

use blendmask_grid::{GridError, is_fill};
use blendmask_stats::weighted_mean;
use ndarray::{Array2, Array3, ArrayView3, Axis};
use tracing::debug;

/// Area-weighted global mean of every timestep of `data`.
///
/// `weights` has the same `(time, lat, lon)` shape as `data` (coverage
/// masking zeroes some of them). Cells with zero weight or "no data"
/// (NaN or the fill sentinel) are skipped; a timestep whose remaining
/// weight is zero yields NaN.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if the shapes differ.
pub fn monthly_global_means(
    data: &Array3<f64>,
    weights: ArrayView3<'_, f64>,
) -> Result<Vec<f64>, GridError> {
    if data.dim() != weights.dim() {
        return Err(GridError::ShapeMismatch {
            field: "weights".to_string(),
            expected: data.shape().to_vec(),
            got: weights.shape().to_vec(),
        });
    }
    let means: Vec<f64> = data
        .axis_iter(Axis(0))
        .zip(weights.axis_iter(Axis(0)))
        .map(|(step, w)| {
            let pairs = step.iter().copied().zip(w.iter().copied());
            weighted_mean(pairs, |x| !is_fill(x)).unwrap_or(f64::NAN)
        })
        .collect();
    let n_empty = means.iter().filter(|m| m.is_nan()).count();
    if n_empty > 0 {
        debug!(n_empty, "months without weighted data");
    }
    Ok(means)
}

/// [`monthly_global_means`] with one `(lat, lon)` weight grid shared by
/// every timestep, e.g. the plain area weights.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if `area` does not match the
/// spatial shape of `data`.
pub fn area_global_means(data: &Array3<f64>, area: &Array2<f64>) -> Result<Vec<f64>, GridError> {
    let weights = area
        .broadcast(data.dim())
        .ok_or_else(|| GridError::ShapeMismatch {
            field: "area weights".to_string(),
            expected: data.shape()[1..].to_vec(),
            got: area.shape().to_vec(),
        })?;
    monthly_global_means(data, weights)
}
