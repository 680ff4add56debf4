//! Observational-coverage aggregation weights.

use ndarray::{Array2, Array3, Axis, Zip};

/// Reference values below this mark a cell without observations.
pub const NO_COVERAGE_THRESHOLD: f64 = -100.0;

/// Returns `true` if a reference-dataset value marks missing coverage.
///
/// NaN counts as uncovered.
pub fn is_uncovered(value: f64) -> bool {
    value.is_nan() || value < NO_COVERAGE_THRESHOLD
}

/// Broadcast `(lat, lon)` area weights over the time axis of `coverage` and
/// zero them wherever the coverage field reports no data.
///
/// `coverage` must already be aligned with the model grid and record.
pub fn coverage_weights(weights: &Array2<f64>, coverage: &Array3<f64>) -> Array3<f64> {
    let nt = coverage.len_of(Axis(0));
    let (ny, nx) = weights.dim();
    let mut out = Array3::zeros((nt, ny, nx));
    for mut step in out.outer_iter_mut() {
        step.assign(weights);
    }
    Zip::from(&mut out).and(coverage).for_each(|w, &c| {
        if is_uncovered(c) {
            *w = 0.0;
        }
    });
    out
}
