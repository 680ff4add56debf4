//! NaN-aware scalar reductions for the blendmask pipeline.
//!
//! Missing data flows through the pipeline as NaN. Reductions come in two
//! flavours: the plain ones propagate NaN (matching an ordinary arithmetic
//! mean), the `nan_*` ones skip it.

/// Arithmetic mean of a slice. NaN propagates; returns NaN if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Mean of the non-NaN elements. Returns NaN if there are none.
pub fn nan_mean(data: &[f64]) -> f64 {
    let (sum, n) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Weighted mean `Σ w·x / Σ w` over the `(value, weight)` pairs accepted by
/// `keep`.
///
/// Pairs with zero weight never contribute. Returns `None` when the total
/// accepted weight is zero, so the caller decides how to mark the slice.
pub fn weighted_mean<I, F>(pairs: I, keep: F) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
    F: Fn(f64) -> bool,
{
    let (num, den) = pairs
        .into_iter()
        .filter(|&(x, w)| w != 0.0 && keep(x))
        .fold((0.0, 0.0), |(num, den), (x, w)| (num + w * x, den + w));
    if den == 0.0 { None } else { Some(num / den) }
}

/// NaN-aware means of consecutive non-overlapping chunks of `chunk` elements.
///
/// Produces `ceil(len / chunk)` values; the last chunk averages whatever
/// remains. A chunk without any non-NaN element yields NaN.
///
/// # Panics
///
/// Panics if `chunk` is zero.
pub fn chunk_nan_means(data: &[f64], chunk: usize) -> Vec<f64> {
    assert!(chunk > 0, "chunk_nan_means: chunk must be positive");
    data.chunks(chunk).map(nan_mean).collect()
}

/// Subtract the NaN-aware mean of `data` from every element in place.
///
/// NaN elements stay NaN. A slice with no valid element is left untouched.
pub fn center_nan(data: &mut [f64]) {
    let m = nan_mean(data);
    if m.is_nan() {
        return;
    }
    for v in data.iter_mut() {
        *v -= m;
    }
}

/// Minimum, maximum and mean of the finite elements, for log summaries.
pub fn finite_summary(data: &[f64]) -> Option<(f64, f64, f64)> {
    let mut n = 0usize;
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in data.iter().filter(|v| v.is_finite()) {
        n += 1;
        lo = lo.min(v);
        hi = hi.max(v);
        sum += v;
    }
    (n > 0).then(|| (lo, hi, sum / n as f64))
}
