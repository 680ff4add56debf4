//! Percentage-or-fraction normalization of sea-ice and ocean-fraction fields.

use ndarray::{ArrayBase, DataMut, Dimension};

/// A field whose maximum exceeds this value is assumed to be in percent.
pub const PERCENT_DETECTION_THRESHOLD: f64 = 90.0;

/// Units inferred by [`normalize_fraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionUnits {
    /// Values were already fractions in `[0, 1]`.
    Fraction,
    /// Values were percentages and have been divided by 100.
    Percent,
}

/// Clamp a sea-ice or ocean-fraction field in place and convert it to a
/// fraction.
///
/// Values below 0, above 100, or NaN (which covers the fill sentinel) are
/// set to 0, i.e. missing cells count as open water / land. Then, if the
/// largest remaining value exceeds [`PERCENT_DETECTION_THRESHOLD`], the
/// whole field is scaled by 0.01.
///
/// This unit inference is a heuristic, not a guarantee: a fractional field
/// is never rescaled (its maximum is at most 1), but a percentage field
/// whose largest value is 90 % or less is left unscaled and will then be
/// misread as fractions above 1. Callers with reliable unit metadata
/// should convert before calling.
pub fn normalize_fraction<S, D>(field: &mut ArrayBase<S, D>) -> FractionUnits
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    field.mapv_inplace(|v| {
        if v.is_nan() || !(0.0..=100.0).contains(&v) {
            0.0
        } else {
            v
        }
    });
    let max = field.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    if max > PERCENT_DETECTION_THRESHOLD {
        field.mapv_inplace(|v| 0.01 * v);
        FractionUnits::Percent
    } else {
        FractionUnits::Fraction
    }
}
