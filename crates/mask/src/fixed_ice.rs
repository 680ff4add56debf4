//! Fixed sea-ice mode: a temporally stationary ice distribution.

use blendmask_calendar::{MONTHS_PER_YEAR, TimeAxis};
use ndarray::{Array3, Axis, Zip, s};
use tracing::debug;

use crate::error::MaskError;

/// Ice presence is scanned from the first January after this year.
pub const FIXED_ICE_REFERENCE_YEAR: f64 = 1961.0;

/// A cell counts as ice-bearing when its concentration exceeds 1 %.
pub const ICE_PRESENCE_THRESHOLD: f64 = 0.01;

/// Hold the sea-ice distribution fixed at its post-reference extent.
///
/// `sic` must already be normalized to fractions. For each calendar month
/// `m`, the reference step is `m0 + m`, where `m0` is the first January
/// after `reference_year`. Any cell whose concentration in that month
/// exceeds [`ICE_PRESENCE_THRESHOLD`] in some year from the reference step
/// onward is set to full ice cover (1.0) for every occurrence of that
/// month across the whole record, including years before the reference.
///
/// Months whose reference step lies beyond the end of the record are left
/// unchanged. Returns the number of `(month, cell)` pairs that were fixed.
///
/// # Errors
///
/// Returns [`MaskError::ReferenceYearNotCovered`] if the record has no
/// January after `reference_year`.
pub fn fix_ice(
    sic: &mut Array3<f64>,
    axis: &TimeAxis,
    reference_year: f64,
) -> Result<usize, MaskError> {
    let m0 = axis
        .first_january_after(reference_year)
        .ok_or_else(|| MaskError::ReferenceYearNotCovered {
            year: reference_year,
            last: axis.decimal_year(axis.len().saturating_sub(1)),
        })?;
    debug!(m0, date = axis.decimal_year(m0), "fixed-ice reference step");

    let nt = sic.len_of(Axis(0));
    let mut n_fixed = 0;
    for month in 0..MONTHS_PER_YEAR {
        let reference = m0 + month;
        if reference >= nt {
            continue;
        }
        let ever_iced = sic
            .slice(s![reference..;MONTHS_PER_YEAR, .., ..])
            .fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| acc.max(v))
            .mapv(|cmax| cmax > ICE_PRESENCE_THRESHOLD);
        n_fixed += ever_iced.iter().filter(|&&iced| iced).count();

        for mut step in sic
            .slice_mut(s![month..;MONTHS_PER_YEAR, .., ..])
            .outer_iter_mut()
        {
            Zip::from(&mut step).and(&ever_iced).for_each(|c, &iced| {
                if iced {
                    *c = 1.0;
                }
            });
        }
    }
    debug!(n_fixed, "fixed-ice cells marked");
    Ok(n_fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn record_before_reference_rejected() {
        let axis = TimeAxis::new(1900, 24);
        let mut sic = Array3::zeros((24, 1, 1));
        let err = fix_ice(&mut sic, &axis, FIXED_ICE_REFERENCE_YEAR).unwrap_err();
        assert!(matches!(err, MaskError::ReferenceYearNotCovered { .. }));
    }

    #[test]
    fn ice_free_record_untouched() {
        let axis = TimeAxis::new(1950, 20 * 12);
        let mut sic = Array3::zeros((20 * 12, 2, 2));
        assert_eq!(fix_ice(&mut sic, &axis, 1961.0).unwrap(), 0);
        assert!(sic.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn threshold_is_strict() {
        let axis = TimeAxis::new(1960, 5 * 12);
        let mut sic = Array3::zeros((5 * 12, 1, 2));
        // March 1962: cell 0 at exactly 1 %, cell 1 just above.
        sic[[2 * 12 + 2, 0, 0]] = 0.01;
        sic[[2 * 12 + 2, 0, 1]] = 0.011;
        assert_eq!(fix_ice(&mut sic, &axis, 1961.0).unwrap(), 1);
        for year in 0..5 {
            assert_eq!(sic[[year * 12 + 2, 0, 0]], if year == 2 { 0.01 } else { 0.0 });
            assert_eq!(sic[[year * 12 + 2, 0, 1]], 1.0);
        }
    }

    #[test]
    fn pre_reference_ice_ignored() {
        let axis = TimeAxis::new(1950, 20 * 12);
        let mut sic = Array3::zeros((20 * 12, 1, 1));
        // Only ice before 1961.
        sic[[5 * 12, 0, 0]] = 0.8;
        assert_eq!(fix_ice(&mut sic, &axis, 1961.0).unwrap(), 0);
        assert_eq!(sic[[5 * 12, 0, 0]], 0.8);
        assert_eq!(sic[[15 * 12, 0, 0]], 0.0);
    }

    #[test]
    fn other_months_unaffected() {
        let axis = TimeAxis::new(1960, 4 * 12);
        let mut sic = Array3::zeros((4 * 12, 1, 1));
        sic[[2 * 12 + 8, 0, 0]] = 0.3; // September 1962
        fix_ice(&mut sic, &axis, 1961.0).unwrap();
        for t in 0..4 * 12 {
            let expected = if t % 12 == 8 { 1.0 } else { 0.0 };
            assert_eq!(sic[[t, 0, 0]], expected, "t = {t}");
        }
    }

    #[test]
    fn reference_beyond_record_skipped() {
        // Record ends in March 1961: only Jan–Mar have a reference step.
        let axis = TimeAxis::new(1960, 12 + 3);
        let mut sic = Array3::from_elem((15, 1, 1), 0.5);
        assert_eq!(fix_ice(&mut sic, &axis, 1961.0).unwrap(), 3);
        assert_eq!(sic[[4, 0, 0]], 0.5);
        assert_eq!(sic[[0, 0, 0]], 1.0);
    }
}
