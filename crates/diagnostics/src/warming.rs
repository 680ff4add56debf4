//! Attributable warming metrics on full-coverage air temperature.

use std::ops::Range;

use blendmask_calendar::{MONTHS_PER_YEAR, TimeAxis, YearWindow};
use blendmask_stats::mean;
use tracing::{debug, warn};

use crate::error::DiagnosticsError;

fn check_len(monthly: &[f64], axis: &TimeAxis) -> Result<(), DiagnosticsError> {
    if monthly.len() != axis.len() {
        return Err(DiagnosticsError::LengthMismatch {
            expected: axis.len(),
            got: monthly.len(),
        });
    }
    Ok(())
}

fn covered_range(axis: &TimeAxis, window: YearWindow) -> Result<Range<usize>, DiagnosticsError> {
    let range = axis.year_range(window);
    if range.is_empty() {
        return Err(DiagnosticsError::WindowNotCovered {
            first: window.first(),
            last: window.last(),
            start_year: axis.start_year(),
            n_months: axis.len(),
        });
    }
    if range.len() < window.n_years() * MONTHS_PER_YEAR {
        warn!(
            first = window.first(),
            last = window.last(),
            n_months = range.len(),
            "warming window only partly covered by the record"
        );
    }
    Ok(range)
}

/// Mean of `monthly` over the `recent` years minus its mean over the
/// `baseline` years. Windows are clipped to the record, so an incomplete
/// recent window averages the months that exist.
///
/// # Errors
///
/// Returns [`DiagnosticsError::WindowNotCovered`] if either window has no
/// month in the record, and [`DiagnosticsError::LengthMismatch`] if
/// `monthly` does not match `axis`.
pub fn warming_between(
    monthly: &[f64],
    axis: &TimeAxis,
    recent: YearWindow,
    baseline: YearWindow,
) -> Result<f64, DiagnosticsError> {
    check_len(monthly, axis)?;
    let recent_range = covered_range(axis, recent)?;
    let baseline_range = covered_range(axis, baseline)?;
    debug!(?recent_range, ?baseline_range, "warming windows");
    Ok(mean(&monthly[recent_range]) - mean(&monthly[baseline_range]))
}

/// Decadal warming: mean over 2010–2019 minus mean over 1850–1900.
///
/// # Errors
///
/// See [`warming_between`].
pub fn decadal_warming(monthly: &[f64], axis: &TimeAxis) -> Result<f64, DiagnosticsError> {
    warming_between(
        monthly,
        axis,
        YearWindow::RECENT_DECADE,
        YearWindow::PRE_INDUSTRIAL,
    )
}

/// Calendar-year means of `monthly` as anomalies from the mean of the
/// 1850–1900 years. The final year may be partial.
///
/// # Errors
///
/// Returns [`DiagnosticsError::WindowNotCovered`] if the record has no
/// month in 1850–1900, and [`DiagnosticsError::LengthMismatch`] if
/// `monthly` does not match `axis`.
pub fn annual_warming(monthly: &[f64], axis: &TimeAxis) -> Result<Vec<f64>, DiagnosticsError> {
    check_len(monthly, axis)?;
    let months = covered_range(axis, YearWindow::PRE_INDUSTRIAL)?;
    let years = months.start / MONTHS_PER_YEAR..months.end.div_ceil(MONTHS_PER_YEAR);

    let mut annual: Vec<f64> = monthly.chunks(MONTHS_PER_YEAR).map(mean).collect();
    let reference = mean(&annual[years.clone()]);
    debug!(
        n_years = axis.n_years(),
        ?years,
        reference,
        "annual warming reference"
    );
    for v in &mut annual {
        *v -= reference;
    }
    Ok(annual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_change_between_windows() {
        let axis = TimeAxis::new(1850, 170 * 12);
        let monthly: Vec<f64> = (0..axis.len())
            .map(|i| if axis.year_of(i) >= 2010 { 1.5 } else { 0.5 })
            .collect();
        assert_relative_eq!(decadal_warming(&monthly, &axis).unwrap(), 1.0);
    }

    #[test]
    fn incomplete_recent_decade_uses_available_months() {
        // Record ends December 2014.
        let axis = TimeAxis::new(1850, 165 * 12);
        let monthly: Vec<f64> = (0..axis.len())
            .map(|i| if axis.year_of(i) >= 2012 { 3.0 } else { 0.0 })
            .collect();
        // 2010–2014: two years at 0, three at 3.
        assert_relative_eq!(decadal_warming(&monthly, &axis).unwrap(), 1.8);
    }

    #[test]
    fn record_ending_before_2010_rejected() {
        let axis = TimeAxis::new(1850, 100 * 12);
        let monthly = vec![0.0; axis.len()];
        let err = decadal_warming(&monthly, &axis).unwrap_err();
        assert!(matches!(
            err,
            DiagnosticsError::WindowNotCovered { first: 2010, .. }
        ));
    }

    #[test]
    fn later_start_clips_pre_industrial() {
        // Starting 1880: pre-industrial covers 1880–1900 only.
        let axis = TimeAxis::new(1880, 140 * 12);
        let monthly: Vec<f64> = (0..axis.len())
            .map(|i| match axis.year_of(i) {
                ..=1900 => 1.0,
                2010.. => 4.0,
                _ => 0.0,
            })
            .collect();
        assert_relative_eq!(decadal_warming(&monthly, &axis).unwrap(), 3.0);
    }

    #[test]
    fn annual_partial_final_year() {
        let axis = TimeAxis::new(1850, 60 * 12 + 6);
        let monthly: Vec<f64> = (0..axis.len()).map(|i| axis.year_of(i) as f64).collect();
        let annual = annual_warming(&monthly, &axis).unwrap();
        assert_eq!(annual.len(), 61);
        // Mean of 1850..=1900 is 1875.
        assert_relative_eq!(annual[0], -25.0);
        assert_relative_eq!(annual[60], 1910.0 - 1875.0);
        let reference: f64 = annual[..51].iter().sum::<f64>() / 51.0;
        assert_relative_eq!(reference, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn length_checked() {
        let axis = TimeAxis::new(1850, 24);
        assert!(matches!(
            annual_warming(&[0.0; 12], &axis),
            Err(DiagnosticsError::LengthMismatch { .. })
        ));
    }
}
