//! Period-mean anomaly series.

use blendmask_stats::{center_nan, chunk_nan_means};

use crate::kind::DiagnosticKind;

/// Reduce a monthly global-mean series to period means, centred on their
/// own mean.
///
/// Produces `ceil(len / P)` values for the period `P` of `kind`; the last
/// period averages whatever months remain. NaN months are skipped inside
/// a period, and a period with no valid month stays NaN without affecting
/// the centring of the others.
pub fn period_mean_diagnostic(monthly: &[f64], kind: DiagnosticKind) -> Vec<f64> {
    let mut series = chunk_nan_means(monthly, kind.period_months());
    center_nan(&mut series);
    series
}
