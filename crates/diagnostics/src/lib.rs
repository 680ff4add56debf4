//! Stage 4 of the blendmask pipeline: reduce gridded temperature fields to
//! area-weighted global-mean series and warming metrics.
//!
//! - [`monthly_global_means`] — `Σ w·x / Σ w` per month, NaN where no weight
//! - [`period_mean_diagnostic`] — non-overlapping period means, centred
//! - [`decadal_warming`] — 2010–2019 minus 1850–1900
//! - [`annual_warming`] — calendar-year means relative to 1850–1900
//!
//! [`DiagnosticsOutput`] bundles the results for JSON output.

mod error;
mod global_mean;
mod kind;
mod output;
mod period;
mod warming;

pub use error::DiagnosticsError;
pub use global_mean::{area_global_means, monthly_global_means};
pub use kind::DiagnosticKind;
pub use output::{DiagnosticsOutput, to_json};
pub use period::period_mean_diagnostic;
pub use warming::{annual_warming, decadal_warming};
