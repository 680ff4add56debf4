//! Error types for the blendmask-diagnostics crate.

use blendmask_grid::GridError;

/// Error type for all fallible operations in the blendmask-diagnostics crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagnosticsError {
    /// Returned when a diagnostic name is not one of the supported ones.
    #[error(
        "unsupported diagnostic '{name}' (expected dec_mean_gmst, ann_mean_gmst, fiveyr_mean_gmst or twoyr_mean_gmst)"
    )]
    UnsupportedDiagnostic {
        /// The name that was requested.
        name: String,
    },

    /// Returned when a warming window has no month inside the record.
    #[error(
        "years {first}-{last} not covered by record starting {start_year} with {n_months} months"
    )]
    WindowNotCovered {
        /// First calendar year of the window.
        first: i32,
        /// Last calendar year of the window.
        last: i32,
        /// First calendar year of the record.
        start_year: i32,
        /// Record length in months.
        n_months: usize,
    },

    /// Returned when a series length disagrees with its time axis.
    #[error("length mismatch: expected {expected} months, got {got}")]
    LengthMismatch {
        /// Length of the time axis.
        expected: usize,
        /// Length of the series.
        got: usize,
    },

    /// Wrapped grid or shape error.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },
}
