//! Error types for the blendmask-mask crate.

use blendmask_grid::GridError;

/// Error type for all fallible operations in the blendmask-mask crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MaskError {
    /// Returned when fixed-ice mode is requested but the record never
    /// reaches the reference year.
    #[error("fixed-ice reference year {year} not covered: record ends at {last:.2}")]
    ReferenceYearNotCovered {
        /// Reference year the scan looked for.
        year: f64,
        /// Decimal year of the last record step.
        last: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped grid or shape error.
    #[error(transparent)]
    Grid(#[from] GridError),
}
