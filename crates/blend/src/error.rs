//! Error types for the blendmask-blend crate.

use blendmask_grid::GridError;

/// Error type for all fallible operations in the blendmask-blend crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlendError {
    /// Returned when a calendar-month phase has no timestep inside the
    /// climatology reference period.
    #[error("no timestep of calendar month {phase} inside the reference period ({start}, {end})")]
    EmptyReferencePeriod {
        /// Zero-based calendar-month phase.
        phase: usize,
        /// Exclusive lower bound of the period, in decimal years.
        start: f64,
        /// Exclusive upper bound of the period, in decimal years.
        end: f64,
    },

    /// Wrapped grid or shape error.
    #[error(transparent)]
    Grid(#[from] GridError),
}
