//! Error types for the blendmask-calendar crate.

/// Error type for all fallible operations in the blendmask-calendar crate.
///
/// Covers construction of year windows and baseline periods whose bounds
/// are out of order or not finite.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year window ends before it starts.
    #[error("invalid year window: {first}..={last} (first must not exceed last)")]
    InvalidYearWindow {
        /// First calendar year of the window.
        first: i32,
        /// Last calendar year of the window.
        last: i32,
    },

    /// Returned when a decimal-year period is empty or not finite.
    #[error("invalid baseline period: ({start}, {end})")]
    InvalidBaselinePeriod {
        /// Exclusive lower bound.
        start: f64,
        /// Exclusive upper bound.
        end: f64,
    },
}
