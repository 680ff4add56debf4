//! Error types for the blendmask-grid crate.

/// Error type for all fallible operations in the blendmask-grid crate.
///
/// Shape and grid mismatches are fatal for the pipeline: inputs that do not
/// share one spatial grid are rejected instead of being broadcast.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when a coordinate axis has no points.
    #[error("empty {axis} axis")]
    EmptyAxis {
        /// Name of the empty axis.
        axis: String,
    },

    /// Returned when an array's shape does not match its grid descriptor.
    #[error("shape mismatch for {field}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Name of the offending field.
        field: String,
        /// Expected shape.
        expected: Vec<usize>,
        /// Actual shape.
        got: Vec<usize>,
    },

    /// Returned when two fields do not share one spatial grid.
    #[error(
        "grid mismatch for {field}: expected {expected_lat}x{expected_lon} (lat x lon), got {got_lat}x{got_lon}"
    )]
    GridMismatch {
        /// Name of the offending field.
        field: String,
        /// Latitude count of the reference grid.
        expected_lat: usize,
        /// Longitude count of the reference grid.
        expected_lon: usize,
        /// Latitude count of the offending field.
        got_lat: usize,
        /// Longitude count of the offending field.
        got_lon: usize,
    },

    /// Returned when a field's record is shorter than required.
    #[error("time mismatch for {field}: expected at least {expected} steps, got {got}")]
    TimeMismatch {
        /// Name of the offending field.
        field: String,
        /// Required number of time steps.
        expected: usize,
        /// Actual number of time steps.
        got: usize,
    },
}
