//! Error types for blendmask-io.

use std::path::PathBuf;

use blendmask_grid::GridError;

/// Error type for all fallible operations in the blendmask-io crate.
///
/// Covers file-system failures, NetCDF library errors, missing or
/// malformed variables and time metadata, and grid inconsistencies found
/// while assembling fields.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a required variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a dimension has an unexpected size.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when a time value cannot be parsed or is out of range.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time parsing issue.
        reason: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an output file cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// Wrapped grid or shape error.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}
