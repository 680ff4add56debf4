//! Error types for the blendmask-pipeline crate.

use blendmask_blend::BlendError;
use blendmask_diagnostics::DiagnosticsError;
use blendmask_grid::GridError;
use blendmask_mask::MaskError;

/// Error type for all fallible operations in the blendmask-pipeline crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    /// Returned when a mode string is not one of the eight supported ones.
    #[error(
        "invalid mode '{mode}' (expected three characters from [mx][ax][fx], e.g. \"maf\" or \"xxx\")"
    )]
    InvalidMode {
        /// The mode string that was given.
        mode: String,
    },

    /// Returned when the model record has no timesteps.
    #[error("model record is empty")]
    EmptyRecord,

    /// Returned when coverage masking is requested without a reference
    /// dataset.
    #[error("mode '{mode}' masks by observational coverage but no reference dataset was given")]
    MissingReference {
        /// The mode string that was requested.
        mode: String,
    },

    /// Wrapped grid or shape error.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Wrapped mask-construction error.
    #[error(transparent)]
    Mask(#[from] MaskError),

    /// Wrapped blending error.
    #[error(transparent)]
    Blend(#[from] BlendError),

    /// Wrapped diagnostics error.
    #[error(transparent)]
    Diagnostics(#[from] DiagnosticsError),
}
