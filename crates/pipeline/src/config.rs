//! Pipeline configuration.

use blendmask_diagnostics::DiagnosticKind;
use blendmask_mask::{FIXED_ICE_REFERENCE_YEAR, MaskConfig};

use crate::error::PipelineError;
use crate::mode::BlendMode;

/// Configuration for [`blend_and_mask`](crate::blend_and_mask).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    mode: BlendMode,
    diagnostic: DiagnosticKind,
    annual_warming: bool,
    fixed_ice_reference_year: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: BlendMode::default(),
            diagnostic: DiagnosticKind::default(),
            annual_warming: false,
            fixed_ice_reference_year: FIXED_ICE_REFERENCE_YEAR,
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration for mode `xxx` and the decadal diagnostic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blend mode.
    pub fn with_mode(mut self, mode: BlendMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the period-mean diagnostic.
    pub fn with_diagnostic(mut self, diagnostic: DiagnosticKind) -> Self {
        self.diagnostic = diagnostic;
        self
    }

    /// Enable or disable the annual warming series.
    pub fn with_annual_warming(mut self, enabled: bool) -> Self {
        self.annual_warming = enabled;
        self
    }

    /// Set the year after which fixed-ice mode scans for ice.
    pub fn with_fixed_ice_reference_year(mut self, year: f64) -> Self {
        self.fixed_ice_reference_year = year;
        self
    }

    /// Returns the blend mode.
    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    /// Returns the diagnostic.
    pub fn diagnostic(&self) -> DiagnosticKind {
        self.diagnostic
    }

    /// Returns whether the annual warming series is computed.
    pub fn annual_warming(&self) -> bool {
        self.annual_warming
    }

    /// Returns the fixed-ice reference year.
    pub fn fixed_ice_reference_year(&self) -> f64 {
        self.fixed_ice_reference_year
    }

    /// Mask configuration implied by the mode.
    pub fn mask_config(&self) -> MaskConfig {
        MaskConfig::new()
            .with_fixed_ice(self.mode.fixed_ice())
            .with_reference_year(self.fixed_ice_reference_year)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.mask_config().validate()?;
        Ok(())
    }
}
