//! Mask construction configuration.

use crate::error::MaskError;
use crate::fixed_ice::FIXED_ICE_REFERENCE_YEAR;

/// Configuration for [`build_open_water_mask`](crate::build_open_water_mask).
#[derive(Debug, Clone)]
pub struct MaskConfig {
    /// Hold the sea-ice distribution fixed at its post-reference maximum.
    fixed_ice: bool,
    /// Decimal year after which ice presence is scanned in fixed-ice mode.
    reference_year: f64,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            fixed_ice: false,
            reference_year: FIXED_ICE_REFERENCE_YEAR,
        }
    }
}

impl MaskConfig {
    /// Creates a configuration with variable (observed) sea ice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable fixed-ice mode.
    pub fn with_fixed_ice(mut self, fixed_ice: bool) -> Self {
        self.fixed_ice = fixed_ice;
        self
    }

    /// Set the fixed-ice reference year.
    pub fn with_reference_year(mut self, year: f64) -> Self {
        self.reference_year = year;
        self
    }

    /// Returns whether fixed-ice mode is enabled.
    pub fn fixed_ice(&self) -> bool {
        self.fixed_ice
    }

    /// Returns the fixed-ice reference year.
    pub fn reference_year(&self) -> f64 {
        self.reference_year
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), MaskError> {
        if !self.reference_year.is_finite() {
            return Err(MaskError::InvalidConfig {
                reason: format!(
                    "fixed-ice reference year must be finite, got {}",
                    self.reference_year
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = MaskConfig::default();
        assert!(!c.fixed_ice());
        assert_eq!(c.reference_year(), 1961.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let c = MaskConfig::new()
            .with_fixed_ice(true)
            .with_reference_year(1979.0);
        assert!(c.fixed_ice());
        assert_eq!(c.reference_year(), 1979.0);
    }

    #[test]
    fn non_finite_reference_year_rejected() {
        let c = MaskConfig::new().with_reference_year(f64::NAN);
        assert!(matches!(
            c.validate(),
            Err(MaskError::InvalidConfig { .. })
        ));
    }
}
