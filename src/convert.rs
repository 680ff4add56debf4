//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use crate::config::{BlendToml, IoConfig};

use blendmask_diagnostics::DiagnosticKind;
use blendmask_io::{ModelPaths, ReaderConfig};
use blendmask_pipeline::{BlendMode, PipelineConfig};

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_start_year(io.start_year)
        .with_sic_vars(io.sic_vars.clone())
        .with_reference_var(&io.reference_var);
    cfg.validate().context("invalid [io] configuration")?;
    Ok(cfg)
}

/// Collects the four model file paths.
pub fn build_model_paths(io: &IoConfig) -> ModelPaths {
    ModelPaths {
        tas: io.tas.clone(),
        tos: io.tos.clone(),
        sic: io.sic.clone(),
        sftlf: io.sftlf.clone(),
    }
}

/// Builds a [`PipelineConfig`] from the TOML blend section.
///
/// `mode` and `diagnostic` replace the configured values when given.
pub fn build_pipeline_config(
    blend: &BlendToml,
    mode: Option<&str>,
    diagnostic: Option<&str>,
) -> Result<PipelineConfig> {
    let mode: BlendMode = mode
        .unwrap_or(&blend.mode)
        .parse()
        .context("invalid blend mode")?;
    let diagnostic: DiagnosticKind = diagnostic
        .unwrap_or(&blend.diagnostic)
        .parse()
        .context("invalid diagnostic")?;

    let cfg = PipelineConfig::new()
        .with_mode(mode)
        .with_diagnostic(diagnostic)
        .with_annual_warming(blend.annual_warming)
        .with_fixed_ice_reference_year(blend.fixed_ice_reference_year);
    cfg.validate().context("invalid [blend] configuration")?;
    Ok(cfg)
}
