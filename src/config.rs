use std::path::PathBuf;

use serde::Deserialize;

/// Top-level blendmask configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlendmaskConfig {
    /// Input and output paths.
    pub io: IoConfig,

    /// Blend and diagnostic settings.
    #[serde(default)]
    pub blend: BlendToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub tas: PathBuf,
    pub tos: PathBuf,
    pub sic: PathBuf,
    pub sftlf: PathBuf,
    #[serde(default)]
    pub reference: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default = "default_sic_vars")]
    pub sic_vars: Vec<String>,
    #[serde(default = "default_reference_var")]
    pub reference_var: String,
}

fn default_sic_vars() -> Vec<String> {
    vec!["siconca".to_string(), "siconc".to_string()]
}
fn default_reference_var() -> String {
    "temperature_anomaly".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlendToml {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_diagnostic")]
    pub diagnostic: String,
    #[serde(default)]
    pub annual_warming: bool,
    #[serde(default = "default_fixed_ice_reference_year")]
    pub fixed_ice_reference_year: f64,
}

impl Default for BlendToml {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            diagnostic: default_diagnostic(),
            annual_warming: false,
            fixed_ice_reference_year: default_fixed_ice_reference_year(),
        }
    }
}

fn default_mode() -> String {
    "xxx".to_string()
}
fn default_diagnostic() -> String {
    "dec_mean_gmst".to_string()
}
fn default_fixed_ice_reference_year() -> f64 {
    1961.0
}
