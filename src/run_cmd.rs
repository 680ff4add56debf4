//! Run command: read model output, blend and mask, write the diagnostic.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use blendmask_io::{read_model_inputs, read_reference, write_json};
use blendmask_pipeline::{BlendMaskInputs, BlendMode, blend_and_mask};

use crate::cli::RunArgs;
use crate::config::BlendmaskConfig;
use crate::convert;

const DEFAULT_OUTPUT: &str = "blendmask.json";

/// Run the blend-and-mask pipeline for one model.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: BlendmaskConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let pipeline_cfg = convert::build_pipeline_config(
        &config.blend,
        args.mode.as_deref(),
        args.diagnostic.as_deref(),
    )?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let output = args
        .output
        .or_else(|| config.io.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    // 2. Read model fields
    let paths = convert::build_model_paths(&config.io);
    info!(tas = %paths.tas.display(), "reading model output");
    let model = read_model_inputs(&paths, &reader_cfg).context("failed to read model output")?;

    let mut inputs =
        BlendMaskInputs::new(model.tas, model.tos, model.sic, model.land, model.start_year);

    // 3. Optional reference dataset
    if let Some(reference) = &config.io.reference {
        info!(path = %reference.display(), "reading reference dataset");
        let field = read_reference(reference, &reader_cfg).with_context(|| {
            format!("failed to read reference dataset: {}", reference.display())
        })?;
        inputs = inputs.with_reference(field);
    }

    // 4. Blend, mask and reduce
    let result = blend_and_mask(inputs, &pipeline_cfg).context("blend-and-mask failed")?;
    info!(
        mode = %result.mode(),
        diagnostic = %result.kind(),
        n_periods = result.diagnostic().len(),
        decadal_warming = result.decadal_warming(),
        "diagnostic computed"
    );

    // 5. Write JSON
    write_json(&output, &result.to_output())
        .with_context(|| format!("failed to write output: {}", output.display()))?;
    info!(path = %output.display(), "done");
    Ok(())
}

/// Print every blend mode with a one-line description.
pub fn list_modes() {
    for mode in BlendMode::all() {
        println!("{mode}  {}", describe(mode));
    }
}

fn describe(mode: BlendMode) -> String {
    let coverage = if mode.mask_by_coverage() {
        "reference coverage"
    } else {
        "full coverage"
    };
    let order = if mode.blend_anomalies() {
        "blend anomalies"
    } else {
        "blend absolute temperatures"
    };
    let ice = if mode.fixed_ice() {
        "fixed ice"
    } else {
        "variable ice"
    };
    format!("{coverage}, {order}, {ice}")
}
