//! Blended, masked global-mean temperature diagnostics.
//!
//! [`blend_and_mask`] runs the whole method on in-memory fields:
//!
//! 1. **Area weights** — per latitude band, broadcast over longitude
//! 2. **Mask** — open-water fraction from sea ice and land fraction,
//!    optionally with fixed ice (`f`)
//! 3. **Blend** — air and sea-surface temperature by open-water fraction,
//!    blending anomalies (`a`) or absolute temperatures
//! 4. **Diagnostics** — period-mean anomalies of the blend under area
//!    weights, optionally zeroed where the reference has no coverage (`m`),
//!    plus warming metrics of full-coverage air temperature
//!
//! Any grid mismatch or unsupported configuration aborts the run; missing
//! data never does.

mod config;
mod error;
mod inputs;
mod mode;
mod result;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use inputs::BlendMaskInputs;
pub use mode::BlendMode;
pub use result::BlendMaskResult;

pub use blendmask_blend::BlendOrder;
pub use blendmask_diagnostics::{DiagnosticKind, DiagnosticsOutput};

use blendmask_blend::blend_fields;
use blendmask_calendar::TimeAxis;
use blendmask_diagnostics::{
    annual_warming, area_global_means, decadal_warming, monthly_global_means,
    period_mean_diagnostic,
};
use blendmask_grid::{GridError, GridSpec, GriddedField, area_weights};
use blendmask_mask::{
    build_open_water_mask, coverage_weights, is_uncovered, ocean_fraction_from_land,
    render_presence_ascii,
};
use ndarray::{Array3, Axis};
use tracing::{debug, info, trace};

/// Rotate a reference dataset onto the model grid's longitude convention and
/// pad or truncate it to `n_time` steps.
///
/// The longitude axis is rotated left by half its length, so a grid starting
/// at −177.5° starts at 2.5°. Padded steps hold the fill sentinel.
///
/// # Errors
///
/// Returns [`PipelineError::Grid`] if the reference grid does not match the
/// model grid's dimensions.
pub fn align_reference(
    reference: GriddedField,
    model_grid: &GridSpec,
    n_time: usize,
) -> Result<GriddedField, PipelineError> {
    let shift = reference.grid().n_lon() / 2;
    let aligned = reference.rotate_longitudes(shift).with_time_len(n_time);
    model_grid.check_compatible(aligned.grid(), aligned.name())?;
    debug!(shift, n_time, "reference aligned to model grid");
    Ok(aligned)
}

/// Run the blend-and-mask method.
///
/// Returns the period-mean diagnostic of the blended field, the same
/// diagnostic for the reference dataset (when given), the decadal warming
/// of full-coverage air temperature and, if configured, its annual series.
///
/// # Errors
///
/// Returns [`PipelineError::MissingReference`] if the mode masks by
/// coverage without a reference dataset, [`PipelineError::EmptyRecord`] for
/// an empty record, and the wrapped stage errors for grid mismatches,
/// uncovered reference periods or warming windows.
#[tracing::instrument(
    skip(inputs, config),
    fields(mode = %config.mode(), diagnostic = %config.diagnostic())
)]
pub fn blend_and_mask(
    inputs: BlendMaskInputs,
    config: &PipelineConfig,
) -> Result<BlendMaskResult, PipelineError> {
    config.validate()?;
    let mode = config.mode();
    let kind = config.diagnostic();

    let BlendMaskInputs {
        tas,
        tos,
        sic,
        land,
        reference,
        start_year,
    } = inputs;

    if tas.n_time() == 0 {
        return Err(PipelineError::EmptyRecord);
    }
    if mode.mask_by_coverage() && reference.is_none() {
        return Err(PipelineError::MissingReference {
            mode: mode.to_string(),
        });
    }
    let axis = TimeAxis::new(start_year, tas.n_time());
    info!(
        start_year,
        n_months = axis.len(),
        n_lat = tas.grid().n_lat(),
        n_lon = tas.grid().n_lon(),
        "model record"
    );

    // --- Stage 1: area weights ---
    let area = area_weights(tas.grid());
    let model_grid = tas.grid().clone();
    tas.check_same_grid(&tos)?;

    let reference = reference
        .map(|r| align_reference(r, &model_grid, axis.len()))
        .transpose()?;
    if let Some(r) = &reference
        && let Some(last) = r.n_time().checked_sub(1)
    {
        let coverage = r.data().index_axis(Axis(0), last);
        trace!("observational coverage:\n{}", render_presence_ascii(coverage, is_uncovered));
    }

    // --- Stage 2: open-water mask ---
    let ocean = ocean_fraction_from_land(&land);
    let mask = build_open_water_mask(sic, &ocean, &tos, &axis, &config.mask_config())?;

    // --- Stage 3: blend ---
    let blended = blend_fields(tas, tos, mask.fraction(), &axis, mode.order())?;
    let (tas_anomaly, blended) = blended.into_parts();

    // --- Stage 4: diagnostics ---
    let weights: Array3<f64> = match &reference {
        Some(r) if mode.mask_by_coverage() => coverage_weights(&area, r.data()),
        _ => area
            .broadcast(blended.raw_dim())
            .ok_or_else(|| GridError::ShapeMismatch {
                field: "area weights".to_string(),
                expected: blended.shape()[1..].to_vec(),
                got: area.shape().to_vec(),
            })?
            .to_owned(),
    };
    let monthly = monthly_global_means(&blended, weights.view())?;
    let diagnostic = period_mean_diagnostic(&monthly, kind);

    let reference_diagnostic = reference
        .as_ref()
        .map(|r| monthly_global_means(r.data(), weights.view()))
        .transpose()?
        .map(|monthly| period_mean_diagnostic(&monthly, kind));

    let gsat = area_global_means(&tas_anomaly, &area)?;
    let decadal_warming = decadal_warming(&gsat, &axis)?;
    let annual_warming = if config.annual_warming() {
        Some(annual_warming(&gsat, &axis)?)
    } else {
        None
    };
    info!(
        n_periods = diagnostic.len(),
        decadal_warming, "diagnostics computed"
    );

    Ok(BlendMaskResult {
        mode,
        kind,
        axis,
        diagnostic,
        reference_diagnostic,
        decadal_warming,
        annual_warming,
    })
}
