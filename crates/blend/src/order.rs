//! Blend ordering and the stage 3 entry point.

use std::fmt;

use blendmask_calendar::{BaselinePeriod, TimeAxis};
use blendmask_grid::{GridError, GriddedField, fill_to_nan, is_fill};
use ndarray::Array3;
use tracing::{debug, info};

use crate::baseline::{ClimatologyMean, to_anomalies};
use crate::blend::{blend_convex, invalidate_sst};
use crate::error::BlendError;
use crate::repair::fill_missing_from;

/// Whether the fields are converted to anomalies before or after blending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendOrder {
    /// Baseline `tas` and `tos` separately, then blend the anomalies.
    AnomaliesFirst,
    /// Blend absolute temperatures, then baseline the blend.
    #[default]
    BlendFirst,
}

impl fmt::Display for BlendOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnomaliesFirst => write!(f, "anomalies-first"),
            Self::BlendFirst => write!(f, "blend-first"),
        }
    }
}

/// Output of [`blend_fields`]: both series as anomalies from the
/// 1961–1990 monthly climatology.
#[derive(Debug, Clone)]
pub struct BlendedFields {
    tas_anomaly: Array3<f64>,
    blended: Array3<f64>,
    n_repaired: usize,
}

impl BlendedFields {
    /// Air-temperature anomalies, full coverage.
    pub fn tas_anomaly(&self) -> &Array3<f64> {
        &self.tas_anomaly
    }

    /// Blended anomalies, NaN-free wherever `tas` is finite.
    pub fn blended(&self) -> &Array3<f64> {
        &self.blended
    }

    /// Number of blended cells that were filled from `tas`.
    pub fn n_repaired(&self) -> usize {
        self.n_repaired
    }

    /// Consumes the result and returns `(tas_anomaly, blended)`.
    pub fn into_parts(self) -> (Array3<f64>, Array3<f64>) {
        (self.tas_anomaly, self.blended)
    }
}

/// Blend `tas` and `tos` by the open-water `mask` and baseline the result.
///
/// `tas` and `tos` must share one grid and have `axis.len()` steps; `mask`
/// must have the same `(time, lat, lon)` shape. Anomalies are taken from
/// the [`BaselinePeriod::CLIMATOLOGY_1961_1990`] monthly climatology.
///
/// Missing `tas` (NaN or the fill sentinel) is NaN in both outputs, so the
/// global means skip it.
///
/// # Errors
///
/// Returns [`BlendError::Grid`] on grid or shape mismatch and
/// [`BlendError::EmptyReferencePeriod`] if the record does not cover every
/// calendar month of the reference period.
#[tracing::instrument(skip(tas, tos, mask, axis))]
pub fn blend_fields(
    tas: GriddedField,
    tos: GriddedField,
    mask: &Array3<f64>,
    axis: &TimeAxis,
    order: BlendOrder,
) -> Result<BlendedFields, BlendError> {
    tas.check_same_grid(&tos)?;
    for field in [&tas, &tos] {
        if field.n_time() != axis.len() {
            return Err(GridError::TimeMismatch {
                field: field.name().to_string(),
                expected: axis.len(),
                got: field.n_time(),
            }
            .into());
        }
    }
    if mask.dim() != tas.data().dim() {
        return Err(GridError::ShapeMismatch {
            field: "mask".to_string(),
            expected: tas.data().shape().to_vec(),
            got: mask.shape().to_vec(),
        }
        .into());
    }

    let period = BaselinePeriod::CLIMATOLOGY_1961_1990;
    let mut tas = tas.into_data();
    let n_missing_tas = tas.iter().filter(|v| is_fill(**v)).count();
    tas.mapv_inplace(fill_to_nan);
    if n_missing_tas > 0 {
        debug!(n_missing_tas, "missing air temperature set to NaN");
    }
    let mut tos = tos.into_data();

    let mut blended = match order {
        BlendOrder::AnomaliesFirst => {
            let n_invalid = invalidate_sst(&mut tos);
            debug!(n_invalid, "invalid sst set to NaN");
            to_anomalies(&mut tas, axis, period, ClimatologyMean::Plain)?;
            to_anomalies(&mut tos, axis, period, ClimatologyMean::NanAware)?;
            blend_convex(&tas, &tos, mask)
        }
        BlendOrder::BlendFirst => {
            let mut blended = blend_convex(&tas, &tos, mask);
            to_anomalies(&mut tas, axis, period, ClimatologyMean::Plain)?;
            to_anomalies(&mut blended, axis, period, ClimatologyMean::Plain)?;
            blended
        }
    };

    let n_repaired = fill_missing_from(&mut blended, &tas);
    info!(n_repaired, "blend complete");

    Ok(BlendedFields {
        tas_anomaly: tas,
        blended,
        n_repaired,
    })
}
