//! Monthly climatology over a reference period and its removal.

use blendmask_calendar::{BaselinePeriod, MONTHS_PER_YEAR, TimeAxis};
use blendmask_grid::GridError;
use ndarray::{Array2, Array3, Axis, s};
use tracing::debug;

use crate::error::BlendError;

/// How the per-cell climatological mean treats NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimatologyMean {
    /// Arithmetic mean; a single NaN makes the cell's climatology NaN.
    Plain,
    /// Mean of the non-NaN values; NaN only if every value is NaN.
    NanAware,
}

impl ClimatologyMean {
    fn reduce(self, values: impl Iterator<Item = f64>) -> f64 {
        let (sum, count) = values
            .filter(|v| self == Self::Plain || !v.is_nan())
            .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
        if count == 0 {
            f64::NAN
        } else {
            sum / count as f64
        }
    }
}

/// Per-phase climatology of `data` over `period`.
///
/// Returns a `(12, lat, lon)` array whose slice `m` is the mean of every
/// step of calendar month `m` whose decimal year lies inside `period`.
///
/// # Errors
///
/// Returns [`BlendError::EmptyReferencePeriod`] if some calendar month has
/// no step inside `period`, and [`BlendError::Grid`] if `data` does not
/// have `axis.len()` steps.
pub fn monthly_climatology(
    data: &Array3<f64>,
    axis: &TimeAxis,
    period: BaselinePeriod,
    mean: ClimatologyMean,
) -> Result<Array3<f64>, BlendError> {
    let (nt, ny, nx) = data.dim();
    if nt != axis.len() {
        return Err(GridError::TimeMismatch {
            field: "baseline input".to_string(),
            expected: axis.len(),
            got: nt,
        }
        .into());
    }

    let within = axis.indices_within(period);
    let mut climatology = Array3::from_elem((MONTHS_PER_YEAR, ny, nx), f64::NAN);
    for (phase, mut slot) in climatology.outer_iter_mut().enumerate() {
        let steps: Vec<usize> = axis
            .phase_indices(phase)
            .filter(|i| within.binary_search(i).is_ok())
            .collect();
        if steps.is_empty() {
            return Err(BlendError::EmptyReferencePeriod {
                phase,
                start: period.start(),
                end: period.end(),
            });
        }
        let selected = data.select(Axis(0), &steps);
        let norm: Array2<f64> =
            selected.map_axis(Axis(0), |lane| mean.reduce(lane.iter().copied()));
        slot.assign(&norm);
    }
    debug!(
        n_reference_steps = within.len(),
        ?mean,
        "monthly climatology computed"
    );
    Ok(climatology)
}

/// Subtract a `(12, lat, lon)` climatology from every occurrence of each
/// calendar month. The record is assumed to start in January.
pub fn subtract_climatology(data: &mut Array3<f64>, climatology: &Array3<f64>) {
    for (phase, norm) in climatology.outer_iter().enumerate() {
        let mut steps = data.slice_mut(s![phase..;MONTHS_PER_YEAR, .., ..]);
        steps -= &norm;
    }
}

/// Convert `data` to anomalies from its monthly climatology over `period`,
/// in place.
///
/// After this call, the mean of each calendar month over `period` is zero
/// wherever the climatology was finite.
///
/// # Errors
///
/// Same as [`monthly_climatology`].
pub fn to_anomalies(
    data: &mut Array3<f64>,
    axis: &TimeAxis,
    period: BaselinePeriod,
    mean: ClimatologyMean,
) -> Result<(), BlendError> {
    let climatology = monthly_climatology(data, axis, period, mean)?;
    subtract_climatology(data, &climatology);
    Ok(())
}
