//! Stage 2 entry point: sea-ice and land-sea fractions to an open-water mask.

use blendmask_calendar::TimeAxis;
use blendmask_grid::{GridError, GriddedField, SurfaceField};
use ndarray::{Array3, ArrayView2, Axis};
use tracing::{debug, info, trace};

use crate::combine::{is_invalid_sst, open_water_fraction, zero_invalid_ocean};
use crate::config::MaskConfig;
use crate::error::MaskError;
use crate::fixed_ice::fix_ice;
use crate::normalize::{PERCENT_DETECTION_THRESHOLD, normalize_fraction};
use crate::render::{render_mask_ascii, render_presence_ascii};

/// Per-timestep open-water fraction in `[0, 1]`.
///
/// A value of 1 weights a cell entirely by its sea-surface temperature, 0
/// entirely by its air temperature.
#[derive(Debug, Clone)]
pub struct OpenWaterMask {
    fraction: Array3<f64>,
    n_fixed_ice: usize,
    n_invalid_ocean: usize,
}

impl OpenWaterMask {
    /// The `(time, lat, lon)` open-water fraction.
    pub fn fraction(&self) -> &Array3<f64> {
        &self.fraction
    }

    /// Number of `(month, cell)` pairs forced to full ice cover.
    pub fn n_fixed_ice(&self) -> usize {
        self.n_fixed_ice
    }

    /// Number of `(time, cell)` entries zeroed because the SST was missing.
    pub fn n_invalid_ocean(&self) -> usize {
        self.n_invalid_ocean
    }

    /// The mask at one timestep, e.g. for [`render_mask_ascii`].
    pub fn step(&self, t: usize) -> ArrayView2<'_, f64> {
        self.fraction.index_axis(Axis(0), t)
    }
}

/// Convert a land-fraction field into an ocean-fraction field, `1 − land`.
///
/// A land field in percent (largest value above
/// [`PERCENT_DETECTION_THRESHOLD`]) is divided by 100 before the
/// subtraction, so a coastal cell that is 30 % land becomes 0.7 ocean.
/// Subtracting raw percentages would leave every cell with any land share
/// above 1 % negative, which normalization zeroes: the ocean fraction would
/// degenerate to a binary all-sea / not-all-sea mask.
///
/// The result is not clamped; [`build_open_water_mask`] normalizes it.
pub fn ocean_fraction_from_land(land: &SurfaceField) -> SurfaceField {
    let max = land
        .data()
        .iter()
        .copied()
        .filter(|v| (0.0..=100.0).contains(v))
        .fold(f64::NEG_INFINITY, f64::max);
    let scale = if max > PERCENT_DETECTION_THRESHOLD {
        debug!(variable = land.name(), "land fraction in percent");
        0.01
    } else {
        1.0
    };
    land.mapv(|v| 1.0 - scale * v)
}

/// Build the open-water mask from sea-ice concentration, ocean fraction and
/// sea-surface temperature.
///
/// `sic` is consumed and rewritten in place. All three fields must share one
/// grid; `sic` must cover at least `axis.len()` steps (extra steps are
/// dropped) and `tos` exactly `axis.len()`.
///
/// # Errors
///
/// Returns [`MaskError::Grid`] on grid or record-length mismatch and
/// [`MaskError::ReferenceYearNotCovered`] if fixed-ice mode cannot find its
/// reference step.
#[tracing::instrument(skip_all, fields(fixed_ice = config.fixed_ice()))]
pub fn build_open_water_mask(
    sic: GriddedField,
    ocean: &SurfaceField,
    tos: &GriddedField,
    axis: &TimeAxis,
    config: &MaskConfig,
) -> Result<OpenWaterMask, MaskError> {
    config.validate()?;
    tos.check_same_grid(&sic)?;
    tos.grid().check_compatible(ocean.grid(), ocean.name())?;
    if tos.n_time() != axis.len() {
        return Err(GridError::TimeMismatch {
            field: tos.name().to_string(),
            expected: axis.len(),
            got: tos.n_time(),
        }
        .into());
    }

    let mut sea_ice = sic.truncated(axis.len())?.into_data();
    let mut ocean = ocean.data().clone();

    let sic_units = normalize_fraction(&mut sea_ice);
    let ocean_units = normalize_fraction(&mut ocean);
    debug!(?sic_units, ?ocean_units, "normalized fractions");
    if let Some((lo, hi, mean)) = sea_ice.as_slice().and_then(blendmask_stats::finite_summary) {
        debug!(lo, hi, mean, "sic summary");
    }
    if let Some((lo, hi, mean)) = ocean.as_slice().and_then(blendmask_stats::finite_summary) {
        debug!(lo, hi, mean, "ocean fraction summary");
    }

    let n_fixed_ice = if config.fixed_ice() {
        fix_ice(&mut sea_ice, axis, config.reference_year())?
    } else {
        0
    };

    let mut fraction = open_water_fraction(&sea_ice, &ocean);
    let n_invalid_ocean = zero_invalid_ocean(&mut fraction, tos.data());
    info!(n_fixed_ice, n_invalid_ocean, "open-water mask built");

    let mask = OpenWaterMask {
        fraction,
        n_fixed_ice,
        n_invalid_ocean,
    };
    if let Some(last) = axis.len().checked_sub(1) {
        let tos_last = tos.data().index_axis(Axis(0), last);
        trace!("valid tos:\n{}", render_presence_ascii(tos_last, is_invalid_sst));
        trace!("final open-water mask:\n{}", render_mask_ascii(mask.step(last)));
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blendmask_grid::GridSpec;
    use ndarray::Array2;

    fn grid() -> GridSpec {
        GridSpec::regular(2, 2).unwrap()
    }

    #[test]
    fn ocean_from_land() {
        let land = SurfaceField::new("sftlf", Array2::from_elem((2, 2), 0.25), grid()).unwrap();
        let ocean = ocean_fraction_from_land(&land);
        assert!(ocean.data().iter().all(|&v| v == 0.75));
    }

    #[test]
    fn coastal_cells_keep_fractional_ocean() {
        let land = Array2::from_shape_vec((2, 2), vec![0.0, 0.3, 1.0, 0.995]).unwrap();
        let land = SurfaceField::new("sftlf", land, grid()).unwrap();
        let axis = TimeAxis::new(2000, 12);
        let sic = GriddedField::new("sic", Array3::zeros((12, 2, 2)), grid()).unwrap();
        let tos = GriddedField::new("tos", Array3::from_elem((12, 2, 2), 290.0), grid()).unwrap();

        let ocean = ocean_fraction_from_land(&land);
        let mask = build_open_water_mask(sic, &ocean, &tos, &axis, &MaskConfig::new()).unwrap();
        let step = mask.step(6);
        assert!((step[[0, 0]] - 1.0).abs() < 1e-12);
        assert!((step[[0, 1]] - 0.7).abs() < 1e-12);
        assert_eq!(step[[1, 0]], 0.0);
        assert!((step[[1, 1]] - 0.005).abs() < 1e-12);
    }

    #[test]
    fn percent_land_converted_before_subtraction() {
        let land = Array2::from_shape_vec((2, 2), vec![0.0, 30.0, 100.0, 99.5]).unwrap();
        let land = SurfaceField::new("sftlf", land, grid()).unwrap();
        let ocean = ocean_fraction_from_land(&land);
        let expected = [1.0, 0.7, 0.0, 0.005];
        for (&got, want) in ocean.data().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
    }

    #[test]
    fn tos_length_must_match_axis() {
        let axis = TimeAxis::new(2000, 12);
        let sic = GriddedField::new("sic", Array3::zeros((12, 2, 2)), grid()).unwrap();
        let tos = GriddedField::new("tos", Array3::zeros((6, 2, 2)), grid()).unwrap();
        let ocean = SurfaceField::new("sftof", Array2::ones((2, 2)), grid()).unwrap();
        let err = build_open_water_mask(sic, &ocean, &tos, &axis, &MaskConfig::new()).unwrap_err();
        assert!(matches!(err, MaskError::Grid(GridError::TimeMismatch { .. })));
    }

    #[test]
    fn mismatched_sic_grid_rejected() {
        let axis = TimeAxis::new(2000, 12);
        let sic = GriddedField::new(
            "sic",
            Array3::zeros((12, 2, 3)),
            GridSpec::regular(2, 3).unwrap(),
        )
        .unwrap();
        let tos = GriddedField::new("tos", Array3::zeros((12, 2, 2)), grid()).unwrap();
        let ocean = SurfaceField::new("sftof", Array2::ones((2, 2)), grid()).unwrap();
        let err = build_open_water_mask(sic, &ocean, &tos, &axis, &MaskConfig::new()).unwrap_err();
        assert!(matches!(err, MaskError::Grid(GridError::GridMismatch { .. })));
    }

    #[test]
    fn longer_sic_truncated() {
        let axis = TimeAxis::new(2000, 12);
        let sic = GriddedField::new("sic", Array3::zeros((24, 2, 2)), grid()).unwrap();
        let tos = GriddedField::new("tos", Array3::zeros((12, 2, 2)), grid()).unwrap();
        let ocean = SurfaceField::new("sftof", Array2::ones((2, 2)), grid()).unwrap();
        let mask = build_open_water_mask(sic, &ocean, &tos, &axis, &MaskConfig::new()).unwrap();
        assert_eq!(mask.fraction().dim(), (12, 2, 2));
        assert!(mask.fraction().iter().all(|&v| v == 1.0));
    }
}
