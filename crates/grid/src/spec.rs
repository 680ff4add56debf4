//! Latitude/longitude grid descriptor.

use tracing::warn;

use crate::error::GridError;

/// Tolerance in degrees when comparing coordinate values.
const COORD_TOLERANCE: f64 = 1.0e-3;

/// One spatial grid: the latitude and longitude axes shared by a set of
/// fields.
///
/// Every input field carries its own `GridSpec`; the pipeline compares them
/// with [`GridSpec::check_compatible`] before masking or blending instead of
/// assuming the coordinate arrays agree.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl GridSpec {
    /// Creates a grid from latitude and longitude axis values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyAxis`] if either axis is empty.
    pub fn new(lats: Vec<f64>, lons: Vec<f64>) -> Result<Self, GridError> {
        if lats.is_empty() {
            return Err(GridError::EmptyAxis {
                axis: "latitude".into(),
            });
        }
        if lons.is_empty() {
            return Err(GridError::EmptyAxis {
                axis: "longitude".into(),
            });
        }
        Ok(Self { lats, lons })
    }

    /// Regular grid of `n_lat` x `n_lon` cell centres spanning the globe,
    /// latitudes south to north and longitudes from 0°.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyAxis`] if either count is zero.
    pub fn regular(n_lat: usize, n_lon: usize) -> Result<Self, GridError> {
        let dlat = 180.0 / n_lat as f64;
        let dlon = 360.0 / n_lon as f64;
        let lats = (0..n_lat).map(|i| -90.0 + (i as f64 + 0.5) * dlat).collect();
        let lons = (0..n_lon).map(|j| (j as f64 + 0.5) * dlon).collect();
        Self::new(lats, lons)
    }

    /// Latitude axis values.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Longitude axis values.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Number of latitude bands.
    pub fn n_lat(&self) -> usize {
        self.lats.len()
    }

    /// Number of longitudes.
    pub fn n_lon(&self) -> usize {
        self.lons.len()
    }

    /// Verify that a field named `field` on grid `other` can be combined
    /// cell-by-cell with fields on this grid.
    ///
    /// Axis lengths must match. Differing latitude values only produce a
    /// warning, since equivalent grids are sometimes written with slightly
    /// different coordinate conventions. Longitudes are compared modulo 360.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GridMismatch`] if the axis lengths differ.
    pub fn check_compatible(&self, other: &GridSpec, field: &str) -> Result<(), GridError> {
        if self.n_lat() != other.n_lat() || self.n_lon() != other.n_lon() {
            return Err(GridError::GridMismatch {
                field: field.to_string(),
                expected_lat: self.n_lat(),
                expected_lon: self.n_lon(),
                got_lat: other.n_lat(),
                got_lon: other.n_lon(),
            });
        }

        let lat_off = self
            .lats
            .iter()
            .zip(&other.lats)
            .any(|(a, b)| (a - b).abs() > COORD_TOLERANCE);
        let lon_off = self
            .lons
            .iter()
            .zip(&other.lons)
            .any(|(a, b)| {
                let d = (a - b).rem_euclid(360.0);
                d > COORD_TOLERANCE && d < 360.0 - COORD_TOLERANCE
            });
        if lat_off || lon_off {
            warn!(
                field,
                lat_off, lon_off, "coordinate values differ from the model grid"
            );
        }
        Ok(())
    }

    /// Grid with the longitude axis rotated left by `shift` positions.
    pub fn rotated(&self, shift: usize) -> Self {
        let mut lons = self.lons.clone();
        lons.rotate_left(shift % self.n_lon());
        Self {
            lats: self.lats.clone(),
            lons,
        }
    }
}
