//! Gridded model and observation fields.

use ndarray::{Array2, Array3, s};

use crate::error::GridError;
use crate::sentinel::FILL_VALUE;
use crate::spec::GridSpec;

/// A `(time, lat, lon)` array of monthly values on a known grid.
///
/// Missing cells hold [`FILL_VALUE`] (or NaN once a stage has converted
/// them). Construction checks that the spatial dimensions agree with the
/// grid descriptor.
#[derive(Debug, Clone)]
pub struct GriddedField {
    name: String,
    data: Array3<f64>,
    grid: GridSpec,
}

impl GriddedField {
    /// Wraps `data` as the field `name` on `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if the lat/lon dimensions of
    /// `data` differ from the grid axes.
    pub fn new(
        name: impl Into<String>,
        data: Array3<f64>,
        grid: GridSpec,
    ) -> Result<Self, GridError> {
        let name = name.into();
        let (nt, ny, nx) = data.dim();
        if ny != grid.n_lat() || nx != grid.n_lon() {
            return Err(GridError::ShapeMismatch {
                field: name,
                expected: vec![nt, grid.n_lat(), grid.n_lon()],
                got: vec![nt, ny, nx],
            });
        }
        Ok(Self { name, data, grid })
    }

    /// Builds a field from row-major `(time, lat, lon)` values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `values.len()` is not
    /// `n_time * n_lat * n_lon`.
    pub fn from_flat(
        name: impl Into<String>,
        values: Vec<f64>,
        n_time: usize,
        grid: GridSpec,
    ) -> Result<Self, GridError> {
        let name = name.into();
        let shape = (n_time, grid.n_lat(), grid.n_lon());
        let got = values.len();
        let data = Array3::from_shape_vec(shape, values).map_err(|_| GridError::ShapeMismatch {
            field: name.clone(),
            expected: vec![shape.0, shape.1, shape.2],
            got: vec![got],
        })?;
        Ok(Self { name, data, grid })
    }

    /// Variable name, used in logs and error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Number of monthly time steps.
    pub fn n_time(&self) -> usize {
        self.data.dim().0
    }

    /// Borrow the underlying array.
    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }

    /// Consumes the field and returns the owned array.
    pub fn into_data(self) -> Array3<f64> {
        self.data
    }

    /// Checks that `other` shares this field's spatial grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GridMismatch`] if the axis lengths differ.
    pub fn check_same_grid(&self, other: &GriddedField) -> Result<(), GridError> {
        self.grid.check_compatible(&other.grid, &other.name)
    }

    /// Keep only the first `n_time` steps.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TimeMismatch`] if the record is shorter than
    /// `n_time`.
    pub fn truncated(mut self, n_time: usize) -> Result<Self, GridError> {
        if self.n_time() < n_time {
            return Err(GridError::TimeMismatch {
                field: self.name,
                expected: n_time,
                got: self.data.dim().0,
            });
        }
        self.data.slice_collapse(s![..n_time, .., ..]);
        Ok(self)
    }

    /// Truncate or pad the record to exactly `n_time` steps. Padding uses
    /// [`FILL_VALUE`], so padded months count as missing everywhere.
    pub fn with_time_len(mut self, n_time: usize) -> Self {
        let (nt, ny, nx) = self.data.dim();
        if nt >= n_time {
            self.data.slice_collapse(s![..n_time, .., ..]);
            return self;
        }
        let mut padded = Array3::from_elem((n_time, ny, nx), FILL_VALUE);
        padded.slice_mut(s![..nt, .., ..]).assign(&self.data);
        self.data = padded;
        self
    }

    /// Rotate the longitude axis left by `shift` positions, moving both the
    /// data and the grid's longitude values.
    pub fn rotate_longitudes(self, shift: usize) -> Self {
        let (_, _, nx) = self.data.dim();
        let shift = shift % nx;
        if shift == 0 {
            return self;
        }
        let mut out = Array3::zeros(self.data.raw_dim());
        out.slice_mut(s![.., .., ..nx - shift])
            .assign(&self.data.slice(s![.., .., shift..]));
        out.slice_mut(s![.., .., nx - shift..])
            .assign(&self.data.slice(s![.., .., ..shift]));
        Self {
            name: self.name,
            grid: self.grid.rotated(shift),
            data: out,
        }
    }
}

/// A time-invariant `(lat, lon)` field such as the land–sea fraction.
#[derive(Debug, Clone)]
pub struct SurfaceField {
    name: String,
    data: Array2<f64>,
    grid: GridSpec,
}

impl SurfaceField {
    /// Wraps `data` as the surface field `name` on `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if the dimensions of `data`
    /// differ from the grid axes.
    pub fn new(
        name: impl Into<String>,
        data: Array2<f64>,
        grid: GridSpec,
    ) -> Result<Self, GridError> {
        let name = name.into();
        let (ny, nx) = data.dim();
        if ny != grid.n_lat() || nx != grid.n_lon() {
            return Err(GridError::ShapeMismatch {
                field: name,
                expected: vec![grid.n_lat(), grid.n_lon()],
                got: vec![ny, nx],
            });
        }
        Ok(Self { name, data, grid })
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Borrow the underlying array.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Applies `f` to every cell, keeping name and grid.
    pub fn mapv(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            name: self.name.clone(),
            data: self.data.mapv(f),
            grid: self.grid.clone(),
        }
    }
}
