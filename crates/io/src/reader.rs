//! High-level NetCDF reader configuration and orchestration.

use std::path::{Path, PathBuf};

use blendmask_grid::{GridSpec, GriddedField, SurfaceField, is_fill};
use chrono::Datelike;
use ndarray::Array2;
use tracing::{debug, info, warn};

use crate::error::IoError;
use crate::netcdf_read::{self, MaskedVariable};

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading model and reference fields from NetCDF.
///
/// The [`Default`] implementation supplies CMIP variable names and
/// CF-convention coordinate aliases.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Near-surface air temperature variable.
    tas_var: String,
    /// Sea-surface temperature variable.
    tos_var: String,
    /// Sea-ice concentration variables, in order of preference.
    sic_vars: Vec<String>,
    /// Land-area fraction variable.
    land_var: String,
    /// Temperature-anomaly variable of the reference dataset.
    reference_var: String,
    /// Aliases to try when looking up longitude coordinates.
    lon_aliases: Vec<String>,
    /// Aliases to try when looking up latitude coordinates.
    lat_aliases: Vec<String>,
    /// Variable holding the calendar year of each step, if present.
    year_var: String,
    /// NetCDF variable name for the time axis.
    time_var: String,
    /// Overrides the start year found in the files.
    start_year: Option<i32>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            tas_var: "tas".into(),
            tos_var: "tos".into(),
            sic_vars: vec!["siconca".into(), "siconc".into()],
            land_var: "sftlf".into(),
            reference_var: "temperature_anomaly".into(),
            lon_aliases: vec!["lon".into(), "longitude".into()],
            lat_aliases: vec!["lat".into(), "latitude".into()],
            year_var: "year".into(),
            time_var: "time".into(),
            start_year: None,
        }
    }
}

impl ReaderConfig {
    /// Set the start year instead of reading it from the `tas` file.
    pub fn with_start_year(mut self, year: Option<i32>) -> Self {
        self.start_year = year;
        self
    }

    /// Set the sea-ice variable names, most preferred first.
    pub fn with_sic_vars(mut self, names: Vec<String>) -> Self {
        self.sic_vars = names;
        self
    }

    /// Set the reference temperature-anomaly variable name.
    pub fn with_reference_var(mut self, name: impl Into<String>) -> Self {
        self.reference_var = name.into();
        self
    }

    /// Returns the start-year override.
    pub fn start_year(&self) -> Option<i32> {
        self.start_year
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidConfig`] if an alias list is empty.
    pub fn validate(&self) -> Result<(), IoError> {
        for (what, list) in [
            ("sea-ice variable", &self.sic_vars),
            ("latitude alias", &self.lat_aliases),
            ("longitude alias", &self.lon_aliases),
        ] {
            if list.is_empty() {
                return Err(IoError::InvalidConfig {
                    reason: format!("at least one {what} is required"),
                });
            }
        }
        Ok(())
    }
}

fn as_strs(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Paths of the four model files.
#[derive(Debug, Clone)]
pub struct ModelPaths {
    /// Near-surface air temperature.
    pub tas: PathBuf,
    /// Sea-surface temperature.
    pub tos: PathBuf,
    /// Sea-ice concentration.
    pub sic: PathBuf,
    /// Land-area fraction.
    pub sftlf: PathBuf,
}

/// Model fields as read from disk.
#[derive(Debug, Clone)]
pub struct ModelInputs {
    /// Near-surface air temperature `(time, lat, lon)`.
    pub tas: GriddedField,
    /// Sea-surface temperature `(time, lat, lon)`.
    pub tos: GriddedField,
    /// Sea-ice concentration `(time, lat, lon)`, percent or fraction.
    pub sic: GriddedField,
    /// Land-area fraction `(lat, lon)`, as a fraction when the file's
    /// units say percent, otherwise as stored.
    pub land: SurfaceField,
    /// Calendar year of the first step.
    pub start_year: i32,
}

// ---------------------------------------------------------------------------
// read_model_inputs / read_reference
// ---------------------------------------------------------------------------

/// Read `tas`, `tos`, sea ice and land fraction.
///
/// Each file carries its own `lat`/`lon` coordinates. The start year is
/// taken from the configuration override, else from the first value of the
/// `year` variable in the `tas` file, else from its CF time axis.
///
/// # Errors
///
/// Returns [`IoError`] on missing files or variables, malformed time
/// metadata, or coordinate lengths that disagree with the data.
pub fn read_model_inputs(
    paths: &ModelPaths,
    config: &ReaderConfig,
) -> Result<ModelInputs, IoError> {
    config.validate()?;

    let file = netcdf_read::open_file(&paths.tas)?;
    let tas = read_gridded(&file, &[&config.tas_var], &paths.tas, config)?;
    let start_year = match config.start_year {
        Some(year) => year,
        None => read_start_year(&file, &paths.tas, config)?,
    };

    let file = netcdf_read::open_file(&paths.tos)?;
    let tos = read_gridded(&file, &[&config.tos_var], &paths.tos, config)?;

    let file = netcdf_read::open_file(&paths.sic)?;
    let sic = read_gridded(&file, &as_strs(&config.sic_vars), &paths.sic, config)?;

    let file = netcdf_read::open_file(&paths.sftlf)?;
    let land = read_surface(&file, &config.land_var, &paths.sftlf, config)?;

    info!(
        start_year,
        n_months = tas.n_time(),
        n_lat = tas.grid().n_lat(),
        n_lon = tas.grid().n_lon(),
        sic = sic.name(),
        "model inputs read"
    );
    Ok(ModelInputs {
        tas,
        tos,
        sic,
        land,
        start_year,
    })
}

/// Read the reference temperature-anomaly dataset.
///
/// Longitudes are returned as stored; rotation onto the model grid happens
/// in the pipeline.
///
/// # Errors
///
/// Returns [`IoError`] on a missing file or variable or inconsistent
/// coordinates.
pub fn read_reference(path: &Path, config: &ReaderConfig) -> Result<GriddedField, IoError> {
    config.validate()?;
    let file = netcdf_read::open_file(path)?;
    let reference = read_gridded(&file, &[&config.reference_var], path, config)?;
    info!(
        n_months = reference.n_time(),
        first_lon = reference.grid().lons()[0],
        "reference dataset read"
    );
    Ok(reference)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_grid(
    file: &netcdf::File,
    path: &Path,
    config: &ReaderConfig,
    n_lat: usize,
    n_lon: usize,
) -> Result<GridSpec, IoError> {
    let lats = netcdf_read::read_1d_f64(file, &as_strs(&config.lat_aliases), path)?;
    let lons = netcdf_read::read_1d_f64(file, &as_strs(&config.lon_aliases), path)?;
    for (name, expected, got) in [("lat", n_lat, lats.len()), ("lon", n_lon, lons.len())] {
        if expected != got {
            return Err(IoError::DimensionMismatch {
                name: name.to_string(),
                expected,
                got,
            });
        }
    }
    Ok(GridSpec::new(lats, lons)?)
}

fn read_gridded(
    file: &netcdf::File,
    aliases: &[&str],
    path: &Path,
    config: &ReaderConfig,
) -> Result<GriddedField, IoError> {
    let MaskedVariable {
        name,
        values,
        shape,
        ..
    } = netcdf_read::read_masked(file, aliases, 3, path)?;
    let grid = read_grid(file, path, config, shape[1], shape[2])?;
    Ok(GriddedField::from_flat(name, values, shape[0], grid)?)
}

fn read_surface(
    file: &netcdf::File,
    var_name: &str,
    path: &Path,
    config: &ReaderConfig,
) -> Result<SurfaceField, IoError> {
    let MaskedVariable {
        name,
        mut values,
        shape,
        units,
    } = netcdf_read::read_masked(file, &[var_name], 2, path)?;
    if units.as_deref().map(str::trim) == Some("%") {
        debug!(variable = %name, "converting percent to fraction");
        for v in values.iter_mut().filter(|v| !is_fill(**v)) {
            *v *= 0.01;
        }
    }
    let grid = read_grid(file, path, config, shape[0], shape[1])?;
    let n_values = values.len();
    let data = Array2::from_shape_vec((shape[0], shape[1]), values).map_err(|_| {
        IoError::DimensionMismatch {
            name: format!("{name} values"),
            expected: shape[0] * shape[1],
            got: n_values,
        }
    })?;
    Ok(SurfaceField::new(name, data, grid)?)
}

/// Start year from the `year` variable, falling back to the time axis.
fn read_start_year(
    file: &netcdf::File,
    path: &Path,
    config: &ReaderConfig,
) -> Result<i32, IoError> {
    if let Ok(years) = netcdf_read::read_1d_f64(file, &[&config.year_var], path)
        && let Some(&first) = years.first()
    {
        debug!(first, "start year from year variable");
        return Ok(first.floor() as i32);
    }

    let offsets = netcdf_read::read_1d_f64(file, &[&config.time_var], path)?;
    let first = offsets.first().copied().ok_or_else(|| IoError::InvalidTime {
        reason: format!("time variable '{}' is empty", config.time_var),
    })?;
    let (unit, base_date) = netcdf_read::read_time_units(file, &config.time_var, path)?;
    let first_date = netcdf_read::date_of_offset(&unit, base_date, first)?;
    if first_date.month() != 1 {
        warn!(
            %first_date,
            "record does not start in January, calendar months will be misassigned"
        );
    }
    debug!(%unit, %base_date, first, %first_date, "start year from time axis");
    Ok(first_date.year())
}
