//! Integration tests: read model and reference fields from NetCDF fixtures.

use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use blendmask_grid::{FILL_VALUE, is_fill};
use blendmask_io::{IoError, ModelPaths, ReaderConfig, read_model_inputs, read_reference};
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Helper: programmatic NetCDF fixture builder
// ---------------------------------------------------------------------------

const N_LAT: usize = 2;
const N_LON: usize = 4;
const N_TIME: usize = 24;

/// One variable on a small `(time, lat, lon)` or `(lat, lon)` grid.
struct Fixture {
    var: String,
    lats: Vec<f64>,
    lons: Vec<f64>,
    /// Flat data in `[t, lat, lon]` order, or `[lat, lon]` for surface fields.
    values: Vec<f64>,
    with_time: bool,
    units: Option<String>,
    fill_value: Option<f64>,
    missing_value: Option<f64>,
    time_units: String,
    first_offset: f64,
    years: Option<Vec<f64>>,
}

impl Fixture {
    fn gridded(var: &str, value: f64) -> Self {
        Self {
            var: var.to_string(),
            lats: vec![-45.0, 45.0],
            lons: vec![0.0, 90.0, 180.0, 270.0],
            values: vec![value; N_TIME * N_LAT * N_LON],
            with_time: true,
            units: None,
            fill_value: None,
            missing_value: None,
            time_units: "days since 1850-01-01".to_string(),
            first_offset: 15.5,
            years: None,
        }
    }

    fn surface(var: &str, values: Vec<f64>) -> Self {
        assert_eq!(values.len(), N_LAT * N_LON);
        Self {
            values,
            with_time: false,
            ..Self::gridded(var, 0.0)
        }
    }

    fn with_units(mut self, units: &str) -> Self {
        self.units = Some(units.to_string());
        self
    }

    fn with_fill_value(mut self, fv: f64) -> Self {
        self.fill_value = Some(fv);
        self
    }

    fn with_missing_value(mut self, mv: f64) -> Self {
        self.missing_value = Some(mv);
        self
    }

    fn with_value_at(mut self, index: usize, value: f64) -> Self {
        self.values[index] = value;
        self
    }

    fn with_time_axis(mut self, units: &str, first_offset: f64) -> Self {
        self.time_units = units.to_string();
        self.first_offset = first_offset;
        self
    }

    fn with_years(mut self, first: i32) -> Self {
        self.years = Some((0..N_TIME).map(|t| f64::from(first) + (t / 12) as f64).collect());
        self
    }

    fn with_lons(mut self, lons: Vec<f64>) -> Self {
        assert_eq!(lons.len(), N_LON);
        self.lons = lons;
        self
    }

    /// Write the fixture to `dir/<file_name>` and return the path.
    fn write(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        let mut file = netcdf::create(&path).expect("create NetCDF file");

        if self.with_time {
            file.add_dimension("time", N_TIME).expect("add dim time");
        }
        file.add_dimension("lat", N_LAT).expect("add dim lat");
        file.add_dimension("lon", N_LON).expect("add dim lon");

        {
            let mut var = file.add_variable::<f64>("lat", &["lat"]).expect("add var lat");
            var.put_values(&self.lats, ..).expect("put lat values");
        }
        {
            let mut var = file.add_variable::<f64>("lon", &["lon"]).expect("add var lon");
            var.put_values(&self.lons, ..).expect("put lon values");
        }

        if self.with_time {
            let offsets: Vec<f64> = (0..N_TIME)
                .map(|t| self.first_offset + 30.0 * t as f64)
                .collect();
            let mut var = file.add_variable::<f64>("time", &["time"]).expect("add var time");
            var.put_values(&offsets, ..).expect("put time values");
            var.put_attribute("units", self.time_units.as_str())
                .expect("add time units");
            var.put_attribute("calendar", "noleap").expect("add calendar");

            if let Some(years) = &self.years {
                let mut var = file.add_variable::<f64>("year", &["time"]).expect("add var year");
                var.put_values(years, ..).expect("put year values");
            }
        }

        let dims: &[&str] = if self.with_time {
            &["time", "lat", "lon"]
        } else {
            &["lat", "lon"]
        };
        let mut var = file.add_variable::<f64>(&self.var, dims).expect("add data var");
        if let Some(fv) = self.fill_value {
            var.put_attribute("_FillValue", fv).expect("add _FillValue");
        }
        if let Some(mv) = self.missing_value {
            var.put_attribute("missing_value", mv).expect("add missing_value");
        }
        if let Some(units) = &self.units {
            var.put_attribute("units", units.as_str()).expect("add units");
        }
        var.put_values(&self.values, ..).expect("put data values");

        path
    }
}

/// Land fraction in percent: the northern row is land.
fn land_percent() -> Fixture {
    Fixture::surface("sftlf", vec![0.0, 0.0, 0.0, 0.0, 100.0, 100.0, 50.0, 100.0])
}

fn write_model(dir: &Path, tas: Fixture, sic: Fixture, land: Fixture) -> ModelPaths {
    ModelPaths {
        tas: tas.write(dir, "tas.nc"),
        tos: Fixture::gridded("tos", 288.0).write(dir, "tos.nc"),
        sic: sic.write(dir, "sic.nc"),
        sftlf: land.write(dir, "sftlf.nc"),
    }
}

// ---------------------------------------------------------------------------
// Model inputs
// ---------------------------------------------------------------------------

#[test]
fn reads_all_model_fields() {
    let dir = tempdir().unwrap();
    let paths = write_model(
        dir.path(),
        Fixture::gridded("tas", 287.0),
        Fixture::gridded("siconca", 30.0).with_units("%"),
        land_percent().with_units("%"),
    );

    let inputs = read_model_inputs(&paths, &ReaderConfig::default()).unwrap();

    assert_eq!(inputs.start_year, 1850);
    assert_eq!(inputs.tas.data().dim(), (N_TIME, N_LAT, N_LON));
    assert_eq!(inputs.tos.data().dim(), (N_TIME, N_LAT, N_LON));
    assert_eq!(inputs.sic.name(), "siconca");
    assert_relative_eq!(inputs.sic.data()[[3, 1, 2]], 30.0);
    assert_eq!(inputs.tas.grid().lats(), &[-45.0, 45.0]);
    assert_eq!(inputs.land.grid().n_lon(), N_LON);
}

#[test]
fn percent_land_fraction_becomes_fraction() {
    let dir = tempdir().unwrap();
    let paths = write_model(
        dir.path(),
        Fixture::gridded("tas", 287.0),
        Fixture::gridded("siconca", 0.0),
        land_percent().with_units("%"),
    );

    let land = read_model_inputs(&paths, &ReaderConfig::default()).unwrap().land;
    assert_relative_eq!(land.data()[[0, 0]], 0.0);
    assert_relative_eq!(land.data()[[1, 0]], 1.0);
    assert_relative_eq!(land.data()[[1, 2]], 0.5);
}

#[test]
fn land_fraction_without_percent_units_is_unchanged() {
    let dir = tempdir().unwrap();
    let paths = write_model(
        dir.path(),
        Fixture::gridded("tas", 287.0),
        Fixture::gridded("siconca", 0.0),
        Fixture::surface("sftlf", vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.5, 1.0]).with_units("1"),
    );

    let land = read_model_inputs(&paths, &ReaderConfig::default()).unwrap().land;
    assert_relative_eq!(land.data()[[1, 2]], 0.5);
}

#[test]
fn fill_values_become_sentinel() {
    let dir = tempdir().unwrap();
    let sic = Fixture::gridded("siconca", 10.0)
        .with_fill_value(1.0e20)
        .with_value_at(5, 1.0e20);
    let paths = write_model(
        dir.path(),
        Fixture::gridded("tas", 287.0),
        sic,
        land_percent().with_units("%"),
    );

    let inputs = read_model_inputs(&paths, &ReaderConfig::default()).unwrap();
    let flat: Vec<f64> = inputs.sic.data().iter().copied().collect();
    assert_eq!(flat[5], FILL_VALUE);
    assert_eq!(flat.iter().filter(|v| is_fill(**v)).count(), 1);
}

#[test]
fn siconc_used_when_siconca_absent() {
    let dir = tempdir().unwrap();
    let paths = write_model(
        dir.path(),
        Fixture::gridded("tas", 287.0),
        Fixture::gridded("siconc", 5.0),
        land_percent(),
    );

    let inputs = read_model_inputs(&paths, &ReaderConfig::default()).unwrap();
    assert_eq!(inputs.sic.name(), "siconc");
}

#[test]
fn start_year_from_hours_since_reference() {
    let dir = tempdir().unwrap();
    // 1850-01-01 plus 365 days expressed in hours.
    let tas = Fixture::gridded("tas", 287.0).with_time_axis("hours since 1850-01-01", 365.0 * 24.0);
    let paths = write_model(dir.path(), tas, Fixture::gridded("siconca", 0.0), land_percent());

    let inputs = read_model_inputs(&paths, &ReaderConfig::default()).unwrap();
    assert_eq!(inputs.start_year, 1851);
}

#[test]
fn start_year_taken_from_first_step_not_base_date() {
    let dir = tempdir().unwrap();
    // Counted from 1849-12-01; the first step is mid-January 1850.
    let tas = Fixture::gridded("tas", 287.0).with_time_axis("days since 1849-12-01", 46.0);
    let paths = write_model(dir.path(), tas, Fixture::gridded("siconca", 0.0), land_percent());

    let inputs = read_model_inputs(&paths, &ReaderConfig::default()).unwrap();
    assert_eq!(inputs.start_year, 1850);
}

#[test]
fn start_year_prefers_year_variable() {
    let dir = tempdir().unwrap();
    let tas = Fixture::gridded("tas", 287.0).with_years(1861);
    let paths = write_model(dir.path(), tas, Fixture::gridded("siconca", 0.0), land_percent());

    let inputs = read_model_inputs(&paths, &ReaderConfig::default()).unwrap();
    assert_eq!(inputs.start_year, 1861);
}

#[test]
fn start_year_override_wins() {
    let dir = tempdir().unwrap();
    let tas = Fixture::gridded("tas", 287.0).with_years(1861);
    let paths = write_model(dir.path(), tas, Fixture::gridded("siconca", 0.0), land_percent());

    let config = ReaderConfig::default().with_start_year(Some(1900));
    let inputs = read_model_inputs(&paths, &config).unwrap();
    assert_eq!(inputs.start_year, 1900);
}

#[test]
fn unparseable_time_units_fail() {
    let dir = tempdir().unwrap();
    let tas = Fixture::gridded("tas", 287.0).with_time_axis("fortnights after the flood", 0.0);
    let paths = write_model(dir.path(), tas, Fixture::gridded("siconca", 0.0), land_percent());

    let err = read_model_inputs(&paths, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::InvalidTime { .. }), "got {err:?}");
}

#[test]
fn missing_sea_ice_variable_is_reported() {
    let dir = tempdir().unwrap();
    let paths = write_model(
        dir.path(),
        Fixture::gridded("tas", 287.0),
        Fixture::gridded("ice", 0.0),
        land_percent(),
    );

    let err = read_model_inputs(&paths, &ReaderConfig::default()).unwrap_err();
    match err {
        IoError::MissingVariable { name, .. } => assert_eq!(name, "siconca or siconc"),
        other => panic!("expected MissingVariable, got {other:?}"),
    }
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let mut paths = write_model(
        dir.path(),
        Fixture::gridded("tas", 287.0),
        Fixture::gridded("siconca", 0.0),
        land_percent(),
    );
    paths.tos = dir.path().join("absent.nc");

    let err = read_model_inputs(&paths, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }), "got {err:?}");
}

#[test]
fn invalid_config_rejected_before_reading() {
    let paths = ModelPaths {
        tas: PathBuf::from("/nonexistent/tas.nc"),
        tos: PathBuf::from("/nonexistent/tos.nc"),
        sic: PathBuf::from("/nonexistent/sic.nc"),
        sftlf: PathBuf::from("/nonexistent/sftlf.nc"),
    };
    let config = ReaderConfig::default().with_sic_vars(Vec::new());

    let err = read_model_inputs(&paths, &config).unwrap_err();
    assert!(matches!(err, IoError::InvalidConfig { .. }), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Reference dataset
// ---------------------------------------------------------------------------

#[test]
fn reference_keeps_stored_longitudes_and_masks_missing() {
    let dir = tempdir().unwrap();
    let path = Fixture::gridded("temperature_anomaly", 0.25)
        .with_lons(vec![-135.0, -45.0, 45.0, 135.0])
        .with_missing_value(-99.99)
        .with_value_at(0, -99.99)
        .write(dir.path(), "reference.nc");

    let reference = read_reference(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(reference.grid().lons(), &[-135.0, -45.0, 45.0, 135.0]);
    assert_eq!(reference.data()[[0, 0, 0]], FILL_VALUE);
    assert_relative_eq!(reference.data()[[0, 0, 1]], 0.25);
}

#[test]
fn reference_variable_name_is_configurable() {
    let dir = tempdir().unwrap();
    let path = Fixture::gridded("tas_anom", 0.5).write(dir.path(), "reference.nc");

    let config = ReaderConfig::default().with_reference_var("tas_anom");
    let reference = read_reference(&path, &config).unwrap();
    assert_eq!(reference.name(), "tas_anom");
    assert_eq!(reference.n_time(), N_TIME);
}
