//! # blendmask-io
//!
//! Read CMIP-style model output and an observational reference dataset from
//! NetCDF into [`GriddedField`](blendmask_grid::GriddedField)s, and write
//! run results as JSON.
//!
//! Fill values (`_FillValue`, `missing_value`) and NaN are mapped to the
//! [`FILL_VALUE`](blendmask_grid::FILL_VALUE) sentinel on read.

mod error;
mod netcdf_read;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{ModelInputs, ModelPaths, ReaderConfig, read_model_inputs, read_reference};
pub use writer::write_json;
