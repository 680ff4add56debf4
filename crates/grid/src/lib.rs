//! # blendmask-grid
//!
//! Spatial bookkeeping shared by every pipeline stage.
//!
//! A [`GriddedField`] is a dense `(time, lat, lon)` array paired with the
//! [`GridSpec`] it lives on. A [`SurfaceField`] is the time-invariant
//! `(lat, lon)` counterpart used for the land–sea fraction. Missing values
//! use the [`FILL_VALUE`] sentinel; [`is_fill`] recognises it (and NaN).
//!
//! Area weights depend only on the number of latitude bands, see
//! [`band_weights`] and [`area_weights`].

mod area;
mod error;
mod field;
mod sentinel;
mod spec;

pub use area::{area_weights, band_weights};
pub use error::GridError;
pub use field::{GriddedField, SurfaceField};
pub use sentinel::{FILL_VALUE, fill_to_nan, is_fill};
pub use spec::GridSpec;
