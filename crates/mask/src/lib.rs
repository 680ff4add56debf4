//! # blendmask-mask
//!
//! Builds the per-timestep open-water fraction used to weight the ocean
//! contribution of a blended temperature field.
//!
//! # Pipeline Order
//!
//! 1. **Normalize** — clamp sea-ice and ocean fractions to `[0, 100]`,
//!    rescale percentages to fractions
//! 2. **Fixed ice** (optional) — mark every cell that carried more than 1 %
//!    ice in a calendar month after 1961 as fully ice-covered in that month
//!    for the whole record
//! 3. **Combine** — `mask = (1 − sea_ice) × ocean_fraction`
//! 4. **Invalid ocean** — `mask = 0` wherever the sea-surface temperature is
//!    missing, so those cells fall back to air temperature
//!
//! Observational coverage never alters the mask; it only zeroes aggregation
//! weights (see [`coverage_weights`]).

mod builder;
mod combine;
mod config;
mod coverage;
mod error;
mod fixed_ice;
mod normalize;
mod render;

pub use builder::{OpenWaterMask, build_open_water_mask, ocean_fraction_from_land};
pub use combine::{SST_VALID_LIMIT, is_invalid_sst, open_water_fraction, zero_invalid_ocean};
pub use config::MaskConfig;
pub use coverage::{NO_COVERAGE_THRESHOLD, coverage_weights, is_uncovered};
pub use error::MaskError;
pub use fixed_ice::{FIXED_ICE_REFERENCE_YEAR, ICE_PRESENCE_THRESHOLD, fix_ice};
pub use normalize::{FractionUnits, PERCENT_DETECTION_THRESHOLD, normalize_fraction};
pub use render::{render_mask_ascii, render_presence_ascii};
