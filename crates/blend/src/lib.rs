//! # blendmask-blend
//!
//! Combines air temperature over land and ice with sea-surface temperature
//! over open water into one blended field, and converts both the blended
//! and the air-temperature fields into anomalies from a monthly
//! climatology.
//!
//! # Pipeline Order
//!
//! With [`BlendOrder::AnomaliesFirst`]:
//!
//! 1. **Invalidate** — missing sea-surface temperatures become NaN
//! 2. **Baseline** — `tas` (plain mean) and `tos` (NaN-aware mean)
//! 3. **Blend** — `tas × (1 − mask) + tos × mask`
//! 4. **Repair** — NaN in the blend takes the `tas` anomaly
//!
//! With [`BlendOrder::BlendFirst`]:
//!
//! 1. **Blend** — on absolute temperatures
//! 2. **Baseline** — `tas` and the blend, both with a plain mean
//! 3. **Repair**
//!
//! The two orders give different results because the climatologies are
//! taken over different populations.

mod baseline;
mod blend;
mod error;
mod order;
mod repair;

pub use baseline::{ClimatologyMean, monthly_climatology, subtract_climatology, to_anomalies};
pub use blend::{blend_convex, invalidate_sst};
pub use error::BlendError;
pub use order::{BlendOrder, BlendedFields, blend_fields};
pub use repair::fill_missing_from;
