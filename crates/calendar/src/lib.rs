//! # blendmask-calendar
//!
//! Monthly time bookkeeping for gridded model records.
//!
//! Model output arrives as a dense `(time, lat, lon)` array with one entry
//! per month. There is no stored time coordinate: the axis is derived from
//! the start year and a fixed 1/12-year step, with each month represented by
//! its mid-point as a decimal year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["start year + n_months"] -->|"TimeAxis::new()"| B["TimeAxis"]
//!     B -->|".decimal_year(i)"| C["mid-month decimal year"]
//!     B -->|".phase(i)"| D["calendar month phase 0..12"]
//!     B -->|".indices_within(BaselinePeriod)"| E["reference-period indices"]
//!     B -->|".year_range(YearWindow)"| F["clipped index range"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use blendmask_calendar::{BaselinePeriod, TimeAxis, YearWindow};
//!
//! let axis = TimeAxis::new(1850, 170 * 12);
//! assert_eq!(axis.phase(13), 1);
//! assert_eq!(axis.year_of(13), 1851);
//!
//! let base = axis.indices_within(BaselinePeriod::CLIMATOLOGY_1961_1990);
//! assert_eq!(base.len(), 30 * 12);
//!
//! let recent = axis.year_range(YearWindow::RECENT_DECADE);
//! assert_eq!(recent, (2010 - 1850) * 12..(2020 - 1850) * 12);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `axis` | Decimal-year monthly time axis |
//! | `window` | Inclusive calendar-year windows and open decimal-year periods |
//! | `error` | Error types |

mod axis;
mod error;
mod window;

pub use axis::{MONTHS_PER_YEAR, TimeAxis};
pub use error::CalendarError;
pub use window::{BaselinePeriod, YearWindow};
