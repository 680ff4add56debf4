//! Calendar-year windows and decimal-year periods.

use crate::error::CalendarError;

/// Inclusive range of calendar years, e.g. `1850..=1900`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    first: i32,
    last: i32,
}

impl YearWindow {
    /// Pre-industrial reference years used by the warming metrics.
    pub const PRE_INDUSTRIAL: Self = Self {
        first: 1850,
        last: 1900,
    };

    /// Most recent complete decade used by the decadal warming metric.
    pub const RECENT_DECADE: Self = Self {
        first: 2010,
        last: 2019,
    };

    /// Creates a window covering `first..=last`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearWindow`] if `first > last`.
    pub fn new(first: i32, last: i32) -> Result<Self, CalendarError> {
        if first > last {
            return Err(CalendarError::InvalidYearWindow { first, last });
        }
        Ok(Self { first, last })
    }

    /// First calendar year (inclusive).
    pub fn first(&self) -> i32 {
        self.first
    }

    /// Last calendar year (inclusive).
    pub fn last(&self) -> i32 {
        self.last
    }

    /// Number of calendar years in the window.
    pub fn n_years(&self) -> usize {
        (self.last - self.first + 1) as usize
    }
}

/// Open interval of decimal years `(start, end)`.
///
/// Used for the climatological reference period: a month belongs to the
/// period when its mid-month decimal year is strictly between the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselinePeriod {
    start: f64,
    end: f64,
}

impl BaselinePeriod {
    /// The 1961–1990 climatology, expressed as the open interval
    /// `(1961, 1991)`.
    pub const CLIMATOLOGY_1961_1990: Self = Self {
        start: 1961.0,
        end: 1991.0,
    };

    /// Creates a period covering decimal years strictly between `start` and
    /// `end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidBaselinePeriod`] if either bound is
    /// not finite or `start >= end`.
    pub fn new(start: f64, end: f64) -> Result<Self, CalendarError> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(CalendarError::InvalidBaselinePeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Exclusive lower bound.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `true` if `decimal_year` lies strictly inside the period.
    pub fn contains(&self, decimal_year: f64) -> bool {
        decimal_year > self.start && decimal_year < self.end
    }
}
