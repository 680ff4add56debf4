//! Decimal-year monthly time axis.

use std::iter::StepBy;
use std::ops::Range;

use crate::window::{BaselinePeriod, YearWindow};

/// Number of monthly steps in one calendar year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Monthly time axis starting in January of `start_year`.
///
/// The axis is never stored as coordinates. Index `i` maps to the decimal
/// year `start_year + (i + 0.5) / 12`, i.e. the middle of the month, so the
/// axis is strictly increasing with a constant 1/12-year step. Calendar
/// month phases are `i mod 12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    start_year: i32,
    n_months: usize,
}

impl TimeAxis {
    /// Creates an axis of `n_months` monthly steps starting in January of
    /// `start_year`.
    pub fn new(start_year: i32, n_months: usize) -> Self {
        Self {
            start_year,
            n_months,
        }
    }

    /// Returns the first calendar year of the record.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the number of monthly steps.
    pub fn len(&self) -> usize {
        self.n_months
    }

    /// Returns `true` if the axis has no steps.
    pub fn is_empty(&self) -> bool {
        self.n_months == 0
    }

    /// Number of calendar years touched by the record, counting a partial
    /// final year as a whole one.
    pub fn n_years(&self) -> usize {
        self.n_months.div_ceil(MONTHS_PER_YEAR)
    }

    /// Mid-month decimal year of step `index`.
    pub fn decimal_year(&self, index: usize) -> f64 {
        f64::from(self.start_year) + (index as f64 + 0.5) / MONTHS_PER_YEAR as f64
    }

    /// Calendar-month phase (0 = January) of step `index`.
    pub fn phase(&self, index: usize) -> usize {
        index % MONTHS_PER_YEAR
    }

    /// Calendar year containing step `index`.
    pub fn year_of(&self, index: usize) -> i32 {
        self.start_year + (index / MONTHS_PER_YEAR) as i32
    }

    /// Indices of every occurrence of calendar-month `phase`, in order.
    pub fn phase_indices(&self, phase: usize) -> StepBy<Range<usize>> {
        (phase % MONTHS_PER_YEAR..self.n_months).step_by(MONTHS_PER_YEAR)
    }

    /// Indices whose decimal year falls strictly inside `period`.
    pub fn indices_within(&self, period: BaselinePeriod) -> Vec<usize> {
        (0..self.n_months)
            .filter(|&i| period.contains(self.decimal_year(i)))
            .collect()
    }

    /// First January index whose decimal year is strictly after `year`.
    ///
    /// Scans `0, 12, 24, …` and returns `None` when the record never passes
    /// `year`.
    pub fn first_january_after(&self, year: f64) -> Option<usize> {
        (0..self.n_months)
            .step_by(MONTHS_PER_YEAR)
            .find(|&i| self.decimal_year(i) > year)
    }

    /// Index range covering the calendar years of `window`, clipped to the
    /// record. The range is empty when the window lies outside the record.
    pub fn year_range(&self, window: YearWindow) -> Range<usize> {
        let offset = |year: i32| -> usize {
            let months = i64::from(year - self.start_year) * MONTHS_PER_YEAR as i64;
            months.clamp(0, self.n_months as i64) as usize
        };
        let start = offset(window.first());
        let end = offset(window.last() + 1);
        start..end.max(start)
    }
}
