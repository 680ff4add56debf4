//! Named diagnostic selector.

use std::fmt;
use std::str::FromStr;

use crate::error::DiagnosticsError;

/// Which period-mean diagnostic to compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// 120-month (decadal) means, `dec_mean_gmst`.
    #[default]
    DecadalMean,
    /// 12-month means, `ann_mean_gmst`.
    AnnualMean,
    /// 60-month means, `fiveyr_mean_gmst`.
    FiveYearMean,
    /// 24-month means, `twoyr_mean_gmst`.
    TwoYearMean,
}

impl DiagnosticKind {
    /// All supported diagnostics.
    pub const ALL: [Self; 4] = [
        Self::DecadalMean,
        Self::AnnualMean,
        Self::FiveYearMean,
        Self::TwoYearMean,
    ];

    /// Averaging period in months.
    pub fn period_months(self) -> usize {
        match self {
            Self::DecadalMean => 120,
            Self::AnnualMean => 12,
            Self::FiveYearMean => 60,
            Self::TwoYearMean => 24,
        }
    }

    /// Configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DecadalMean => "dec_mean_gmst",
            Self::AnnualMean => "ann_mean_gmst",
            Self::FiveYearMean => "fiveyr_mean_gmst",
            Self::TwoYearMean => "twoyr_mean_gmst",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagnosticKind {
    type Err = DiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DiagnosticsError::UnsupportedDiagnostic {
                name: s.to_string(),
            })
    }
}
