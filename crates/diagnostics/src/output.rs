//! JSON output structure for a blend-and-mask run.

use serde::Serialize;

use crate::error::DiagnosticsError;

/// Everything a run produces, ready for serialization.
///
/// Non-finite values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticsOutput {
    /// Three-character mode string, e.g. `"maf"`.
    pub mode: String,
    /// Diagnostic name, e.g. `"dec_mean_gmst"`.
    pub diagnostic: String,
    /// Averaging period of the diagnostic in months.
    pub period_months: usize,
    /// First calendar year of the model record.
    pub start_year: i32,
    /// Length of the model record in months.
    pub n_months: usize,
    /// Blended, masked period-mean anomalies of the model.
    pub model: Vec<f64>,
    /// The same diagnostic for the reference dataset, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Vec<f64>>,
    /// 2010–2019 minus 1850–1900 global-mean air temperature.
    pub decadal_warming: f64,
    /// Annual global-mean air temperature relative to 1850–1900.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_warming: Option<Vec<f64>>,
}

/// Serialize a run's output to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns [`DiagnosticsError::Serialization`] if serialization fails.
pub fn to_json(output: &DiagnosticsOutput) -> Result<String, DiagnosticsError> {
    serde_json::to_string_pretty(output).map_err(|e| DiagnosticsError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiagnosticsOutput {
        DiagnosticsOutput {
            mode: "max".to_string(),
            diagnostic: "dec_mean_gmst".to_string(),
            period_months: 120,
            start_year: 1850,
            n_months: 2040,
            model: vec![-0.25, f64::NAN, 0.25],
            reference: None,
            decadal_warming: 1.07,
            annual_warming: Some(vec![0.0, 0.1]),
        }
    }

    #[test]
    fn nan_serializes_as_null() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["model"][0], -0.25);
        assert!(value["model"][1].is_null());
        assert_eq!(value["mode"], "max");
        assert_eq!(value["period_months"], 120);
    }

    #[test]
    fn absent_optionals_omitted() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("reference").is_none());
        assert_eq!(value["annual_warming"].as_array().map(Vec::len), Some(2));
    }
}
