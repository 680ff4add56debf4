//! Result of a blend-and-mask run.

use blendmask_calendar::TimeAxis;
use blendmask_diagnostics::{DiagnosticKind, DiagnosticsOutput};

use crate::mode::BlendMode;

/// Series and scalars computed by [`blend_and_mask`](crate::blend_and_mask).
#[derive(Debug, Clone)]
pub struct BlendMaskResult {
    pub(crate) mode: BlendMode,
    pub(crate) kind: DiagnosticKind,
    pub(crate) axis: TimeAxis,
    pub(crate) diagnostic: Vec<f64>,
    pub(crate) reference_diagnostic: Option<Vec<f64>>,
    pub(crate) decadal_warming: f64,
    pub(crate) annual_warming: Option<Vec<f64>>,
}

impl BlendMaskResult {
    /// Blended, masked period-mean anomalies of the model.
    pub fn diagnostic(&self) -> &[f64] {
        &self.diagnostic
    }

    /// The same diagnostic for the reference dataset, if one was given.
    pub fn reference_diagnostic(&self) -> Option<&[f64]> {
        self.reference_diagnostic.as_deref()
    }

    /// 2010–2019 minus 1850–1900 global-mean air temperature.
    pub fn decadal_warming(&self) -> f64 {
        self.decadal_warming
    }

    /// Annual global-mean air-temperature anomalies, if requested.
    pub fn annual_warming(&self) -> Option<&[f64]> {
        self.annual_warming.as_deref()
    }

    /// Mode the result was computed with.
    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    /// Diagnostic the result was computed with.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Time axis of the model record.
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Serializable form of the result.
    pub fn to_output(&self) -> DiagnosticsOutput {
        DiagnosticsOutput {
            mode: self.mode.to_string(),
            diagnostic: self.kind.to_string(),
            period_months: self.kind.period_months(),
            start_year: self.axis.start_year(),
            n_months: self.axis.len(),
            model: self.diagnostic.clone(),
            reference: self.reference_diagnostic.clone(),
            decadal_warming: self.decadal_warming,
            annual_warming: self.annual_warming.clone(),
        }
    }
}
