use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The verdict returned by the classification service for one submission.
///
/// `shap` and `stylometry` are optional on the wire. For `shap` the two
/// "missing" shapes mean different things: `None` means no explanation was
/// requested or supported for this call, while `Some` with an empty vec means
/// the service could not produce one for this particular prediction. The
/// renderer keeps the two distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Predicted origin, e.g. `"Human"`, `"AI"`, `"LLM-Rewritten"`.
    pub label: String,
    /// Confidence in the label (0.0–1.0).
    pub confidence: f64,
    /// Token-level attribution, ordered by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shap: Option<Vec<ShapToken>>,
    /// Named stylometric features and their measured values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylometry: Option<BTreeMap<String, f64>>,
}

impl AnalysisResult {
    /// Confidence as a two-decimal percentage string, e.g. `"86.75%"`.
    pub fn confidence_percent(&self) -> String {
        format_percent(self.confidence)
    }
}

/// One (token, signed impact) attribution pair. A positive impact pushed the
/// prediction toward the assigned label, a negative one away from it.
/// Magnitude is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapToken {
    pub token: String,
    pub impact: f64,
}

/// A past analysis, as supplied by the service's read-only history feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text_preview: String,
    pub label: String,
    /// Confidence in the label (0.0–1.0).
    pub confidence: f64,
    pub timestamp: String,
}

impl HistoryEntry {
    /// Confidence as a two-decimal percentage string, e.g. `"86.75%"`.
    pub fn confidence_percent(&self) -> String {
        format_percent(self.confidence)
    }
}

/// Format a 0.0–1.0 fraction as a two-decimal percentage.
///
/// Every surface that displays a confidence goes through this, so the
/// rounding never drifts between the result view and the history view.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
