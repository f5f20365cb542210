use std::collections::BTreeMap;

use crate::report::{AnalysisResult, HistoryEntry, ShapToken};

/// Output format for result rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Text,
    Json,
}

/// Visual direction of a token's influence on the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Non-negative impact: pushed toward the assigned label.
    Supports,
    /// Negative impact: pushed away from it.
    Opposes,
}

/// One attribution row scaled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributionBar {
    pub token: String,
    pub impact: f64,
    /// Bar width relative to the strongest token in this result, 0–100.
    pub width_percent: f64,
    pub direction: Direction,
}

/// Floor for the normalization divisor, so an all-zero impact list still
/// produces defined widths instead of NaN.
const MIN_MAX_IMPACT: f64 = 0.0001;

/// Scale attribution impacts to bar widths.
///
/// Widths are relative to the strongest absolute impact in this item set
/// only; nothing carries over between results.
pub fn normalize_attributions(items: &[ShapToken]) -> Vec<AttributionBar> {
    let max_abs = items
        .iter()
        .map(|item| item.impact.abs())
        .fold(MIN_MAX_IMPACT, f64::max);

    items
        .iter()
        .map(|item| AttributionBar {
            token: item.token.clone(),
            impact: item.impact,
            width_percent: item.impact.abs() / max_abs * 100.0,
            direction: if item.impact >= 0.0 {
                Direction::Supports
            } else {
                Direction::Opposes
            },
        })
        .collect()
}

/// The three presence states of the SHAP explanation.
///
/// An absent field and an empty list look the same in a loosely-typed
/// rendering; keeping them as distinct variants is what lets the UI say
/// "not available" only when the service actually tried and came up empty.
#[derive(Debug, PartialEq)]
pub enum ShapDisplay {
    /// Field absent: no explanation was requested or supported.
    NotRequested,
    /// Field present but empty: no explanation for this prediction.
    Unavailable,
    /// Scaled bars, in service order.
    Bars(Vec<AttributionBar>),
}

pub fn shap_display(result: &AnalysisResult) -> ShapDisplay {
    match result.shap.as_deref() {
        None => ShapDisplay::NotRequested,
        Some([]) => ShapDisplay::Unavailable,
        Some(items) => ShapDisplay::Bars(normalize_attributions(items)),
    }
}

/// `"avg_word_length"` → `"Avg Word Length"`.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stylometry entries as (humanized key, value rounded to two decimals),
/// ready for a two-column table.
pub fn stylometry_rows(map: &BTreeMap<String, f64>) -> Vec<(String, String)> {
    map.iter()
        .map(|(key, value)| (humanize_key(key), format!("{value:.2}")))
        .collect()
}

/// Format a result as plain text (no colors).
pub fn format_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Verdict: {} ({} confidence)\n",
        result.label,
        result.confidence_percent()
    ));

    match shap_display(result) {
        ShapDisplay::NotRequested => {}
        ShapDisplay::Unavailable => {
            out.push_str("\nSHAP explanation not available for this prediction.\n");
        }
        ShapDisplay::Bars(bars) => {
            out.push_str("\nSHAP explanation:\n");
            for bar in &bars {
                let sign = if bar.impact >= 0.0 { "+" } else { "" };
                let word = match bar.direction {
                    Direction::Supports => "supports",
                    Direction::Opposes => "opposes",
                };
                out.push_str(&format!(
                    "  {:<16} {}{:.4}  [{:>3.0}%] {}\n",
                    bar.token, sign, bar.impact, bar.width_percent, word
                ));
            }
        }
    }

    if let Some(map) = &result.stylometry {
        if !map.is_empty() {
            out.push_str("\nStylometric features:\n");
            for (key, value) in stylometry_rows(map) {
                out.push_str(&format!("  {key:<24} {value}\n"));
            }
        }
    }

    out
}

/// Format a result as JSON.
pub fn format_json(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result).expect("result should be serializable")
}

/// Format the history feed as a plain-text table. An empty feed renders an
/// explicit empty state, never an error.
pub fn format_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No analysis history yet.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<17}  {:<14}  {:>7}  {}\n",
        "TIMESTAMP", "LABEL", "CONF", "PREVIEW"
    ));
    out.push_str(&format!("{}\n", "─".repeat(72)));
    for entry in entries {
        out.push_str(&format!(
            "{:<17}  {:<14}  {:>7}  {}\n",
            entry.timestamp,
            entry.label,
            entry.confidence_percent(),
            entry.text_preview
        ));
    }
    out
}
