use colored::Colorize;

use originai::render::{self, Direction, ShapDisplay};
use originai::report::AnalysisResult;

/// Width of a full-scale attribution bar, in glyphs.
const BAR_WIDTH: usize = 30;

/// Format a result with terminal colors: green bars for tokens supporting
/// the verdict, red for tokens opposing it.
pub fn format_pretty(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        "Verdict:".bold(),
        format!("{} · {}", result.label, result.confidence_percent()).bold()
    ));

    match render::shap_display(result) {
        ShapDisplay::NotRequested => {}
        ShapDisplay::Unavailable => {
            out.push_str(&format!(
                "\n{}\n  {}\n",
                "SHAP explanation".bold(),
                "not available for this prediction".dimmed()
            ));
        }
        ShapDisplay::Bars(bars) => {
            out.push_str(&format!("\n{}\n", "SHAP explanation".bold()));
            for bar in &bars {
                let filled = (bar.width_percent / 100.0 * BAR_WIDTH as f64).round() as usize;
                let drawn = "█".repeat(filled);
                let colored_bar = match bar.direction {
                    Direction::Supports => drawn.green(),
                    Direction::Opposes => drawn.red(),
                };
                let sign = if bar.impact >= 0.0 { "+" } else { "" };
                out.push_str(&format!(
                    "  {:<16} {} {}{:.4}\n",
                    bar.token, colored_bar, sign, bar.impact
                ));
            }
        }
    }

    if let Some(map) = &result.stylometry {
        if !map.is_empty() {
            out.push_str(&format!("\n{}\n", "Stylometric features".bold()));
            for (key, value) in render::stylometry_rows(map) {
                out.push_str(&format!("  {:<24} {}\n", key.dimmed(), value));
            }
        }
    }

    out
}

pub use originai::render::{format_history, format_json, format_text};

#[cfg(test)]
mod tests {
    use super::*;
    use originai::report::ShapToken;
    use std::collections::BTreeMap;

    fn result() -> AnalysisResult {
        let mut stylometry = BTreeMap::new();
        stylometry.insert("avg_word_length".to_string(), 4.8123);
        AnalysisResult {
            label: "AI".into(),
            confidence: 0.8675,
            shap: Some(vec![
                ShapToken {
                    token: "furthermore".into(),
                    impact: 0.21,
                },
                ShapToken {
                    token: "maybe".into(),
                    impact: -0.105,
                },
            ]),
            stylometry: Some(stylometry),
        }
    }

    #[test]
    fn pretty_shows_verdict_and_percent() {
        let out = format_pretty(&result());
        assert!(out.contains("AI"));
        assert!(out.contains("86.75%"));
    }

    #[test]
    fn pretty_shows_bars_and_humanized_features() {
        let out = format_pretty(&result());
        assert!(out.contains("furthermore"));
        assert!(out.contains("█"));
        assert!(out.contains("Avg Word Length"));
        assert!(out.contains("4.81"));
    }

    #[test]
    fn pretty_marks_empty_shap_as_unavailable() {
        let mut r = result();
        r.shap = Some(vec![]);
        let out = format_pretty(&r);
        assert!(out.contains("not available for this prediction"));
    }

    #[test]
    fn pretty_omits_shap_section_when_absent() {
        let mut r = result();
        r.shap = None;
        let out = format_pretty(&r);
        assert!(!out.contains("SHAP explanation"));
    }
}
