//! Score display helpers shared by the terminal writers.
//!
//! Thresholds here are mirrored by frontend snapshot tests; change them in
//! lockstep with the UI or not at all.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Success,
    Warning,
    Error,
}

/// Traffic-light color for a 0-100 score.
pub fn score_color(score: f64) -> ScoreColor {
    if score >= 70.0 {
        ScoreColor::Success
    } else if score >= 40.0 {
        ScoreColor::Warning
    } else {
        ScoreColor::Error
    }
}

/// Qualitative label for a 0-100 score.
pub fn score_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else if score >= 40.0 {
        "Needs Work"
    } else {
        "Critical"
    }
}

/// Render a score for terminal output, colored per [`score_color`].
pub fn colored_score(score: f64) -> ColoredString {
    let text = format!("{score:.0}");
    match score_color(score) {
        ScoreColor::Success => text.green().bold(),
        ScoreColor::Warning => text.yellow().bold(),
        ScoreColor::Error => text.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_thresholds() {
        assert_eq!(score_color(100.0), ScoreColor::Success);
        assert_eq!(score_color(70.0), ScoreColor::Success);
        assert_eq!(score_color(69.9), ScoreColor::Warning);
        assert_eq!(score_color(40.0), ScoreColor::Warning);
        assert_eq!(score_color(39.9), ScoreColor::Error);
        assert_eq!(score_color(0.0), ScoreColor::Error);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(score_label(80.0), "Excellent");
        assert_eq!(score_label(79.9), "Good");
        assert_eq!(score_label(60.0), "Good");
        assert_eq!(score_label(59.9), "Needs Work");
        assert_eq!(score_label(40.0), "Needs Work");
        assert_eq!(score_label(39.9), "Critical");
    }
}
