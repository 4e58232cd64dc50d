//! Trigger tables for the risk classifier.
//!
//! These tag sets mirror Annex III use-case categories and the transparency
//! obligations of the EU AI Act, flattened to the tag vocabulary the intake
//! assessment uses. Matching is exact on the tag string; the intake form is
//! responsible for normalization.

use super::AssessmentInput;

/// Use cases that place a system in the high-risk tier.
pub const HIGH_RISK_USE_CASES: &[&str] = &[
    "hiring",
    "healthcare",
    "finance",
    "legal",
    "education",
    "critical-infra",
    "biometric-id",
];

/// Data categories that count as sensitive when paired with high decision impact.
pub const SENSITIVE_DATA_TYPES: &[&str] =
    &["biometric", "health", "financial", "criminal", "children"];

/// System types that carry transparency obligations (limited-risk tier).
pub const LIMITED_RISK_SYSTEM_TYPES: &[&str] =
    &["chatbot", "genai", "recommendation", "speech", "nlp"];

/// System types that fall into the minimal-risk tier.
pub const MINIMAL_RISK_SYSTEM_TYPES: &[&str] =
    &["analytics", "automation", "fraud", "ml-model", "vision"];

/// Use cases that fall into the minimal-risk tier.
pub const MINIMAL_RISK_USE_CASES: &[&str] = &["internal", "research"];

/// Count the entries of `tags` that appear in `table`.
///
/// Entries are counted, not deduplicated: a tag submitted twice matches twice.
pub fn count_matches(tags: &[String], table: &[&str]) -> usize {
    tags.iter().filter(|t| table.contains(&t.as_str())).count()
}

/// Article 5 prohibited-practice detection.
///
/// No prohibited-practice rules ship today: the upstream rule set is still
/// being drafted, so every built classifier carries an empty list and the
/// prohibited branch never fires. The trait keeps the branch wired so that
/// adding a rule later is a data change, not a classifier change.
pub trait ProhibitedPracticeRule: Send + Sync {
    /// Rule identifier used in logs.
    fn name(&self) -> &str;

    /// Whether the declared usage matches this prohibited practice.
    fn matches(&self, input: &AssessmentInput) -> bool;
}

/// Ordered list of prohibited-practice rules consulted by the classifier.
#[derive(Default)]
pub struct ProhibitedRuleSet {
    rules: Vec<Box<dyn ProhibitedPracticeRule>>,
}

impl ProhibitedRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: Box<dyn ProhibitedPracticeRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules the input trips.
    pub fn count_matches(&self, input: &AssessmentInput) -> usize {
        self.rules
            .iter()
            .filter(|rule| {
                let hit = rule.matches(input);
                if hit {
                    log::debug!("prohibited practice rule matched: {}", rule.name());
                }
                hit
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_count_matches_counts_duplicates() {
        let use_cases = tags(&["hiring", "hiring", "marketing"]);
        assert_eq!(count_matches(&use_cases, HIGH_RISK_USE_CASES), 2);
    }

    #[test]
    fn test_count_matches_empty_input() {
        assert_eq!(count_matches(&[], HIGH_RISK_USE_CASES), 0);
    }

    #[test]
    fn test_unknown_tags_do_not_match() {
        let use_cases = tags(&["gardening", "astrology"]);
        assert_eq!(count_matches(&use_cases, HIGH_RISK_USE_CASES), 0);
    }

    struct MatchEverything;

    impl ProhibitedPracticeRule for MatchEverything {
        fn name(&self) -> &str {
            "match-everything"
        }

        fn matches(&self, _input: &AssessmentInput) -> bool {
            true
        }
    }

    #[test]
    fn test_default_rule_set_is_empty() {
        let rules = ProhibitedRuleSet::new();
        assert!(rules.is_empty());
        assert_eq!(rules.count_matches(&AssessmentInput::default()), 0);
    }

    #[test]
    fn test_rule_set_counts_matching_rules() {
        let rules = ProhibitedRuleSet::new()
            .with_rule(Box::new(MatchEverything))
            .with_rule(Box::new(MatchEverything));
        assert_eq!(rules.count_matches(&AssessmentInput::default()), 2);
    }
}
