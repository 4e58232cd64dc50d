pub mod levels;
pub mod rules;

pub use levels::{LevelDisplay, RiskLevel};
pub use rules::{ProhibitedPracticeRule, ProhibitedRuleSet};

use rules::{
    count_matches, HIGH_RISK_USE_CASES, LIMITED_RISK_SYSTEM_TYPES, MINIMAL_RISK_SYSTEM_TYPES,
    MINIMAL_RISK_USE_CASES, SENSITIVE_DATA_TYPES,
};
use serde::{Deserialize, Serialize};

/// How much autonomy the declared system has over its decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionImpact {
    #[default]
    None,
    Low,
    High,
    Critical,
}

impl DecisionImpact {
    /// Decisions at this impact level materially affect the people subject to them.
    pub fn is_significant(&self) -> bool {
        matches!(self, DecisionImpact::High | DecisionImpact::Critical)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutomationLevel {
    FullyAutomated,
    AutomatedOverride,
    HumanInLoop,
    AdvisoryOnly,
    /// Intake values introduced after this release deserialize here.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl AutomationLevel {
    fn is_unsupervised(&self) -> bool {
        matches!(
            self,
            AutomationLevel::FullyAutomated | AutomationLevel::AutomatedOverride
        )
    }

    fn has_human_oversight(&self) -> bool {
        matches!(
            self,
            AutomationLevel::HumanInLoop | AutomationLevel::AdvisoryOnly
        )
    }
}

/// A completed intake assessment: company profile plus declared AI usage.
///
/// Built once from the submitted form and consumed as-is. Tag lists default
/// to empty when the submission omits them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub country: String,

    #[serde(default, rename = "hasEUCustomers")]
    pub has_eu_customers: bool,
    #[serde(default, rename = "hasEUOperations")]
    pub has_eu_operations: bool,
    #[serde(default, rename = "processesEUData")]
    pub processes_eu_data: bool,

    #[serde(default)]
    pub ai_system_types: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub data_types: Vec<String>,

    #[serde(default)]
    pub decision_impact: DecisionImpact,
    #[serde(default)]
    pub automation_level: AutomationLevel,
}

/// One classified finding per risk tier present in the outcome.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub level: RiskLevel,
    pub count: usize,
    pub label: String,
    pub description: String,
    pub color: String,
    pub bg_color: String,
    pub border_color: String,
    pub icon: String,
}

impl RiskResult {
    fn new(level: RiskLevel, count: usize) -> Self {
        let display = level.display();
        Self {
            level,
            count,
            label: display.label.to_string(),
            description: display.description.to_string(),
            color: display.color.to_string(),
            bg_color: display.bg_color.to_string(),
            border_color: display.border_color.to_string(),
            icon: display.icon.to_string(),
        }
    }
}

/// Output of [`RiskClassifier::classify`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskClassification {
    pub results: Vec<RiskResult>,
    pub compliance_score: u8,
    #[serde(rename = "hasEUExposure")]
    pub has_eu_exposure: bool,
    pub total_systems: usize,
}

impl RiskClassification {
    pub fn result_for(&self, level: RiskLevel) -> Option<&RiskResult> {
        self.results.iter().find(|r| r.level == level)
    }
}

/// Point deductions applied per matched trigger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeductionWeights {
    /// Flat deduction when any prohibited practice is detected.
    #[serde(default = "default_prohibited_weight")]
    pub prohibited: i64,
    /// Per-trigger deduction for high-risk use.
    #[serde(default = "default_high_risk_weight")]
    pub high_risk: i64,
    /// Per-trigger deduction for limited-risk system types.
    #[serde(default = "default_limited_risk_weight")]
    pub limited_risk: i64,
    /// Extra deduction for unsupervised automation of high-risk use.
    #[serde(default = "default_automation_weight")]
    pub unsupervised_automation: i64,
    /// Credit for human oversight of decisions.
    #[serde(default = "default_oversight_bonus")]
    pub oversight_bonus: i64,
}

fn default_prohibited_weight() -> i64 {
    30
}

fn default_high_risk_weight() -> i64 {
    8
}

fn default_limited_risk_weight() -> i64 {
    3
}

fn default_automation_weight() -> i64 {
    10
}

fn default_oversight_bonus() -> i64 {
    5
}

impl Default for DeductionWeights {
    fn default() -> Self {
        Self {
            prohibited: default_prohibited_weight(),
            high_risk: default_high_risk_weight(),
            limited_risk: default_limited_risk_weight(),
            unsupervised_automation: default_automation_weight(),
            oversight_bonus: default_oversight_bonus(),
        }
    }
}

/// Maps a completed assessment to risk-tier findings and a compliance score.
///
/// Classification is a fixed-point deduction scheme: the score starts at 100
/// and each matched trigger subtracts a weighted amount, clamped to [0, 100]
/// at the end. Pure and deterministic for a given input and weight set.
#[derive(Default)]
pub struct RiskClassifier {
    weights: DeductionWeights,
    prohibited_rules: ProhibitedRuleSet,
}

impl RiskClassifier {
    pub fn new(weights: DeductionWeights) -> Self {
        Self {
            weights,
            prohibited_rules: ProhibitedRuleSet::new(),
        }
    }

    pub fn with_prohibited_rules(mut self, rules: ProhibitedRuleSet) -> Self {
        self.prohibited_rules = rules;
        self
    }

    pub fn classify(&self, input: &AssessmentInput) -> RiskClassification {
        let mut results = Vec::new();
        let mut score: i64 = 100;

        let prohibited_count = self.prohibited_rules.count_matches(input);
        if prohibited_count > 0 {
            results.push(RiskResult::new(RiskLevel::Prohibited, prohibited_count));
            score -= self.weights.prohibited;
        }

        let high_risk_total = self.high_risk_count(input);
        if high_risk_total > 0 {
            results.push(RiskResult::new(RiskLevel::High, high_risk_total));
            score -= self.weights.high_risk * high_risk_total as i64;
        }

        let limited_count = count_matches(&input.ai_system_types, LIMITED_RISK_SYSTEM_TYPES);
        if limited_count > 0 {
            results.push(RiskResult::new(RiskLevel::Limited, limited_count));
            score -= self.weights.limited_risk * limited_count as i64;
        }

        // Every classification carries at least one finding: an assessment
        // with no matched trigger still lands in the minimal tier.
        let minimal_count = count_matches(&input.ai_system_types, MINIMAL_RISK_SYSTEM_TYPES)
            + count_matches(&input.use_cases, MINIMAL_RISK_USE_CASES);
        if minimal_count > 0 || results.is_empty() {
            results.push(RiskResult::new(RiskLevel::Minimal, minimal_count.max(1)));
        }

        // Automation adjustment is gated on a high-risk finding: fully
        // automated decisions only deepen a deficit that already exists.
        if input.automation_level.is_unsupervised() && high_risk_total > 0 {
            score -= self.weights.unsupervised_automation;
        } else if input.automation_level.has_human_oversight() {
            score += self.weights.oversight_bonus;
        }

        RiskClassification {
            results,
            compliance_score: score.clamp(0, 100) as u8,
            has_eu_exposure: input.has_eu_customers
                || input.has_eu_operations
                || input.processes_eu_data,
            total_systems: input.ai_system_types.len() + input.use_cases.len(),
        }
    }

    fn high_risk_count(&self, input: &AssessmentInput) -> usize {
        let use_case_hits = count_matches(&input.use_cases, HIGH_RISK_USE_CASES);
        let sensitive_data_hit = input
            .data_types
            .iter()
            .any(|t| SENSITIVE_DATA_TYPES.contains(&t.as_str()))
            && input.decision_impact.is_significant();
        use_case_hits + usize::from(sensitive_data_hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_assessment_is_minimal_with_full_score() {
        let classifier = RiskClassifier::default();
        let outcome = classifier.classify(&AssessmentInput::default());

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].level, RiskLevel::Minimal);
        assert_eq!(outcome.results[0].count, 1);
        assert_eq!(outcome.compliance_score, 100);
        assert!(!outcome.has_eu_exposure);
        assert_eq!(outcome.total_systems, 0);
    }

    #[test]
    fn test_oversight_bonus_clamps_at_100() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            automation_level: AutomationLevel::AdvisoryOnly,
            ..Default::default()
        };
        // 100 + 5 before the clamp
        assert_eq!(classifier.classify(&input).compliance_score, 100);
    }

    #[test]
    fn test_automation_penalty_requires_high_risk_finding() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            ai_system_types: tags(&["chatbot"]),
            automation_level: AutomationLevel::FullyAutomated,
            ..Default::default()
        };
        let outcome = classifier.classify(&input);
        // Only the limited-risk deduction applies, never the automation one.
        assert_eq!(outcome.compliance_score, 97);
        assert!(outcome.result_for(RiskLevel::High).is_none());
    }

    #[test]
    fn test_worked_example_from_handbook() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            use_cases: tags(&["hiring", "healthcare"]),
            data_types: tags(&["biometric"]),
            decision_impact: DecisionImpact::Critical,
            ai_system_types: tags(&["chatbot"]),
            automation_level: AutomationLevel::FullyAutomated,
            ..Default::default()
        };
        let outcome = classifier.classify(&input);

        // high: 2 use cases + 1 sensitive-data hit = 3, deduct 24
        // limited: chatbot, deduct 3; unsupervised automation, deduct 10
        assert_eq!(outcome.compliance_score, 63);
        assert_eq!(outcome.result_for(RiskLevel::High).unwrap().count, 3);
        assert_eq!(outcome.result_for(RiskLevel::Limited).unwrap().count, 1);
        assert!(outcome.result_for(RiskLevel::Minimal).is_none());
        assert_eq!(outcome.total_systems, 3);
    }

    #[test]
    fn test_score_never_leaves_range() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            use_cases: tags(&[
                "hiring",
                "healthcare",
                "finance",
                "legal",
                "education",
                "critical-infra",
                "biometric-id",
                "hiring",
                "hiring",
                "hiring",
                "hiring",
                "hiring",
                "hiring",
            ]),
            data_types: tags(&["biometric", "health"]),
            decision_impact: DecisionImpact::Critical,
            automation_level: AutomationLevel::FullyAutomated,
            ..Default::default()
        };
        let outcome = classifier.classify(&input);
        assert_eq!(outcome.compliance_score, 0);
    }

    #[test]
    fn test_sensitive_data_needs_significant_impact() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            data_types: tags(&["biometric"]),
            decision_impact: DecisionImpact::Low,
            ..Default::default()
        };
        let outcome = classifier.classify(&input);
        assert!(outcome.result_for(RiskLevel::High).is_none());
        assert_eq!(outcome.compliance_score, 100);
    }

    #[test]
    fn test_total_systems_counts_without_dedup() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            ai_system_types: tags(&["chatbot", "chatbot"]),
            use_cases: tags(&["chatbot"]),
            ..Default::default()
        };
        assert_eq!(classifier.classify(&input).total_systems, 3);
    }

    #[test]
    fn test_result_order_is_high_limited_minimal() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            use_cases: tags(&["hiring", "internal"]),
            ai_system_types: tags(&["chatbot", "analytics"]),
            ..Default::default()
        };
        let levels: Vec<RiskLevel> = classifier
            .classify(&input)
            .results
            .iter()
            .map(|r| r.level)
            .collect();
        assert_eq!(
            levels,
            vec![RiskLevel::High, RiskLevel::Limited, RiskLevel::Minimal]
        );
    }

    #[test]
    fn test_unknown_automation_level_deserializes() {
        let input: AssessmentInput =
            serde_json::from_str(r#"{"companyName":"Acme","automationLevel":"batch-replay"}"#)
                .unwrap();
        assert_eq!(input.automation_level, AutomationLevel::Unspecified);
    }

    #[test]
    fn test_eu_exposure_is_or_of_three_flags() {
        let classifier = RiskClassifier::default();
        let input = AssessmentInput {
            processes_eu_data: true,
            ..Default::default()
        };
        assert!(classifier.classify(&input).has_eu_exposure);
    }
}
