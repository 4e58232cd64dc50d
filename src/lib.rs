// Export modules for library usage
pub mod certification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod requirements;
pub mod risk;

// Re-export commonly used types
pub use crate::certification::{
    verified_tier, CertificationGrade, CertificationGrader, CertificationInputs,
    CertificationLevel, CertificationStatus, OversightBonuses, TierThresholds,
};

pub use crate::formatting::{score_color, score_label, ScoreColor};

pub use crate::io::envelope::CertificationResponse;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::requirements::{
    score_requirements, ComplianceStatus, RequirementProgress, RequirementStatus,
};

pub use crate::risk::{
    AssessmentInput, AutomationLevel, DecisionImpact, DeductionWeights, ProhibitedPracticeRule,
    ProhibitedRuleSet, RiskClassification, RiskClassifier, RiskLevel, RiskResult,
};
