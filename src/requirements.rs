//! Requirement completion scoring.
//!
//! A system's regulatory requirements are tracked as individual records owned
//! by the persistence layer; this module only folds a snapshot of their
//! statuses into a completion percentage and a coarse status label.

use serde::{Deserialize, Serialize};

/// Workflow status of a single mapped requirement.
///
/// Both `completed` and `compliant` are terminal. The two intake paths write
/// different terminal values and existing rows carry both, so the scorer
/// accepts either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Pending,
    InProgress,
    Completed,
    Compliant,
    NotApplicable,
}

impl RequirementStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, RequirementStatus::Completed | RequirementStatus::Compliant)
    }
}

/// Aggregate completion label derived from the progress percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    InProgress,
    NotStarted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementProgress {
    pub progress_percent: u8,
    pub compliance_status: ComplianceStatus,
}

/// Fold a snapshot of requirement statuses into a completion percentage and
/// status label. Total over all inputs; an empty snapshot scores 0.
pub fn score_requirements(requirements: &[RequirementStatus]) -> RequirementProgress {
    let total = requirements.len();
    let completed = requirements.iter().filter(|s| s.is_done()).count();

    let progress_percent = if total > 0 {
        (100.0 * completed as f64 / total as f64).round() as u8
    } else {
        0
    };

    let compliance_status = match progress_percent {
        100 => ComplianceStatus::Compliant,
        1..=99 => ComplianceStatus::InProgress,
        _ => ComplianceStatus::NotStarted,
    };

    RequirementProgress {
        progress_percent,
        compliance_status,
    }
}
