//! JSON response envelope for certification grading.
//!
//! The dashboard and the public API both consume this exact shape under a
//! `data` key; field names are part of the wire contract.

use crate::certification::{
    CertificationGrade, CertificationInputs, CertificationLevel, CertificationStatus,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CertificationResponse {
    pub data: CertificationData,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CertificationData {
    pub compliance_score: f64,
    pub certification_level: CertificationLevel,
    pub certification_status: CertificationStatus,
    pub requirements: RequirementCounts,
    pub checks: OversightChecks,
    pub bonus_points: u8,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RequirementCounts {
    pub total: usize,
    pub completed: usize,
    pub percentage: u8,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OversightChecks {
    pub sdk_connected: bool,
    pub hitl_rules_active: bool,
    pub no_open_incidents: bool,
    pub logging_active: bool,
}

impl CertificationResponse {
    pub fn new(inputs: &CertificationInputs, grade: &CertificationGrade) -> Self {
        Self {
            data: CertificationData {
                compliance_score: grade.final_score,
                certification_level: grade.certification_level,
                certification_status: grade.certification_status,
                requirements: RequirementCounts {
                    total: inputs.total_requirements,
                    completed: inputs.completed_requirements,
                    percentage: grade.base_score.round() as u8,
                },
                checks: OversightChecks {
                    sdk_connected: inputs.sdk_connected,
                    hitl_rules_active: inputs.hitl_rules_active >= 1,
                    no_open_incidents: inputs.open_incidents == 0,
                    logging_active: inputs.recent_events > 0,
                },
                bonus_points: grade.bonus_points,
            },
        }
    }
}
