pub mod verify;

pub use verify::verified_tier;

use serde::{Deserialize, Serialize};

/// Certification tier for a monitored AI system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationLevel {
    None,
    Bronze,
    Silver,
    Gold,
}

impl CertificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationLevel::None => "none",
            CertificationLevel::Bronze => "bronze",
            CertificationLevel::Silver => "silver",
            CertificationLevel::Gold => "gold",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationStatus {
    Certified,
    NotCertified,
}

/// Snapshot of a system's requirement completion and operational oversight
/// signals, read together at grading time. The grader never refetches; the
/// caller is responsible for reading these inside one logical snapshot.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CertificationInputs {
    pub total_requirements: usize,
    pub completed_requirements: usize,
    pub sdk_connected: bool,
    pub hitl_rules_active: usize,
    pub open_incidents: usize,
    pub recent_events: usize,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CertificationGrade {
    pub base_score: f64,
    pub bonus_points: u8,
    pub final_score: f64,
    pub certification_level: CertificationLevel,
    pub certification_status: CertificationStatus,
}

/// Minimum final score for each tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_gold_threshold")]
    pub gold: f64,
    #[serde(default = "default_silver_threshold")]
    pub silver: f64,
    #[serde(default = "default_bronze_threshold")]
    pub bronze: f64,
}

fn default_gold_threshold() -> f64 {
    95.0
}

fn default_silver_threshold() -> f64 {
    85.0
}

fn default_bronze_threshold() -> f64 {
    70.0
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            gold: default_gold_threshold(),
            silver: default_silver_threshold(),
            bronze: default_bronze_threshold(),
        }
    }
}

/// Points added per oversight signal, 5 each by default (15 max).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OversightBonuses {
    #[serde(default = "default_bonus")]
    pub hitl_rules_active: u8,
    #[serde(default = "default_bonus")]
    pub no_open_incidents: u8,
    #[serde(default = "default_bonus")]
    pub logging_active: u8,
}

fn default_bonus() -> u8 {
    5
}

impl Default for OversightBonuses {
    fn default() -> Self {
        Self {
            hitl_rules_active: default_bonus(),
            no_open_incidents: default_bonus(),
            logging_active: default_bonus(),
        }
    }
}

/// Grades a system for certification from its requirement completion plus
/// operational oversight bonuses.
///
/// SDK connectivity is a hard gate: a system that has never reported
/// telemetry cannot certify at any tier, whatever its score. This contract is
/// intentionally distinct from [`verify::verified_tier`], which buckets
/// already-issued certificates and has no gate.
#[derive(Debug, Default)]
pub struct CertificationGrader {
    thresholds: TierThresholds,
    bonuses: OversightBonuses,
}

impl CertificationGrader {
    pub fn new(thresholds: TierThresholds, bonuses: OversightBonuses) -> Self {
        Self {
            thresholds,
            bonuses,
        }
    }

    pub fn grade(&self, inputs: &CertificationInputs) -> CertificationGrade {
        let base_score = if inputs.total_requirements > 0 {
            inputs.completed_requirements as f64 / inputs.total_requirements as f64 * 100.0
        } else {
            0.0
        };

        let mut bonus_points = 0u8;
        if inputs.hitl_rules_active >= 1 {
            bonus_points += self.bonuses.hitl_rules_active;
        }
        if inputs.open_incidents == 0 {
            bonus_points += self.bonuses.no_open_incidents;
        }
        if inputs.recent_events > 0 {
            bonus_points += self.bonuses.logging_active;
        }

        let final_score = (base_score + bonus_points as f64).min(100.0);

        let certification_level = if inputs.sdk_connected {
            self.tier_for(final_score)
        } else {
            CertificationLevel::None
        };

        let certification_status = if certification_level == CertificationLevel::None {
            CertificationStatus::NotCertified
        } else {
            CertificationStatus::Certified
        };

        CertificationGrade {
            base_score,
            bonus_points,
            // one decimal place for display
            final_score: (final_score * 10.0).round() / 10.0,
            certification_level,
            certification_status,
        }
    }

    fn tier_for(&self, score: f64) -> CertificationLevel {
        if score >= self.thresholds.gold {
            CertificationLevel::Gold
        } else if score >= self.thresholds.silver {
            CertificationLevel::Silver
        } else if score >= self.thresholds.bronze {
            CertificationLevel::Bronze
        } else {
            CertificationLevel::None
        }
    }
}
