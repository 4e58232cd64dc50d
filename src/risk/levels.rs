use serde::{Deserialize, Serialize};
use std::fmt;

/// EU AI Act risk tier for a classified assessment finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Prohibited,
    High,
    Limited,
    Minimal,
}

/// Static display metadata attached to each risk tier. These strings are part
/// of the consuming JSON contract and must not change without coordinating
/// with the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelDisplay {
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
    pub border_color: &'static str,
    pub icon: &'static str,
}

impl RiskLevel {
    pub fn display(&self) -> LevelDisplay {
        match self {
            RiskLevel::Prohibited => LevelDisplay {
                label: "Prohibited",
                description: "Must stop immediately",
                color: "text-red-600",
                bg_color: "bg-red-50",
                border_color: "border-red-200",
                icon: "ban",
            },
            RiskLevel::High => LevelDisplay {
                label: "High Risk",
                description: "Requires conformity assessment",
                color: "text-orange-600",
                bg_color: "bg-orange-50",
                border_color: "border-orange-200",
                icon: "alert-triangle",
            },
            RiskLevel::Limited => LevelDisplay {
                label: "Limited Risk",
                description: "Transparency obligations",
                color: "text-amber-600",
                bg_color: "bg-amber-50",
                border_color: "border-amber-200",
                icon: "eye",
            },
            RiskLevel::Minimal => LevelDisplay {
                label: "Minimal Risk",
                description: "Voluntary best practices",
                color: "text-green-600",
                bg_color: "bg-green-50",
                border_color: "border-green-200",
                icon: "check-circle",
            },
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display().label)
    }
}
