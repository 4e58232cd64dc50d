use crate::certification::{CertificationGrader, OversightBonuses, TierThresholds};
use crate::risk::{DeductionWeights, RiskClassifier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Certification grading configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationConfig {
    #[serde(default)]
    pub thresholds: TierThresholds,
    #[serde(default)]
    pub bonuses: OversightBonuses,
}

impl CertificationConfig {
    fn validate(&self) -> Result<(), String> {
        let t = &self.thresholds;
        if !(t.gold >= t.silver && t.silver >= t.bronze) {
            return Err(format!(
                "tier thresholds must be descending (gold {} >= silver {} >= bronze {})",
                t.gold, t.silver, t.bronze
            ));
        }
        for (name, value) in [("gold", t.gold), ("silver", t.silver), ("bronze", t.bronze)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{name} threshold must be between 0 and 100"));
            }
        }
        Ok(())
    }
}

/// Top-level `protectron.toml` configuration.
///
/// Every field defaults to the published scoring constants; a config file is
/// only needed to override them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtectronConfig {
    #[serde(default)]
    pub scoring: Option<DeductionWeights>,
    #[serde(default)]
    pub certification: Option<CertificationConfig>,
}

impl ProtectronConfig {
    pub fn deduction_weights(&self) -> DeductionWeights {
        self.scoring.unwrap_or_default()
    }

    pub fn certification_config(&self) -> CertificationConfig {
        self.certification.clone().unwrap_or_default()
    }
}

static CONFIG: OnceLock<ProtectronConfig> = OnceLock::new();

fn parse_and_validate_config(contents: &str) -> Result<ProtectronConfig, String> {
    let mut config = toml::from_str::<ProtectronConfig>(contents)
        .map_err(|e| format!("Failed to parse protectron.toml: {e}"))?;

    if let Some(ref certification) = config.certification {
        if let Err(e) = certification.validate() {
            eprintln!("Warning: Invalid certification config: {e}. Using defaults.");
            config.certification = None;
        }
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<ProtectronConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

/// Load configuration from `protectron.toml`, searching upward from the
/// current directory.
pub fn load_config() -> ProtectronConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            return ProtectronConfig::default();
        }
    };

    std::iter::successors(Some(current), |dir: &PathBuf| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(MAX_TRAVERSAL_DEPTH)
    .map(|dir| dir.join("protectron.toml"))
    .find_map(|path| try_load_config_from_path(&path))
    .unwrap_or_default()
}

/// Get the cached configuration.
pub fn get_config() -> &'static ProtectronConfig {
    CONFIG.get_or_init(load_config)
}

/// Build a risk classifier from the cached configuration.
pub fn classifier() -> RiskClassifier {
    RiskClassifier::new(get_config().deduction_weights())
}

/// Build a certification grader from the cached configuration.
pub fn grader() -> CertificationGrader {
    let certification = get_config().certification_config();
    CertificationGrader::new(certification.thresholds, certification.bonuses)
}
