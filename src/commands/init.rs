use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("protectron.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Protectron Scoring Configuration
# All values shown are the defaults; remove any section you don't override.

[scoring]
prohibited = 30
high_risk = 8
limited_risk = 3
unsupervised_automation = 10
oversight_bonus = 5

[certification.thresholds]
gold = 95.0
silver = 85.0
bronze = 70.0

[certification.bonuses]
hitl_rules_active = 5
no_open_incidents = 5
logging_active = 5
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created protectron.toml configuration file");

    Ok(())
}
