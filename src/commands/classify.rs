use crate::config;
use crate::io::output::{create_writer, JsonWriter, OutputFormat, OutputWriter};
use crate::risk::AssessmentInput;
use anyhow::Result;
use std::path::PathBuf;

pub struct ClassifyConfig {
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_classify(config: ClassifyConfig) -> Result<()> {
    let raw = super::read_input(config.input.as_ref())?;
    let assessment: AssessmentInput =
        serde_json::from_str(&raw).map_err(crate::errors::ProtectronError::from)?;

    log::info!(
        "classifying assessment for {}",
        if assessment.company_name.is_empty() {
            "<unnamed>"
        } else {
            assessment.company_name.as_str()
        }
    );

    let classification = config::classifier().classify(&assessment);
    log::debug!(
        "classification produced {} result(s), score {}",
        classification.results.len(),
        classification.compliance_score
    );

    match config.output {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            JsonWriter::new(file).write_classification(&classification)?;
            log::info!("wrote classification to {}", path.display());
        }
        None => create_writer(config.format).write_classification(&classification)?,
    }
    Ok(())
}
