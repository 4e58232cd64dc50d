use crate::certification::CertificationInputs;
use crate::config;
use crate::io::envelope::CertificationResponse;
use crate::io::output::{create_writer, JsonWriter, OutputFormat, OutputWriter};
use anyhow::Result;
use std::path::PathBuf;

pub struct GradeConfig {
    pub input: Option<PathBuf>,
    pub total: Option<usize>,
    pub completed: Option<usize>,
    pub sdk_connected: bool,
    pub hitl_rules: Option<usize>,
    pub open_incidents: Option<usize>,
    pub recent_events: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl GradeConfig {
    /// Resolve the grading snapshot: start from the input file when given,
    /// then let explicit flags override individual fields.
    fn resolve_inputs(&self) -> Result<CertificationInputs> {
        let mut inputs = match &self.input {
            Some(_) => {
                let raw = super::read_input(self.input.as_ref())?;
                serde_json::from_str(&raw).map_err(crate::errors::ProtectronError::from)?
            }
            None => CertificationInputs::default(),
        };

        if let Some(total) = self.total {
            inputs.total_requirements = total;
        }
        if let Some(completed) = self.completed {
            inputs.completed_requirements = completed;
        }
        if self.sdk_connected {
            inputs.sdk_connected = true;
        }
        if let Some(hitl) = self.hitl_rules {
            inputs.hitl_rules_active = hitl;
        }
        if let Some(incidents) = self.open_incidents {
            inputs.open_incidents = incidents;
        }
        if let Some(events) = self.recent_events {
            inputs.recent_events = events;
        }
        Ok(inputs)
    }
}

pub fn run_grade(config: GradeConfig) -> Result<()> {
    let inputs = config.resolve_inputs()?;
    if inputs.completed_requirements > inputs.total_requirements {
        log::warn!(
            "completed requirements ({}) exceed total ({}); snapshot is inconsistent",
            inputs.completed_requirements,
            inputs.total_requirements
        );
    }

    let grade = config::grader().grade(&inputs);
    log::info!(
        "graded system: final score {}, level {}",
        grade.final_score,
        grade.certification_level.as_str()
    );

    let response = CertificationResponse::new(&inputs, &grade);
    match config.output {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            JsonWriter::new(file).write_certification(&inputs, &response)?;
            log::info!("wrote grade to {}", path.display());
        }
        None => create_writer(config.format).write_certification(&inputs, &response)?,
    }
    Ok(())
}
