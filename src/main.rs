use anyhow::Result;
use clap::Parser;
use protectron::cli::{Cli, Commands};
use protectron::commands::{self, ClassifyConfig, GradeConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            input,
            format,
            output,
        } => commands::run_classify(ClassifyConfig {
            input,
            format: format.into(),
            output,
        }),
        Commands::Grade {
            input,
            total,
            completed,
            sdk_connected,
            hitl_rules,
            open_incidents,
            recent_events,
            format,
            output,
        } => commands::run_grade(GradeConfig {
            input,
            total,
            completed,
            sdk_connected,
            hitl_rules,
            open_incidents,
            recent_events,
            format: format.into(),
            output,
        }),
        Commands::Verify { score } => commands::run_verify(score),
        Commands::Init { force } => commands::init_config(force),
    }
}
