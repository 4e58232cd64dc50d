use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "protectron")]
#[command(about = "EU AI Act risk classification and certification grading", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an intake assessment into EU AI Act risk tiers
    Classify {
        /// Assessment JSON file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout, always JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Grade a monitored system for certification
    Grade {
        /// Certification inputs JSON file; flags below override its fields
        input: Option<PathBuf>,

        /// Total mapped requirements
        #[arg(long)]
        total: Option<usize>,

        /// Completed requirements
        #[arg(long)]
        completed: Option<usize>,

        /// The system has recently reported telemetry via the SDK
        #[arg(long = "sdk-connected")]
        sdk_connected: bool,

        /// Number of active human-in-the-loop rules
        #[arg(long = "hitl-rules")]
        hitl_rules: Option<usize>,

        /// Number of open incidents
        #[arg(long = "open-incidents")]
        open_incidents: Option<usize>,

        /// Logged events in the recent window
        #[arg(long = "recent-events")]
        recent_events: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout, always JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bucket an already-issued certificate's score into a display tier
    Verify {
        /// Score recorded on the certificate
        score: f64,
    },

    /// Create a protectron.toml configuration file with default values
    Init {
        /// Force overwrite existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
