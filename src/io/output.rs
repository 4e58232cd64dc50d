use crate::certification::{CertificationInputs, CertificationLevel, CertificationStatus};
use crate::formatting::{colored_score, score_label};
use crate::io::envelope::CertificationResponse;
use crate::risk::RiskClassification;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_classification(&mut self, classification: &RiskClassification)
        -> anyhow::Result<()>;
    fn write_certification(
        &mut self,
        inputs: &CertificationInputs,
        response: &CertificationResponse,
    ) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_classification(
        &mut self,
        classification: &RiskClassification,
    ) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(classification)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_certification(
        &mut self,
        _inputs: &CertificationInputs,
        response: &CertificationResponse,
    ) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(response)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_classification(
        &mut self,
        classification: &RiskClassification,
    ) -> anyhow::Result<()> {
        print_header("Risk Classification");

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Tier", "Triggers", "Obligation"]);
        for result in &classification.results {
            table.add_row(vec![
                Cell::new(&result.label),
                Cell::new(result.count),
                Cell::new(&result.description),
            ]);
        }
        println!("{table}");
        println!();

        let score = classification.compliance_score as f64;
        println!(
            "  Compliance score: {}/100 ({})",
            colored_score(score),
            score_label(score)
        );
        println!(
            "  EU exposure: {}",
            if classification.has_eu_exposure {
                "yes".yellow()
            } else {
                "no".green()
            }
        );
        println!("  Declared systems: {}", classification.total_systems);
        println!();
        Ok(())
    }

    fn write_certification(
        &mut self,
        inputs: &CertificationInputs,
        response: &CertificationResponse,
    ) -> anyhow::Result<()> {
        print_header("Certification Grade");

        let data = &response.data;
        println!(
            "  Requirements: {}/{} completed ({}%)",
            data.requirements.completed, data.requirements.total, data.requirements.percentage
        );
        print_check("SDK connected", data.checks.sdk_connected);
        print_check("HITL rules active", data.checks.hitl_rules_active);
        print_check("No open incidents", data.checks.no_open_incidents);
        print_check("Logging active", data.checks.logging_active);
        if !data.checks.no_open_incidents {
            println!("    open incidents: {}", inputs.open_incidents);
        }
        println!();
        println!(
            "  Final score: {}/100 (+{} bonus, {})",
            colored_score(data.compliance_score),
            data.bonus_points,
            score_label(data.compliance_score)
        );
        println!("  Certification: {}", tier_display(data.certification_level));
        if data.certification_status == CertificationStatus::NotCertified
            && !data.checks.sdk_connected
        {
            println!(
                "  {}",
                "Connect the monitoring SDK to become eligible for certification.".yellow()
            );
        }
        println!();
        Ok(())
    }
}

fn print_header(title: &str) {
    println!("{}", format!("Protectron {title}").bold().blue());
    println!(
        "{}",
        chrono::Utc::now()
            .format("Generated %Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .dimmed()
    );
    println!();
}

fn print_check(name: &str, ok: bool) {
    let mark = if ok { "✓".green() } else { "✗".red() };
    println!("  {mark} {name}");
}

fn tier_display(level: CertificationLevel) -> ColoredString {
    match level {
        CertificationLevel::Gold => "GOLD".yellow().bold(),
        CertificationLevel::Silver => "SILVER".white().bold(),
        CertificationLevel::Bronze => "BRONZE".red().bold(),
        CertificationLevel::None => "not certified".dimmed(),
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
