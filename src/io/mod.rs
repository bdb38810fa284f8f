//! Report assembly and output: one report type per command, rendered to
//! JSON, Markdown or the terminal.

pub mod output;
pub mod terminal;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::comparison::{Comparison, VendorOutcome};
use crate::config::ScenarioConfig;
use crate::sensitivity::{MonteCarloSummary, TornadoRow, VariableSweep};

pub use output::{JsonWriter, MarkdownWriter};
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub industry_id: String,
    pub industry_name: String,
    pub scenario: ScenarioConfig,
    pub outcomes: Vector<VendorOutcome>,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub generated_at: DateTime<Utc>,
    pub vendor_id: String,
    pub vendor_name: String,
    pub horizon_months: f64,
    pub sweeps: Vec<VariableSweep>,
    pub tornado: Vec<TornadoRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub generated_at: DateTime<Utc>,
    pub vendor_id: String,
    pub vendor_name: String,
    pub summary: MonteCarloSummary,
}

pub trait ReportWriter {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
    fn write_sweep(&mut self, report: &SweepReport) -> anyhow::Result<()>;
    fn write_simulation(&mut self, report: &SimulationReport) -> anyhow::Result<()>;
}

/// Writer for the requested format, targeting stdout.
pub fn writer_for(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
