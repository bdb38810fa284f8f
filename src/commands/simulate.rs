use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::io::{writer_for, OutputFormat, SimulationReport};
use crate::sensitivity::run_monte_carlo;

pub struct SimulateConfig {
    pub scenario: PathBuf,
    pub data_dir: PathBuf,
    pub vendor: String,
    pub format: OutputFormat,
    pub trials: u32,
    pub seed: u64,
}

pub fn simulate(config: SimulateConfig) -> Result<()> {
    let (catalog, scenario) = super::load_inputs(&config.scenario, &config.data_dir)?;
    let industry = catalog.industry(&scenario.industry)?;
    let vendor = catalog.vendor(&config.vendor)?;

    let summary = run_monte_carlo(vendor, industry, &scenario, config.trials, config.seed)?;

    let report = SimulationReport {
        generated_at: Utc::now(),
        vendor_id: vendor.id.clone(),
        vendor_name: vendor.name.clone(),
        summary,
    };

    writer_for(config.format).write_simulation(&report)
}
