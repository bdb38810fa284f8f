use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::io::{writer_for, OutputFormat, SweepReport};
use crate::sensitivity::{sweep_variable, tornado, Variable};

pub struct SweepConfig {
    pub scenario: PathBuf,
    pub data_dir: PathBuf,
    pub vendor: String,
    pub format: OutputFormat,
    pub step_pct: i32,
}

pub fn sweep(config: SweepConfig) -> Result<()> {
    let (catalog, scenario) = super::load_inputs(&config.scenario, &config.data_dir)?;
    let industry = catalog.industry(&scenario.industry)?;
    let vendor = catalog.vendor(&config.vendor)?;

    log::info!("sweeping {} variables for {}", Variable::ALL.len(), vendor.id);

    let sweeps: Vec<_> = Variable::ALL
        .iter()
        .map(|v| sweep_variable(vendor, industry, &scenario, *v, config.step_pct))
        .collect();
    let horizon_months = f64::from(scenario.years) * 12.0;
    let rows = tornado(&sweeps, horizon_months);

    let report = SweepReport {
        generated_at: Utc::now(),
        vendor_id: vendor.id.clone(),
        vendor_name: vendor.name.clone(),
        horizon_months,
        sweeps,
        tornado: rows,
    };

    writer_for(config.format).write_sweep(&report)
}
