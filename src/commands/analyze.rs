use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::comparison::{analyze_vendor, compare, VendorOutcome};
use crate::errors::AnalysisError;
use crate::io::{writer_for, AnalysisReport, OutputFormat};

pub struct AnalyzeConfig {
    pub scenario: PathBuf,
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    /// Overrides the scenario's vendor list when present.
    pub vendors: Option<Vec<String>>,
}

pub fn analyze(config: AnalyzeConfig) -> Result<()> {
    let (catalog, scenario) = super::load_inputs(&config.scenario, &config.data_dir)?;
    let industry = catalog.industry(&scenario.industry)?;

    let vendor_ids: Vec<String> = match config.vendors {
        Some(ids) if !ids.is_empty() => ids,
        _ if !scenario.vendors.is_empty() => scenario.vendors.clone(),
        // No explicit selection anywhere: compare the whole catalog.
        _ => catalog.vendor_ids().map(String::from).collect(),
    };
    if vendor_ids.is_empty() {
        return Err(AnalysisError::validation("no vendors to analyze").into());
    }

    log::info!(
        "analyzing {} vendors for industry {}",
        vendor_ids.len(),
        industry.id
    );

    let mut outcomes: Vec<VendorOutcome> = Vec::with_capacity(vendor_ids.len());
    for id in &vendor_ids {
        let vendor = catalog.vendor(id)?;
        outcomes.push(analyze_vendor(&catalog, industry, vendor, &scenario)?);
    }

    let comparison = compare(&outcomes)?;
    let report = AnalysisReport {
        generated_at: Utc::now(),
        industry_id: industry.id.clone(),
        industry_name: industry.name.clone(),
        scenario,
        outcomes: outcomes.into_iter().collect(),
        comparison,
    };

    writer_for(config.format).write_analysis(&report)
}
