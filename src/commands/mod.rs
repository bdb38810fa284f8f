pub mod analyze;
pub mod init;
pub mod simulate;
pub mod sweep;

use std::path::Path;

use anyhow::Result;

use crate::catalog::{load_catalog, Catalog};
use crate::config::{load_scenario, ScenarioConfig};

/// Load everything a command needs before it computes. `load_scenario`
/// already validates the scenario; only the catalog cross-check remains.
pub(crate) fn load_inputs(scenario_path: &Path, data_dir: &Path) -> Result<(Catalog, ScenarioConfig)> {
    let catalog = load_catalog(data_dir)?;
    let scenario = load_scenario(scenario_path)?;
    catalog.industry(&scenario.industry)?;
    Ok((catalog, scenario))
}
