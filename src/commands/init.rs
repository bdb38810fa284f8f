use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const SCENARIO_FILE: &str = "scenario.toml";

const STARTER_SCENARIO: &str = r#"# Analysis scenario: your environment and risk posture.

devices = 1000
users = 2000
industry = "healthcare"
years = 3

# What the incumbent approach costs per year (tools + staff time).
current_annual_cost = 150000.0

# Annual probability of a material breach, percent.
breach_risk_pct = 15.0

# Weekly hours spent on manual network-access administration.
admin_hours_per_week = 40.0

# Cost of one hour of network downtime.
downtime_cost_per_hour = 50000.0

# Annual probability of a compliance violation event, percent.
compliance_violation_risk_pct = 25.0

# Vendors to compare; empty means the whole catalog.
vendors = ["portnox", "cisco-ise", "aruba-clearpass"]

discount_rate = 0.10

# Uncomment to override the benefit assumptions.
# [assumptions]
# breach_mitigation = 0.8
# admin_hour_reduction = 0.6
# admin_hourly_rate = 150.0
# compliance_mitigation = 0.7
# downtime_reduction = 0.5
# annual_downtime_hours = 48.0
"#;

const STARTER_VENDORS: &str = include_str!("../../data/vendors.toml");
const STARTER_INDUSTRIES: &str = include_str!("../../data/industries.toml");
const STARTER_FRAMEWORKS: &str = include_str!("../../data/frameworks.toml");
const STARTER_THREATS: &str = include_str!("../../data/threats.toml");

/// Write a starter scenario and the bundled dataset into the current
/// directory.
pub fn init_workspace(force: bool) -> Result<()> {
    let scenario = Path::new(SCENARIO_FILE);
    if scenario.exists() && !force {
        anyhow::bail!("scenario.toml already exists. Use --force to overwrite.");
    }

    let data_dir = Path::new("data");
    fs::create_dir_all(data_dir).context("creating data directory")?;

    let files: [(&Path, &str); 5] = [
        (scenario, STARTER_SCENARIO),
        (&data_dir.join("vendors.toml"), STARTER_VENDORS),
        (&data_dir.join("industries.toml"), STARTER_INDUSTRIES),
        (&data_dir.join("frameworks.toml"), STARTER_FRAMEWORKS),
        (&data_dir.join("threats.toml"), STARTER_THREATS),
    ];
    for (path, contents) in files {
        if path.exists() && !force {
            anyhow::bail!("{} already exists. Use --force to overwrite.", path.display());
        }
        fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
        println!("Created {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::parse_scenario;

    #[test]
    fn starter_scenario_parses_and_validates() {
        let scenario = parse_scenario(super::STARTER_SCENARIO).unwrap();
        scenario.validate().unwrap();
        assert_eq!(scenario.devices, 1000);
        assert_eq!(scenario.industry, "healthcare");
        assert_eq!(scenario.vendors.len(), 3);
    }

    #[test]
    fn bundled_datasets_assemble_into_a_catalog() {
        use crate::catalog::{loader, Catalog};

        let catalog = Catalog::assemble(
            loader::parse_vendors(super::STARTER_VENDORS).unwrap(),
            loader::parse_industries(super::STARTER_INDUSTRIES).unwrap(),
            loader::parse_frameworks(super::STARTER_FRAMEWORKS).unwrap(),
            loader::parse_threats(super::STARTER_THREATS).unwrap(),
        )
        .unwrap();

        assert_eq!(catalog.vendor_count(), 6);
        assert_eq!(catalog.industry_count(), 6);
        assert!(catalog.framework_count() >= 5);
        assert_eq!(catalog.threat_model_count(), 3);
    }
}
