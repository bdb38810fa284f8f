//! Scenario configuration: the user-supplied inputs a calculation runs on.
//!
//! Inputs are validated at this boundary with a reject policy; the financial
//! formulas never see a negative device count or a probability outside
//! [0, 100]. The `[assumptions]` block carries the benefit-model constants
//! so a scenario can override them without a rebuild.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};

/// Constants of the benefit model, overridable per scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Fraction of breach exposure a NAC deployment removes.
    #[serde(default = "default_breach_mitigation")]
    pub breach_mitigation: f64,
    /// Fraction of NAC admin hours automated away.
    #[serde(default = "default_admin_hour_reduction")]
    pub admin_hour_reduction: f64,
    /// Loaded hourly rate for network/security administrators, USD.
    #[serde(default = "default_admin_hourly_rate")]
    pub admin_hourly_rate: f64,
    /// Fraction of compliance-violation exposure removed.
    #[serde(default = "default_compliance_mitigation")]
    pub compliance_mitigation: f64,
    /// Fraction of network downtime avoided.
    #[serde(default = "default_downtime_reduction")]
    pub downtime_reduction: f64,
    /// Baseline network downtime per year, hours.
    #[serde(default = "default_annual_downtime_hours")]
    pub annual_downtime_hours: f64,
}

fn default_breach_mitigation() -> f64 {
    0.8
}
fn default_admin_hour_reduction() -> f64 {
    0.6
}
fn default_admin_hourly_rate() -> f64 {
    150.0
}
fn default_compliance_mitigation() -> f64 {
    0.7
}
fn default_downtime_reduction() -> f64 {
    0.5
}
fn default_annual_downtime_hours() -> f64 {
    48.0
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            breach_mitigation: default_breach_mitigation(),
            admin_hour_reduction: default_admin_hour_reduction(),
            admin_hourly_rate: default_admin_hourly_rate(),
            compliance_mitigation: default_compliance_mitigation(),
            downtime_reduction: default_downtime_reduction(),
            annual_downtime_hours: default_annual_downtime_hours(),
        }
    }
}

/// Root scenario structure, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub devices: u32,
    pub users: u32,
    pub industry: String,
    #[serde(default = "default_years")]
    pub years: u32,
    /// Annual cost of the incumbent NAC (or manual process) being replaced.
    #[serde(default = "default_current_annual_cost")]
    pub current_annual_cost: f64,
    /// Annual probability of a material breach, percent.
    #[serde(default = "default_breach_risk_pct")]
    pub breach_risk_pct: f64,
    /// NAC administration effort today, hours per week.
    #[serde(default = "default_admin_hours_per_week")]
    pub admin_hours_per_week: f64,
    /// Cost of network downtime, USD per hour.
    #[serde(default = "default_downtime_cost_per_hour")]
    pub downtime_cost_per_hour: f64,
    /// Annual probability of a compliance violation, percent.
    #[serde(default = "default_compliance_violation_risk_pct")]
    pub compliance_violation_risk_pct: f64,
    /// Vendors to evaluate; empty means every vendor in the catalog.
    #[serde(default)]
    pub vendors: Vec<String>,
    /// Discount rate for NPV, as a fraction.
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
    #[serde(default)]
    pub assumptions: Assumptions,
}

fn default_years() -> u32 {
    3
}
fn default_current_annual_cost() -> f64 {
    150_000.0
}
fn default_breach_risk_pct() -> f64 {
    15.0
}
fn default_admin_hours_per_week() -> f64 {
    40.0
}
fn default_downtime_cost_per_hour() -> f64 {
    50_000.0
}
fn default_compliance_violation_risk_pct() -> f64 {
    25.0
}
fn default_discount_rate() -> f64 {
    0.10
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            devices: 1000,
            users: 2000,
            industry: "healthcare".to_string(),
            years: default_years(),
            current_annual_cost: default_current_annual_cost(),
            breach_risk_pct: default_breach_risk_pct(),
            admin_hours_per_week: default_admin_hours_per_week(),
            downtime_cost_per_hour: default_downtime_cost_per_hour(),
            compliance_violation_risk_pct: default_compliance_violation_risk_pct(),
            vendors: Vec::new(),
            discount_rate: default_discount_rate(),
            assumptions: Assumptions::default(),
        }
    }
}

// Pure validation helpers, collected so a bad file reports every problem at
// once instead of the first one.

fn validate_percentage(value: f64, name: &str) -> std::result::Result<(), String> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be between 0 and 100, got {value}"))
    }
}

fn validate_fraction(value: f64, name: &str) -> std::result::Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be between 0.0 and 1.0, got {value}"))
    }
}

fn validate_non_negative(value: f64, name: &str) -> std::result::Result<(), String> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be non-negative, got {value}"))
    }
}

impl ScenarioConfig {
    pub fn collect_validations(&self) -> Vec<std::result::Result<(), String>> {
        let a = &self.assumptions;
        vec![
            if self.devices >= 1 {
                Ok(())
            } else {
                Err("devices must be at least 1".to_string())
            },
            if (1..=10).contains(&self.years) {
                Ok(())
            } else {
                Err(format!("years must be between 1 and 10, got {}", self.years))
            },
            validate_percentage(self.breach_risk_pct, "breach_risk_pct"),
            validate_percentage(
                self.compliance_violation_risk_pct,
                "compliance_violation_risk_pct",
            ),
            validate_non_negative(self.admin_hours_per_week, "admin_hours_per_week"),
            validate_non_negative(self.downtime_cost_per_hour, "downtime_cost_per_hour"),
            validate_non_negative(self.current_annual_cost, "current_annual_cost"),
            if (0.0..1.0).contains(&self.discount_rate) {
                Ok(())
            } else {
                Err(format!(
                    "discount_rate must be within [0.0, 1.0), got {}",
                    self.discount_rate
                ))
            },
            validate_fraction(a.breach_mitigation, "assumptions.breach_mitigation"),
            validate_fraction(a.admin_hour_reduction, "assumptions.admin_hour_reduction"),
            validate_fraction(a.compliance_mitigation, "assumptions.compliance_mitigation"),
            validate_fraction(a.downtime_reduction, "assumptions.downtime_reduction"),
            validate_non_negative(a.admin_hourly_rate, "assumptions.admin_hourly_rate"),
            validate_non_negative(a.annual_downtime_hours, "assumptions.annual_downtime_hours"),
        ]
    }

    /// Reject out-of-range inputs with every violation listed.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .collect_validations()
            .into_iter()
            .filter_map(|r| r.err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AnalysisError::validation(errors.join("; ")))
        }
    }
}

/// Pure function to parse a scenario from TOML contents.
pub fn parse_scenario(contents: &str) -> Result<ScenarioConfig> {
    toml::from_str(contents).map_err(|e| AnalysisError::parse("scenario", e.to_string()))
}

/// Load and validate a scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file = fs::File::open(path).map_err(|e| AnalysisError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| AnalysisError::io(path, e))?;

    let scenario = parse_scenario(&contents)?;
    scenario.validate()?;
    log::debug!("Loaded scenario from {}", path.display());
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_scenario_fills_defaults() {
        let scenario = parse_scenario(indoc! {r#"
            devices = 1000
            users = 2000
            industry = "healthcare"
        "#})
        .unwrap();
        assert_eq!(scenario.years, 3);
        assert_eq!(scenario.breach_risk_pct, 15.0);
        assert_eq!(scenario.assumptions.breach_mitigation, 0.8);
        scenario.validate().unwrap();
    }

    #[test]
    fn rejects_out_of_range_inputs_with_all_violations() {
        let scenario = ScenarioConfig {
            devices: 0,
            breach_risk_pct: 130.0,
            discount_rate: 1.5,
            ..ScenarioConfig::default()
        };
        let err = scenario.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("devices"));
        assert!(message.contains("breach_risk_pct"));
        assert!(message.contains("discount_rate"));
    }

    #[test]
    fn scenario_round_trips_through_toml() {
        let scenario = ScenarioConfig {
            devices: 4321,
            users: 987,
            industry: "financial".to_string(),
            breach_risk_pct: 22.5,
            downtime_cost_per_hour: 75_500.25,
            vendors: vec!["portnox".to_string(), "cisco_ise".to_string()],
            ..ScenarioConfig::default()
        };
        let serialized = toml::to_string(&scenario).unwrap();
        let reparsed = parse_scenario(&serialized).unwrap();
        assert_eq!(scenario, reparsed);
    }
}
