//! Sensitivity analysis over the cost/benefit model: deterministic
//! one-variable sweeps with tornado ranking, and a seeded Monte Carlo
//! sampler perturbing every variable at once.

pub mod monte_carlo;
pub mod sweep;

use serde::{Deserialize, Serialize};

pub use monte_carlo::{run_monte_carlo, DistributionStats, MonteCarloSummary};
pub use sweep::{run_sensitivity, sweep_variable, tornado, SweepPoint, TornadoRow, VariableSweep};

use crate::config::ScenarioConfig;

/// The scenario inputs worth perturbing. Each carries its own sweep range
/// and hard bounds; a perturbed value is clamped, never allowed to leave the
/// domain the formulas were calibrated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variable {
    Devices,
    BreachRisk,
    AdminHours,
    DowntimeCost,
    ComplianceRisk,
}

impl Variable {
    pub const ALL: [Variable; 5] = [
        Variable::Devices,
        Variable::BreachRisk,
        Variable::AdminHours,
        Variable::DowntimeCost,
        Variable::ComplianceRisk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Variable::Devices => "Device Count",
            Variable::BreachRisk => "Breach Risk",
            Variable::AdminHours => "Admin Hours",
            Variable::DowntimeCost => "Downtime Cost",
            Variable::ComplianceRisk => "Compliance Risk",
        }
    }

    pub fn base_value(&self, scenario: &ScenarioConfig) -> f64 {
        match self {
            Variable::Devices => f64::from(scenario.devices),
            Variable::BreachRisk => scenario.breach_risk_pct,
            Variable::AdminHours => scenario.admin_hours_per_week,
            Variable::DowntimeCost => scenario.downtime_cost_per_hour,
            Variable::ComplianceRisk => scenario.compliance_violation_risk_pct,
        }
    }

    /// Hard bounds a perturbed value is clamped to.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Variable::Devices => (100.0, 10_000.0),
            Variable::BreachRisk => (1.0, 50.0),
            Variable::AdminHours => (10.0, 80.0),
            Variable::DowntimeCost => (10_000.0, 200_000.0),
            Variable::ComplianceRisk => (1.0, 50.0),
        }
    }

    /// Percentage sweep range for the tornado analysis.
    pub fn sweep_range(&self) -> (i32, i32) {
        match self {
            Variable::Devices => (-50, 200),
            Variable::BreachRisk => (-50, 50),
            Variable::AdminHours => (-50, 100),
            Variable::DowntimeCost => (-50, 100),
            Variable::ComplianceRisk => (-50, 50),
        }
    }

    /// Uniform multiplier range and clamp for Monte Carlo sampling.
    pub fn monte_carlo_bounds(&self) -> (f64, f64, Option<(f64, f64)>) {
        match self {
            Variable::Devices => (0.8, 1.2, None),
            Variable::BreachRisk => (0.7, 1.3, Some((5.0, 30.0))),
            Variable::AdminHours => (0.8, 1.2, Some((20.0, 60.0))),
            Variable::DowntimeCost => (0.6, 1.4, None),
            Variable::ComplianceRisk => (0.7, 1.3, Some((10.0, 40.0))),
        }
    }

    /// Write `value` into a scenario copy, clamped to the variable's bounds.
    pub fn apply(&self, scenario: &mut ScenarioConfig, value: f64) {
        let (lo, hi) = self.bounds();
        let clamped = value.clamp(lo, hi);
        match self {
            Variable::Devices => scenario.devices = clamped.round() as u32,
            Variable::BreachRisk => scenario.breach_risk_pct = clamped,
            Variable::AdminHours => scenario.admin_hours_per_week = clamped,
            Variable::DowntimeCost => scenario.downtime_cost_per_hour = clamped,
            Variable::ComplianceRisk => scenario.compliance_violation_risk_pct = clamped,
        }
    }
}
