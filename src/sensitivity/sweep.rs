//! Deterministic one-variable-at-a-time sweep and tornado ranking.

use serde::{Deserialize, Serialize};

use crate::catalog::{IndustryProfile, Vendor};
use crate::config::ScenarioConfig;
use crate::financial::{compute_cost_benefit, Payback};

use super::Variable;

pub const DEFAULT_STEP_PCT: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Percentage change from the base value.
    pub change_pct: i32,
    /// The (clamped) value actually used.
    pub value: f64,
    pub payback: Payback,
    pub annual_net: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableSweep {
    pub variable: Variable,
    pub base_value: f64,
    pub points: Vec<SweepPoint>,
}

/// Tornado row: the payback swing a single variable produces across its
/// sweep range. `hit_horizon` marks that at least one sweep point's payback
/// lies beyond the horizon (late or never), so the max is the horizon bound
/// rather than a real payback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TornadoRow {
    pub variable: Variable,
    pub min_months: f64,
    pub max_months: f64,
    pub impact: f64,
    pub hit_horizon: bool,
}

/// Sweep one variable over its percentage range, holding the rest at base.
pub fn sweep_variable(
    vendor: &Vendor,
    industry: &IndustryProfile,
    base: &ScenarioConfig,
    variable: Variable,
    step_pct: i32,
) -> VariableSweep {
    let base_value = variable.base_value(base);
    let (lo, hi) = variable.sweep_range();
    let step = step_pct.max(1);

    let mut points = Vec::new();
    let mut change = lo;
    while change <= hi {
        let target = base_value * (1.0 + f64::from(change) / 100.0);
        let mut scenario = base.clone();
        variable.apply(&mut scenario, target);
        let result = compute_cost_benefit(vendor, industry, &scenario);
        points.push(SweepPoint {
            change_pct: change,
            value: variable.base_value(&scenario),
            payback: result.payback,
            annual_net: result.net_monthly_benefit * 12.0,
        });
        change += step;
    }

    VariableSweep {
        variable,
        base_value,
        points,
    }
}

/// Rank variables by payback impact, descending.
pub fn tornado(sweeps: &[VariableSweep], horizon_months: f64) -> Vec<TornadoRow> {
    let mut rows: Vec<TornadoRow> = sweeps
        .iter()
        .filter(|s| !s.points.is_empty())
        .map(|s| {
            let months: Vec<f64> = s
                .points
                .iter()
                .map(|p| p.payback.months_or(horizon_months))
                .collect();
            let min_months = months.iter().copied().fold(f64::INFINITY, f64::min);
            let max_months = months.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let hit_horizon = s
                .points
                .iter()
                .any(|p| p.payback.exceeds_horizon(horizon_months));
            TornadoRow {
                variable: s.variable,
                min_months,
                max_months,
                impact: max_months - min_months,
                hit_horizon,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.impact.partial_cmp(&a.impact).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

/// Sweep every variable and rank them.
pub fn run_sensitivity(
    vendor: &Vendor,
    industry: &IndustryProfile,
    base: &ScenarioConfig,
) -> (Vec<VariableSweep>, Vec<TornadoRow>) {
    let sweeps: Vec<VariableSweep> = Variable::ALL
        .iter()
        .map(|v| sweep_variable(vendor, industry, base, *v, DEFAULT_STEP_PCT))
        .collect();
    let horizon_months = f64::from(base.years) * 12.0;
    let rows = tornado(&sweeps, horizon_months);
    (sweeps, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        CostModel, IndustryMultipliers, LicensingTier, MarketPosition, VendorCategory,
    };
    use std::collections::BTreeMap;

    fn vendor() -> Vendor {
        Vendor {
            id: "cloud".into(),
            name: "Cloud NAC".into(),
            category: VendorCategory::CloudNative,
            position: MarketPosition::Leader,
            licensing: LicensingTier {
                name: "base".into(),
                price_per_device_monthly: 5.0,
            },
            costs: CostModel {
                implementation_cost: 25_000.0,
                hardware_cost_per_1000_devices: None,
                infrastructure_cost: None,
                services_fraction: 0.0,
                training_cost_per_user: 0.0,
                maintenance_hours_per_month: 49.0,
                support_fraction: 0.0,
                deployment_days: 7,
                fte_required: 0.25,
            },
            features: BTreeMap::new(),
        }
    }

    fn industry() -> IndustryProfile {
        IndustryProfile {
            id: "healthcare".into(),
            name: "Healthcare".into(),
            avg_breach_cost: 3_860_000.0,
            breach_frequency: 0.28,
            security_spend_fraction: 0.09,
            nac_adoption_fraction: 0.6,
            violation_cost: 500_000.0,
            multipliers: IndustryMultipliers::default(),
            frameworks: vec![],
            threat_model: "baseline".into(),
        }
    }

    #[test]
    fn sweep_covers_the_declared_range() {
        let base = ScenarioConfig::default();
        let sweep = sweep_variable(&vendor(), &industry(), &base, Variable::BreachRisk, 10);
        assert_eq!(sweep.points.first().unwrap().change_pct, -50);
        assert_eq!(sweep.points.last().unwrap().change_pct, 50);
        assert_eq!(sweep.points.len(), 11);
    }

    #[test]
    fn sweep_is_deterministic() {
        let base = ScenarioConfig::default();
        let a = sweep_variable(&vendor(), &industry(), &base, Variable::AdminHours, 10);
        let b = sweep_variable(&vendor(), &industry(), &base, Variable::AdminHours, 10);
        for (pa, pb) in a.points.iter().zip(b.points.iter()) {
            assert_eq!(pa.payback, pb.payback);
            assert_eq!(pa.annual_net, pb.annual_net);
        }
    }

    #[test]
    fn finite_payback_beyond_the_horizon_is_flagged() {
        // A 90-month payback at a 36-month horizon is bounded to 36 for the
        // swing but must not render as a real 36-month payback.
        let point = |months: f64| SweepPoint {
            change_pct: 0,
            value: 0.0,
            payback: Payback::Months(months),
            annual_net: 0.0,
        };
        let sweep = VariableSweep {
            variable: Variable::Devices,
            base_value: 1000.0,
            points: vec![point(8.0), point(90.0)],
        };
        let rows = tornado(&[sweep], 36.0);
        assert_eq!(rows[0].max_months, 36.0);
        assert!(rows[0].hit_horizon);
    }

    #[test]
    fn payback_inside_the_horizon_is_not_flagged() {
        // The cloud vendor pays back in under a year everywhere across the
        // breach-risk sweep, so the bound never kicks in.
        let base = ScenarioConfig::default();
        let sweep = sweep_variable(&vendor(), &industry(), &base, Variable::BreachRisk, 10);
        assert!(sweep.points.iter().all(|p| !p.payback.exceeds_horizon(36.0)));
        let rows = tornado(&[sweep], 36.0);
        assert!(!rows[0].hit_horizon);
    }

    #[test]
    fn tornado_impact_is_non_negative_and_sorted() {
        let base = ScenarioConfig::default();
        let (sweeps, rows) = run_sensitivity(&vendor(), &industry(), &base);
        assert_eq!(sweeps.len(), Variable::ALL.len());
        assert_eq!(rows.len(), Variable::ALL.len());
        for row in &rows {
            assert!(row.impact >= 0.0, "{:?} impact negative", row.variable);
            assert!(row.min_months <= row.max_months);
        }
        for pair in rows.windows(2) {
            assert!(pair[0].impact >= pair[1].impact);
        }
    }
}
