//! Cost/benefit calculation: the one shared computation the ROI view, the
//! sensitivity sweep and the Monte Carlo sampler all run on. Pure function
//! of (vendor, industry, scenario); no ambient lookups, no shared state.

pub mod benefit;
pub mod cost;
pub mod metrics;

use serde::{Deserialize, Serialize};

pub use benefit::{BenefitBreakdown, YearBenefits};
pub use cost::{CostBreakdown, YearCosts};
pub use metrics::{Payback, Roi};

use crate::catalog::{IndustryProfile, Vendor};
use crate::config::ScenarioConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBenefit {
    pub vendor_id: String,
    pub costs_by_year: Vec<YearCosts>,
    pub benefits_by_year: Vec<YearBenefits>,
    /// Benefit minus cost per year, aligned with the streams.
    pub net_by_year: Vec<f64>,
    pub cost_breakdown: CostBreakdown,
    pub benefit_breakdown: BenefitBreakdown,
    /// One-time year-1 spend recovered by payback.
    pub initial_investment: f64,
    /// Recurring run cost per month (license + maintenance).
    pub monthly_recurring_cost: f64,
    pub monthly_benefit: f64,
    pub net_monthly_benefit: f64,
    /// What the incumbent would have cost over the horizon.
    pub baseline_total: f64,
    pub roi: Roi,
    pub payback: Payback,
    pub npv: f64,
}

impl CostBenefit {
    pub fn total_cost(&self) -> f64 {
        self.cost_breakdown.total
    }

    pub fn total_benefit(&self) -> f64 {
        self.benefit_breakdown.total
    }

    pub fn horizon_months(&self) -> f64 {
        self.costs_by_year.len() as f64 * 12.0
    }
}

/// Compute the full cost/benefit picture for one vendor under one scenario.
///
/// The scenario is expected to be validated at the input boundary; this
/// function is also invoked with perturbed copies by the sensitivity layer,
/// which clamps its perturbations to the documented variable bounds.
pub fn compute_cost_benefit(
    vendor: &Vendor,
    industry: &IndustryProfile,
    scenario: &ScenarioConfig,
) -> CostBenefit {
    let costs_by_year = cost::cost_stream(vendor, scenario);
    let benefits_by_year = benefit::benefit_stream(industry, scenario);

    let net_by_year: Vec<f64> = costs_by_year
        .iter()
        .zip(benefits_by_year.iter())
        .map(|(c, b)| b.total - c.total)
        .collect();

    let cost_breakdown = cost::breakdown(&costs_by_year);
    let benefit_breakdown = benefit::breakdown(&benefits_by_year);

    let initial_investment = cost::initial_investment(&costs_by_year);
    let monthly_recurring_cost = (cost::annual_license_cost(vendor, scenario.devices)
        + cost::annual_maintenance_cost(vendor))
        / 12.0;
    let monthly_benefit = benefit_breakdown.total / (scenario.years as f64 * 12.0);
    let net_monthly_benefit = monthly_benefit - monthly_recurring_cost;

    let baseline_total = scenario.current_annual_cost * f64::from(scenario.years);
    let roi = metrics::roi(benefit_breakdown.total, baseline_total, cost_breakdown.total);
    let payback = metrics::payback(initial_investment, net_monthly_benefit);
    let npv = metrics::npv(scenario.discount_rate, initial_investment, &net_by_year);

    CostBenefit {
        vendor_id: vendor.id.clone(),
        costs_by_year,
        benefits_by_year,
        net_by_year,
        cost_breakdown,
        benefit_breakdown,
        initial_investment,
        monthly_recurring_cost,
        monthly_benefit,
        net_monthly_benefit,
        baseline_total,
        roi,
        payback,
        npv,
    }
}
