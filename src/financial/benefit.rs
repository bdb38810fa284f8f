//! Per-year benefit streams: breach prevention, operational savings,
//! compliance savings and downtime reduction.
//!
//! Dollar figures come from the industry profile; probabilities and effort
//! figures from the scenario; mitigation fractions from the overridable
//! assumptions. The industry multipliers let a profile skew a category
//! without editing its base dollar amounts.

use serde::{Deserialize, Serialize};

use crate::catalog::IndustryProfile;
use crate::config::ScenarioConfig;

const WEEKS_PER_YEAR: f64 = 52.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearBenefits {
    pub year: u32,
    pub breach_prevention: f64,
    pub operational: f64,
    pub compliance: f64,
    pub downtime: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitBreakdown {
    pub breach_prevention: f64,
    pub operational: f64,
    pub compliance: f64,
    pub downtime: f64,
    pub total: f64,
}

/// Annual benefit by category; identical every year of the horizon.
pub fn annual_benefits(industry: &IndustryProfile, scenario: &ScenarioConfig) -> YearBenefits {
    let a = &scenario.assumptions;
    let m = &industry.multipliers;

    let breach_prevention = industry.avg_breach_cost
        * m.risk
        * (scenario.breach_risk_pct / 100.0)
        * a.breach_mitigation;

    let operational = scenario.admin_hours_per_week
        * WEEKS_PER_YEAR
        * a.admin_hourly_rate
        * a.admin_hour_reduction;

    let compliance = industry.violation_cost
        * m.compliance
        * (scenario.compliance_violation_risk_pct / 100.0)
        * a.compliance_mitigation;

    let downtime = scenario.downtime_cost_per_hour
        * a.annual_downtime_hours
        * a.downtime_reduction
        * m.downtime;

    YearBenefits {
        year: 0,
        breach_prevention,
        operational,
        compliance,
        downtime,
        total: breach_prevention + operational + compliance + downtime,
    }
}

pub fn benefit_stream(industry: &IndustryProfile, scenario: &ScenarioConfig) -> Vec<YearBenefits> {
    let annual = annual_benefits(industry, scenario);
    (1..=scenario.years)
        .map(|year| YearBenefits { year, ..annual.clone() })
        .collect()
}

pub fn breakdown(stream: &[YearBenefits]) -> BenefitBreakdown {
    let mut b = BenefitBreakdown {
        breach_prevention: 0.0,
        operational: 0.0,
        compliance: 0.0,
        downtime: 0.0,
        total: 0.0,
    };
    for year in stream {
        b.breach_prevention += year.breach_prevention;
        b.operational += year.operational;
        b.compliance += year.compliance;
        b.downtime += year.downtime;
        b.total += year.total;
    }
    b
}
