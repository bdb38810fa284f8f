//! Multi-vendor comparison: run every requested vendor through the scoring
//! and financial pipeline, then rank them on a weighted composite of cost,
//! return, coverage and deployment speed.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, IndustryProfile, Vendor};
use crate::config::ScenarioConfig;
use crate::errors::{AnalysisError, Result};
use crate::financial::{compute_cost_benefit, CostBenefit};
use crate::scoring::{
    assess_threats, feature_coverage, industry_compliance, ComplianceSummary, CoverageScore,
    RiskAssessment,
};

/// Composite criterion weights. Cost dominates slightly; deployment speed
/// matters least but still separates cloud and appliance vendors.
const WEIGHT_COST: f64 = 0.30;
const WEIGHT_ROI: f64 = 0.25;
const WEIGHT_COVERAGE: f64 = 0.25;
const WEIGHT_DEPLOYMENT: f64 = 0.20;

/// Everything the pipeline produces for one vendor under one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorOutcome {
    pub vendor_id: String,
    pub vendor_name: String,
    pub coverage: CoverageScore,
    pub compliance: ComplianceSummary,
    pub risk: RiskAssessment,
    pub financial: CostBenefit,
    pub deployment_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedVendor {
    pub vendor_id: String,
    pub vendor_name: String,
    /// Weighted composite, 0-100. Higher is better.
    pub composite: f64,
    pub cost_score: f64,
    pub roi_score: f64,
    pub coverage_score: f64,
    pub deployment_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub vendor_id: String,
    pub vendor_name: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Sorted by composite score, best first.
    pub rankings: Vec<RankedVendor>,
    pub recommendation: Recommendation,
}

/// Run the full pipeline for one vendor. Threat mitigation is scaled by the
/// vendor's feature coverage, so a thin product claims less risk reduction
/// than a complete one.
pub fn analyze_vendor(
    catalog: &Catalog,
    industry: &IndustryProfile,
    vendor: &Vendor,
    scenario: &ScenarioConfig,
) -> Result<VendorOutcome> {
    let coverage = feature_coverage(catalog.features(), vendor)?;
    let compliance = industry_compliance(catalog, industry, vendor)?;
    let threat_model = catalog.threat_model(&industry.threat_model)?;
    let risk = assess_threats(threat_model, coverage.overall / 100.0)?;
    let financial = compute_cost_benefit(vendor, industry, scenario);

    Ok(VendorOutcome {
        vendor_id: vendor.id.clone(),
        vendor_name: vendor.name.clone(),
        coverage,
        compliance,
        risk,
        financial,
        deployment_days: vendor.costs.deployment_days,
    })
}

/// Min-max normalize `value` into [0, 1]. When every candidate has the same
/// value the criterion cannot separate them; everyone gets full marks.
fn normalize(value: f64, min: f64, max: f64, lower_is_better: bool) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 1.0;
    }
    let scaled = (value - min) / (max - min);
    if lower_is_better {
        1.0 - scaled
    } else {
        scaled
    }
}

/// ROI criterion score in [0, 1]. An `Undefined` ROI means zero total
/// investment with any benefit at all on top, which no finite percentage
/// beats; it takes the top score rather than being coerced to a number.
fn roi_score(outcome: &VendorOutcome, min: f64, max: f64) -> f64 {
    match outcome.financial.roi.as_percent() {
        Some(pct) => normalize(pct, min, max, false),
        None => 1.0,
    }
}

/// Rank outcomes and pick a recommendation. Requires at least one outcome.
pub fn compare(outcomes: &[VendorOutcome]) -> Result<Comparison> {
    if outcomes.is_empty() {
        return Err(AnalysisError::validation(
            "comparison requires at least one vendor",
        ));
    }

    let cost_min = fold_min(outcomes, |o| o.financial.total_cost());
    let cost_max = fold_max(outcomes, |o| o.financial.total_cost());
    // Min/max over the defined ROIs only; undefined ones are scored apart.
    let defined_roi: Vec<f64> = outcomes
        .iter()
        .filter_map(|o| o.financial.roi.as_percent())
        .collect();
    let roi_min = defined_roi.iter().copied().fold(f64::INFINITY, f64::min);
    let roi_max = defined_roi.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let cov_min = fold_min(outcomes, |o| o.coverage.overall);
    let cov_max = fold_max(outcomes, |o| o.coverage.overall);
    let dep_min = fold_min(outcomes, |o| f64::from(o.deployment_days));
    let dep_max = fold_max(outcomes, |o| f64::from(o.deployment_days));

    let mut rankings: Vec<RankedVendor> = outcomes
        .iter()
        .map(|o| {
            let cost_score = normalize(o.financial.total_cost(), cost_min, cost_max, true);
            let roi_score = roi_score(o, roi_min, roi_max);
            let coverage_score = normalize(o.coverage.overall, cov_min, cov_max, false);
            let deployment_score =
                normalize(f64::from(o.deployment_days), dep_min, dep_max, true);
            let composite = 100.0
                * (WEIGHT_COST * cost_score
                    + WEIGHT_ROI * roi_score
                    + WEIGHT_COVERAGE * coverage_score
                    + WEIGHT_DEPLOYMENT * deployment_score);
            RankedVendor {
                vendor_id: o.vendor_id.clone(),
                vendor_name: o.vendor_name.clone(),
                composite,
                cost_score: 100.0 * cost_score,
                roi_score: 100.0 * roi_score,
                coverage_score: 100.0 * coverage_score,
                deployment_score: 100.0 * deployment_score,
            }
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.composite
            .partial_cmp(&a.composite)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.vendor_id.cmp(&b.vendor_id))
    });

    let best = &rankings[0];
    // Rankings were built from outcomes, so the lookup cannot miss.
    let reasons = outcomes
        .iter()
        .find(|o| o.vendor_id == best.vendor_id)
        .map(|o| reasons_for(best, o))
        .unwrap_or_default();
    let recommendation = Recommendation {
        vendor_id: best.vendor_id.clone(),
        vendor_name: best.vendor_name.clone(),
        reasons,
    };

    Ok(Comparison {
        rankings,
        recommendation,
    })
}

fn reasons_for(ranked: &RankedVendor, outcome: &VendorOutcome) -> Vec<String> {
    let mut reasons = Vec::new();
    if ranked.cost_score >= 50.0 {
        reasons.push(format!(
            "Lowest-quartile total cost of ownership (${:.0} over the horizon)",
            outcome.financial.total_cost()
        ));
    }
    if let Some(pct) = outcome.financial.roi.as_percent() {
        if ranked.roi_score >= 50.0 {
            reasons.push(format!("Strong projected return ({pct:.0}% ROI)"));
        }
    }
    if ranked.coverage_score >= 50.0 {
        reasons.push(format!(
            "Broad feature coverage ({:.0}% of the weighted matrix)",
            outcome.coverage.overall
        ));
    }
    if ranked.deployment_score >= 50.0 {
        reasons.push(format!(
            "Fast deployment ({} days)",
            outcome.deployment_days
        ));
    }
    if reasons.is_empty() {
        reasons.push("Best balanced composite across cost, return, coverage and deployment".into());
    }
    reasons
}

fn fold_min(outcomes: &[VendorOutcome], f: impl Fn(&VendorOutcome) -> f64) -> f64 {
    outcomes.iter().map(f).fold(f64::INFINITY, f64::min)
}

fn fold_max(outcomes: &[VendorOutcome], f: impl Fn(&VendorOutcome) -> f64) -> f64 {
    outcomes.iter().map(f).fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financial::{BenefitBreakdown, CostBreakdown, Payback, Roi};
    use crate::scoring::ComplianceSummary;
    use std::collections::BTreeMap;

    fn outcome(id: &str, total_cost: f64, roi_pct: f64, coverage: f64, days: u32) -> VendorOutcome {
        VendorOutcome {
            vendor_id: id.into(),
            vendor_name: id.to_uppercase(),
            coverage: CoverageScore {
                overall: coverage,
                by_category: BTreeMap::new(),
                full_count: 0,
                feature_count: 0,
            },
            compliance: ComplianceSummary {
                by_framework: vec![],
                average: None,
            },
            risk: RiskAssessment {
                expected_annual_loss: 0.0,
                residual_annual_loss: 0.0,
                risk_reduction_value: 0.0,
                mitigation_pct: 0.0,
                by_category: vec![],
                critical_threats: 0,
                total_threats: 0,
            },
            financial: CostBenefit {
                vendor_id: id.into(),
                costs_by_year: vec![],
                benefits_by_year: vec![],
                net_by_year: vec![],
                cost_breakdown: CostBreakdown {
                    license: total_cost,
                    hardware: 0.0,
                    implementation: 0.0,
                    services: 0.0,
                    training: 0.0,
                    support: 0.0,
                    maintenance: 0.0,
                    total: total_cost,
                },
                benefit_breakdown: BenefitBreakdown {
                    breach_prevention: 0.0,
                    operational: 0.0,
                    compliance: 0.0,
                    downtime: 0.0,
                    total: 0.0,
                },
                initial_investment: 0.0,
                monthly_recurring_cost: 0.0,
                monthly_benefit: 0.0,
                net_monthly_benefit: 0.0,
                baseline_total: 0.0,
                roi: Roi::Percent(roi_pct),
                payback: Payback::Months(6.0),
                npv: 0.0,
            },
            deployment_days: days,
        }
    }

    #[test]
    fn empty_comparison_is_rejected() {
        assert!(matches!(
            compare(&[]),
            Err(AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn dominant_vendor_wins() {
        // Cheaper, better return, wider coverage, faster to deploy.
        let outcomes = vec![
            outcome("a", 100_000.0, 300.0, 90.0, 7),
            outcome("b", 400_000.0, 120.0, 60.0, 60),
        ];
        let comparison = compare(&outcomes).unwrap();
        assert_eq!(comparison.rankings[0].vendor_id, "a");
        assert_eq!(comparison.recommendation.vendor_id, "a");
        assert!(comparison.rankings[0].composite > comparison.rankings[1].composite);
    }

    #[test]
    fn single_vendor_gets_full_marks_everywhere() {
        let outcomes = vec![outcome("solo", 250_000.0, 150.0, 70.0, 30)];
        let comparison = compare(&outcomes).unwrap();
        assert_eq!(comparison.rankings[0].composite, 100.0);
    }

    #[test]
    fn ties_break_on_vendor_id() {
        let outcomes = vec![
            outcome("beta", 100_000.0, 200.0, 80.0, 10),
            outcome("alfa", 100_000.0, 200.0, 80.0, 10),
        ];
        let comparison = compare(&outcomes).unwrap();
        assert_eq!(comparison.rankings[0].vendor_id, "alfa");
    }

    #[test]
    fn undefined_roi_takes_the_top_roi_score() {
        // Same cost, coverage and deployment; only the ROI differs. A return
        // on zero investment beats any finite percentage, so the undefined
        // ROI must not be coerced to the bottom of the scale.
        let mut free = outcome("free", 100_000.0, 0.0, 80.0, 10);
        free.financial.roi = Roi::Undefined;
        let paid = outcome("paid", 100_000.0, 50.0, 80.0, 10);

        let comparison = compare(&[free, paid]).unwrap();
        let by_id = |id: &str| {
            comparison
                .rankings
                .iter()
                .find(|r| r.vendor_id == id)
                .unwrap()
        };
        assert_eq!(by_id("free").roi_score, 100.0);
        assert!(by_id("free").composite >= by_id("paid").composite);
        assert_eq!(comparison.rankings[0].vendor_id, "free");
    }

    #[test]
    fn all_undefined_rois_still_rank() {
        let mut a = outcome("a", 100_000.0, 0.0, 80.0, 10);
        a.financial.roi = Roi::Undefined;
        let mut b = outcome("b", 200_000.0, 0.0, 60.0, 30);
        b.financial.roi = Roi::Undefined;

        let comparison = compare(&[a, b]).unwrap();
        assert_eq!(comparison.rankings[0].vendor_id, "a");
        for ranked in &comparison.rankings {
            assert_eq!(ranked.roi_score, 100.0);
        }
    }

    #[test]
    fn rankings_are_sorted_descending() {
        let outcomes = vec![
            outcome("a", 300_000.0, 100.0, 50.0, 45),
            outcome("b", 150_000.0, 250.0, 85.0, 14),
            outcome("c", 500_000.0, 80.0, 95.0, 90),
        ];
        let comparison = compare(&outcomes).unwrap();
        for pair in comparison.rankings.windows(2) {
            assert!(pair[0].composite >= pair[1].composite);
        }
    }
}
