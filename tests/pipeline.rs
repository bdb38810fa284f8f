//! End-to-end pipeline tests against the bundled datasets.

use std::collections::BTreeMap;
use std::path::PathBuf;

use naclens::catalog::{
    load_catalog, Catalog, CostModel, LicensingTier, MarketPosition, Vendor, VendorCategory,
};
use naclens::comparison::{analyze_vendor, compare};
use naclens::config::ScenarioConfig;
use naclens::errors::AnalysisError;
use naclens::financial::{compute_cost_benefit, Roi};
use naclens::sensitivity::{run_monte_carlo, run_sensitivity};

fn shipped_catalog() -> Catalog {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    load_catalog(&dir).expect("bundled datasets must load")
}

fn healthcare_scenario() -> ScenarioConfig {
    ScenarioConfig {
        industry: "healthcare".to_string(),
        vendors: vec![
            "portnox".to_string(),
            "cisco-ise".to_string(),
            "aruba-clearpass".to_string(),
        ],
        ..ScenarioConfig::default()
    }
}

#[test]
fn shipped_catalog_loads_and_cross_references() {
    let catalog = shipped_catalog();
    assert!(catalog.vendor_count() >= 5);
    for id in ["healthcare", "financial", "government"] {
        let industry = catalog.industry(id).unwrap();
        for framework in &industry.frameworks {
            catalog.framework(framework).unwrap();
        }
        catalog.threat_model(&industry.threat_model).unwrap();
    }
}

#[test]
fn unknown_vendor_is_a_typed_error() {
    let catalog = shipped_catalog();
    let err = catalog.vendor("portnix").unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownVendor(id) if id == "portnix"));
}

#[test]
fn unknown_industry_is_a_typed_error() {
    let catalog = shipped_catalog();
    assert!(matches!(
        catalog.industry("hospitality").unwrap_err(),
        AnalysisError::UnknownIndustry(_)
    ));
}

#[test]
fn full_analysis_ranks_the_scenario_vendors() {
    let catalog = shipped_catalog();
    let scenario = healthcare_scenario();
    let industry = catalog.industry(&scenario.industry).unwrap();

    let outcomes: Vec<_> = scenario
        .vendors
        .iter()
        .map(|id| {
            let vendor = catalog.vendor(id).unwrap();
            analyze_vendor(&catalog, industry, vendor, &scenario).unwrap()
        })
        .collect();

    let comparison = compare(&outcomes).unwrap();
    assert_eq!(comparison.rankings.len(), 3);
    for ranked in &comparison.rankings {
        assert!(ranked.composite >= 0.0 && ranked.composite <= 100.0);
    }
    assert!(!comparison.recommendation.reasons.is_empty());

    // The cloud product is cheaper, covers more of the matrix and deploys in
    // days rather than months; it must outrank the heavyweight appliance.
    let position = |id: &str| {
        comparison
            .rankings
            .iter()
            .position(|r| r.vendor_id == id)
            .unwrap()
    };
    assert!(position("portnox") < position("cisco-ise"));
}

#[test]
fn scores_stay_in_range_for_every_vendor_and_framework() {
    let catalog = shipped_catalog();
    let scenario = healthcare_scenario();
    let industry = catalog.industry("healthcare").unwrap();

    for vendor in catalog.vendors() {
        let outcome = analyze_vendor(&catalog, industry, vendor, &scenario).unwrap();
        assert!((0.0..=100.0).contains(&outcome.coverage.overall), "{}", vendor.id);
        for (category, score) in &outcome.coverage.by_category {
            assert!((0.0..=100.0).contains(score), "{} / {category}", vendor.id);
        }
        for framework in &outcome.compliance.by_framework {
            assert!((0.0..=100.0).contains(&framework.score));
        }
        assert!(outcome.risk.residual_annual_loss <= outcome.risk.expected_annual_loss);
        assert!(outcome.risk.risk_reduction_value >= 0.0);
    }
}

#[test]
fn zero_cost_vendor_has_undefined_roi() {
    let catalog = shipped_catalog();
    let industry = catalog.industry("retail").unwrap();
    let free = Vendor {
        id: "free".into(),
        name: "Free NAC".into(),
        category: VendorCategory::OpenSource,
        position: MarketPosition::Niche,
        licensing: LicensingTier {
            name: "free".into(),
            price_per_device_monthly: 0.0,
        },
        costs: CostModel {
            implementation_cost: 0.0,
            hardware_cost_per_1000_devices: None,
            infrastructure_cost: None,
            services_fraction: 0.0,
            training_cost_per_user: 0.0,
            maintenance_hours_per_month: 0.0,
            support_fraction: 0.0,
            deployment_days: 1,
            fte_required: 0.0,
        },
        features: BTreeMap::new(),
    };
    let result = compute_cost_benefit(&free, industry, &ScenarioConfig::default());
    assert_eq!(result.roi, Roi::Undefined);
    assert_eq!(result.total_cost(), 0.0);
}

#[test]
fn sensitivity_and_simulation_run_on_shipped_data() {
    let catalog = shipped_catalog();
    let scenario = healthcare_scenario();
    let industry = catalog.industry("healthcare").unwrap();
    let vendor = catalog.vendor("portnox").unwrap();

    let (sweeps, tornado) = run_sensitivity(vendor, industry, &scenario);
    assert_eq!(sweeps.len(), 5);
    assert_eq!(tornado.len(), 5);
    assert!(tornado[0].impact >= tornado[tornado.len() - 1].impact);

    let a = run_monte_carlo(vendor, industry, &scenario, 300, 99).unwrap();
    let b = run_monte_carlo(vendor, industry, &scenario, 300, 99).unwrap();
    assert_eq!(a.payback_months.p90, b.payback_months.p90);
    assert_eq!(a.never_count, b.never_count);
}
