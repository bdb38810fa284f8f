//! Per-year cost streams for a vendor deployment: licensing every year,
//! one-time implementation items front-loaded into year 1, support and
//! maintenance ongoing.

use serde::{Deserialize, Serialize};

use crate::catalog::Vendor;
use crate::config::ScenarioConfig;

/// Loaded hourly rate for the IT staff doing routine maintenance. Distinct
/// from the admin rate in the benefit model, which prices security
/// administrators.
const MAINTENANCE_HOURLY_RATE: f64 = 85.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearCosts {
    pub year: u32,
    pub license: f64,
    pub hardware: f64,
    pub implementation: f64,
    pub services: f64,
    pub training: f64,
    pub support: f64,
    pub maintenance: f64,
    pub total: f64,
}

/// Aggregate cost totals by category over the whole horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub license: f64,
    pub hardware: f64,
    pub implementation: f64,
    pub services: f64,
    pub training: f64,
    pub support: f64,
    pub maintenance: f64,
    pub total: f64,
}

pub fn annual_license_cost(vendor: &Vendor, devices: u32) -> f64 {
    f64::from(devices) * vendor.licensing.price_per_device_monthly * 12.0
}

pub fn annual_maintenance_cost(vendor: &Vendor) -> f64 {
    vendor.costs.maintenance_hours_per_month * 12.0 * MAINTENANCE_HOURLY_RATE
}

fn hardware_cost(vendor: &Vendor, devices: u32) -> f64 {
    let per_1000 = vendor
        .costs
        .hardware_cost_per_1000_devices
        .map(|cost| (f64::from(devices) / 1000.0).ceil() * cost)
        .unwrap_or(0.0);
    per_1000 + vendor.costs.infrastructure_cost.unwrap_or(0.0)
}

fn training_cost(vendor: &Vendor, scenario: &ScenarioConfig) -> f64 {
    // Admin training reaches the staff, not the whole user base.
    let trainees = f64::from(scenario.users).min((f64::from(scenario.devices) * 0.1).ceil());
    trainees * vendor.costs.training_cost_per_user
}

/// Build the year-by-year cost stream for years 1..=horizon.
pub fn cost_stream(vendor: &Vendor, scenario: &ScenarioConfig) -> Vec<YearCosts> {
    let license = annual_license_cost(vendor, scenario.devices);
    let maintenance = annual_maintenance_cost(vendor);
    let hardware = hardware_cost(vendor, scenario.devices);
    let services = vendor.costs.services_fraction * (license + hardware);
    let training = training_cost(vendor, scenario);
    let support = vendor.costs.support_fraction * license;

    (1..=scenario.years)
        .map(|year| {
            let first = year == 1;
            let year_hardware = if first { hardware } else { 0.0 };
            let year_implementation = if first {
                vendor.costs.implementation_cost
            } else {
                0.0
            };
            let year_services = if first { services } else { 0.0 };
            let year_training = if first { training } else { 0.0 };
            let year_support = if first { 0.0 } else { support };
            let total = license
                + year_hardware
                + year_implementation
                + year_services
                + year_training
                + year_support
                + maintenance;
            YearCosts {
                year,
                license,
                hardware: year_hardware,
                implementation: year_implementation,
                services: year_services,
                training: year_training,
                support: year_support,
                maintenance,
                total,
            }
        })
        .collect()
}

/// One-time year-1 spend: what payback has to recover.
pub fn initial_investment(stream: &[YearCosts]) -> f64 {
    stream
        .first()
        .map(|y| y.hardware + y.implementation + y.services + y.training)
        .unwrap_or(0.0)
}

pub fn breakdown(stream: &[YearCosts]) -> CostBreakdown {
    let mut b = CostBreakdown {
        license: 0.0,
        hardware: 0.0,
        implementation: 0.0,
        services: 0.0,
        training: 0.0,
        support: 0.0,
        maintenance: 0.0,
        total: 0.0,
    };
    for year in stream {
        b.license += year.license;
        b.hardware += year.hardware;
        b.implementation += year.implementation;
        b.services += year.services;
        b.training += year.training;
        b.support += year.support;
        b.maintenance += year.maintenance;
        b.total += year.total;
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CostModel, LicensingTier, MarketPosition, VendorCategory};
    use std::collections::BTreeMap;

    fn appliance_vendor() -> Vendor {
        Vendor {
            id: "appliance".into(),
            name: "Appliance NAC".into(),
            category: VendorCategory::Enterprise,
            position: MarketPosition::Leader,
            licensing: LicensingTier {
                name: "base".into(),
                price_per_device_monthly: 10.0,
            },
            costs: CostModel {
                implementation_cost: 150_000.0,
                hardware_cost_per_1000_devices: Some(60_000.0),
                infrastructure_cost: Some(20_000.0),
                services_fraction: 0.15,
                training_cost_per_user: 500.0,
                maintenance_hours_per_month: 40.0,
                support_fraction: 0.18,
                deployment_days: 120,
                fte_required: 1.5,
            },
            features: BTreeMap::new(),
        }
    }

    fn scenario() -> ScenarioConfig {
        ScenarioConfig {
            devices: 2500,
            users: 5000,
            years: 3,
            ..ScenarioConfig::default()
        }
    }

    #[test]
    fn one_time_costs_land_in_year_one_only() {
        let stream = cost_stream(&appliance_vendor(), &scenario());
        assert_eq!(stream.len(), 3);
        assert!(stream[0].hardware > 0.0);
        assert!(stream[0].implementation > 0.0);
        assert_eq!(stream[1].hardware, 0.0);
        assert_eq!(stream[2].implementation, 0.0);
    }

    #[test]
    fn support_starts_in_year_two() {
        let stream = cost_stream(&appliance_vendor(), &scenario());
        assert_eq!(stream[0].support, 0.0);
        assert!(stream[1].support > 0.0);
        assert_eq!(stream[1].support, stream[2].support);
    }

    #[test]
    fn hardware_units_round_up_per_thousand_devices() {
        let vendor = appliance_vendor();
        let stream = cost_stream(&vendor, &scenario());
        // 2500 devices => 3 units of 60K, plus 20K infrastructure
        assert_eq!(stream[0].hardware, 3.0 * 60_000.0 + 20_000.0);
    }

    #[test]
    fn initial_investment_excludes_recurring_costs() {
        let stream = cost_stream(&appliance_vendor(), &scenario());
        let initial = initial_investment(&stream);
        assert!(initial > 0.0);
        assert!(initial < stream[0].total);
        let y = &stream[0];
        assert_eq!(initial, y.hardware + y.implementation + y.services + y.training);
    }

    #[test]
    fn breakdown_totals_match_stream_totals() {
        let stream = cost_stream(&appliance_vendor(), &scenario());
        let b = breakdown(&stream);
        let stream_total: f64 = stream.iter().map(|y| y.total).sum();
        assert!((b.total - stream_total).abs() < 1e-6);
    }
}
