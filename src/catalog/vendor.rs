//! Vendor reference records: feature support matrices, licensing and cost
//! model factors. Loaded from `vendors.toml`, never mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VendorCategory {
    CloudNative,
    Enterprise,
    MidMarket,
    Sme,
    OpenSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketPosition {
    Leader,
    Challenger,
    Visionary,
    Niche,
}

/// Ordinal feature support scale. Absent entries in a support map are
/// treated as `None`; that default is applied once, in [`Vendor::support_for`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    #[default]
    None,
    Partial,
    Addon,
    Full,
}

impl SupportLevel {
    /// Fraction contributed to a weighted coverage score.
    /// `Addon` sits between partial and full: the capability exists but is
    /// licensed separately.
    pub fn fraction(self) -> f64 {
        match self {
            SupportLevel::Full => 1.0,
            SupportLevel::Addon => 0.75,
            SupportLevel::Partial => 0.5,
            SupportLevel::None => 0.0,
        }
    }
}

/// Importance of a feature when scoring coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

impl Importance {
    pub fn weight(self) -> f64 {
        match self {
            Importance::Critical => 3.0,
            Importance::High => 2.0,
            Importance::Medium => 1.0,
            Importance::Low => 0.5,
        }
    }
}

/// One row of the feature matrix: which category it belongs to and how much
/// it matters. Per-vendor support lives on [`Vendor::features`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub category: String,
    pub name: String,
    pub importance: Importance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicensingTier {
    pub name: String,
    /// List price per device per month, USD.
    pub price_per_device_monthly: f64,
}

/// Cost model factors beyond licensing. One-time items land in year 1 of the
/// cost stream; recurring items repeat every year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModel {
    pub implementation_cost: f64,
    /// Appliance cost per 1000 devices, when the product needs hardware.
    #[serde(default)]
    pub hardware_cost_per_1000_devices: Option<f64>,
    /// Flat infrastructure cost (servers, VMs) regardless of device count.
    #[serde(default)]
    pub infrastructure_cost: Option<f64>,
    /// Professional services as a fraction of first-year license + hardware.
    #[serde(default)]
    pub services_fraction: f64,
    pub training_cost_per_user: f64,
    pub maintenance_hours_per_month: f64,
    /// Vendor support contract, fraction of annual license, years 2+.
    #[serde(default)]
    pub support_fraction: f64,
    pub deployment_days: u32,
    /// Administrator FTE the product consumes in steady state.
    pub fte_required: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub category: VendorCategory,
    pub position: MarketPosition,
    pub licensing: LicensingTier,
    pub costs: CostModel,
    /// feature category -> feature name -> support level
    #[serde(default)]
    pub features: BTreeMap<String, BTreeMap<String, SupportLevel>>,
}

impl Vendor {
    /// Support level for a feature of a known vendor. A feature missing from
    /// the declared map is "known absent" and scores as `None`.
    pub fn support_for(&self, category: &str, feature: &str) -> SupportLevel {
        self.features
            .get(category)
            .and_then(|m| m.get(feature))
            .copied()
            .unwrap_or_default()
    }

    /// Best support level for a capability by name across all categories.
    /// Used when mapping compliance controls onto the feature matrix.
    pub fn capability_support(&self, feature: &str) -> SupportLevel {
        self.features
            .values()
            .filter_map(|m| m.get(feature))
            .copied()
            .max()
            .unwrap_or_default()
    }
}
