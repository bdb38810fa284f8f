//! Static reference datasets: the vendor feature matrix, industry benchmark
//! profiles, compliance frameworks and threat models.
//!
//! Everything here is immutable once loaded. Lookups distinguish "unknown
//! key" (a typed error) from "known record, absent field" (an explicit
//! default applied once at this boundary) so calculators never silently
//! score a typo'd vendor id as zero support.

pub mod compliance;
pub mod industry;
pub mod loader;
pub mod threat;
pub mod vendor;

use std::collections::BTreeMap;

use crate::errors::{AnalysisError, Result};
pub use compliance::{ComplianceFramework, Control, ControlTier};
pub use industry::{IndustryMultipliers, IndustryProfile};
pub use loader::load_catalog;
pub use threat::{Severity, Threat, ThreatCategory, ThreatModel};
pub use vendor::{
    CostModel, FeatureSpec, Importance, LicensingTier, MarketPosition, SupportLevel, Vendor,
    VendorCategory,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    features: Vec<FeatureSpec>,
    vendors: BTreeMap<String, Vendor>,
    industries: BTreeMap<String, IndustryProfile>,
    frameworks: BTreeMap<String, ComplianceFramework>,
    threat_models: BTreeMap<String, ThreatModel>,
}

impl Catalog {
    /// Assemble a catalog from parsed dataset files, checking id uniqueness,
    /// value ranges and cross-references. Bad data fails the load rather than
    /// surfacing later as a nonsense score.
    pub fn assemble(
        vendors: loader::VendorsFile,
        industries: loader::IndustriesFile,
        frameworks: loader::FrameworksFile,
        threats: loader::ThreatsFile,
    ) -> Result<Self> {
        let mut catalog = Catalog {
            features: vendors.features,
            vendors: BTreeMap::new(),
            industries: BTreeMap::new(),
            frameworks: BTreeMap::new(),
            threat_models: BTreeMap::new(),
        };

        for vendor in vendors.vendors {
            validate_vendor(&vendor)?;
            if catalog.vendors.insert(vendor.id.clone(), vendor).is_some() {
                return Err(AnalysisError::validation("duplicate vendor id"));
            }
        }
        for framework in frameworks.frameworks {
            if catalog
                .frameworks
                .insert(framework.id.clone(), framework)
                .is_some()
            {
                return Err(AnalysisError::validation("duplicate framework id"));
            }
        }
        for model in threats.threat_models {
            validate_threat_model(&model)?;
            if catalog.threat_models.insert(model.id.clone(), model).is_some() {
                return Err(AnalysisError::validation("duplicate threat model id"));
            }
        }
        for industry in industries.industries {
            validate_industry(&industry, &catalog.frameworks, &catalog.threat_models)?;
            if catalog
                .industries
                .insert(industry.id.clone(), industry)
                .is_some()
            {
                return Err(AnalysisError::validation("duplicate industry id"));
            }
        }

        Ok(catalog)
    }

    pub fn vendor(&self, id: &str) -> Result<&Vendor> {
        self.vendors
            .get(id)
            .ok_or_else(|| AnalysisError::UnknownVendor(id.to_string()))
    }

    pub fn industry(&self, id: &str) -> Result<&IndustryProfile> {
        self.industries
            .get(id)
            .ok_or_else(|| AnalysisError::UnknownIndustry(id.to_string()))
    }

    pub fn framework(&self, id: &str) -> Result<&ComplianceFramework> {
        self.frameworks
            .get(id)
            .ok_or_else(|| AnalysisError::UnknownFramework(id.to_string()))
    }

    pub fn threat_model(&self, id: &str) -> Result<&ThreatModel> {
        self.threat_models
            .get(id)
            .ok_or_else(|| AnalysisError::UnknownThreatModel(id.to_string()))
    }

    /// Feature matrix rows, in declaration order.
    pub fn features(&self) -> &[FeatureSpec] {
        &self.features
    }

    pub fn vendors(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.values()
    }

    pub fn vendor_ids(&self) -> impl Iterator<Item = &str> {
        self.vendors.keys().map(String::as_str)
    }

    pub fn vendor_count(&self) -> usize {
        self.vendors.len()
    }

    pub fn industry_count(&self) -> usize {
        self.industries.len()
    }

    pub fn framework_count(&self) -> usize {
        self.frameworks.len()
    }

    pub fn threat_model_count(&self) -> usize {
        self.threat_models.len()
    }
}

fn validate_vendor(vendor: &Vendor) -> Result<()> {
    if vendor.id.is_empty() {
        return Err(AnalysisError::validation("vendor id must not be empty"));
    }
    if vendor.licensing.price_per_device_monthly < 0.0 {
        return Err(AnalysisError::validation(format!(
            "vendor {}: license price must be non-negative",
            vendor.id
        )));
    }
    let c = &vendor.costs;
    let non_negative = [
        ("implementation_cost", c.implementation_cost),
        ("services_fraction", c.services_fraction),
        ("training_cost_per_user", c.training_cost_per_user),
        ("maintenance_hours_per_month", c.maintenance_hours_per_month),
        ("support_fraction", c.support_fraction),
        ("fte_required", c.fte_required),
    ];
    for (name, value) in non_negative {
        if value < 0.0 {
            return Err(AnalysisError::validation(format!(
                "vendor {}: {name} must be non-negative",
                vendor.id
            )));
        }
    }
    Ok(())
}

fn validate_threat_model(model: &ThreatModel) -> Result<()> {
    for threat in model.all_threats() {
        if !(0.0..=1.0).contains(&threat.likelihood) {
            return Err(AnalysisError::validation(format!(
                "threat model {}: likelihood of '{}' must be within [0, 1]",
                model.id, threat.name
            )));
        }
        if !(0.0..=1.0).contains(&threat.nac_mitigation) {
            return Err(AnalysisError::validation(format!(
                "threat model {}: nac_mitigation of '{}' must be within [0, 1]",
                model.id, threat.name
            )));
        }
        if threat.impact < 0.0 {
            return Err(AnalysisError::validation(format!(
                "threat model {}: impact of '{}' must be non-negative",
                model.id, threat.name
            )));
        }
    }
    Ok(())
}

fn validate_industry(
    industry: &IndustryProfile,
    frameworks: &BTreeMap<String, ComplianceFramework>,
    threat_models: &BTreeMap<String, ThreatModel>,
) -> Result<()> {
    if !(0.0..=1.0).contains(&industry.breach_frequency) {
        return Err(AnalysisError::validation(format!(
            "industry {}: breach_frequency must be within [0, 1]",
            industry.id
        )));
    }
    if industry.avg_breach_cost < 0.0 || industry.violation_cost < 0.0 {
        return Err(AnalysisError::validation(format!(
            "industry {}: costs must be non-negative",
            industry.id
        )));
    }
    for framework_id in &industry.frameworks {
        if !frameworks.contains_key(framework_id) {
            return Err(AnalysisError::UnknownFramework(framework_id.clone()));
        }
    }
    if !threat_models.contains_key(&industry.threat_model) {
        return Err(AnalysisError::UnknownThreatModel(industry.threat_model.clone()));
    }
    Ok(())
}
