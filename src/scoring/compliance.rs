//! Compliance scoring: how well a vendor's capabilities cover a framework's
//! controls, weighted by control tier.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ComplianceFramework, Control, IndustryProfile, Vendor};
use crate::errors::Result;

use super::{weighted_score, WeightedEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkScore {
    pub framework_id: String,
    pub framework_name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub by_framework: Vec<FrameworkScore>,
    /// Mean framework score; absent when the industry lists no frameworks.
    pub average: Option<f64>,
}

/// A control's support value: the mean support fraction of the capabilities
/// that implement it. A control with no mapped capabilities scores zero.
fn control_value(control: &Control, vendor: &Vendor) -> f64 {
    if control.capabilities.is_empty() {
        return 0.0;
    }
    let total: f64 = control
        .capabilities
        .iter()
        .map(|cap| vendor.capability_support(cap).fraction())
        .sum();
    total / control.capabilities.len() as f64
}

pub fn framework_score(framework: &ComplianceFramework, vendor: &Vendor) -> Result<f64> {
    weighted_score(
        framework
            .controls
            .iter()
            .map(|c| WeightedEntry::new(c.tier.weight(), control_value(c, vendor))),
        &format!("compliance ({})", framework.id),
    )
}

/// Score a vendor against every framework the industry answers to.
pub fn industry_compliance(
    catalog: &Catalog,
    industry: &IndustryProfile,
    vendor: &Vendor,
) -> Result<ComplianceSummary> {
    let mut by_framework = Vec::with_capacity(industry.frameworks.len());
    for framework_id in &industry.frameworks {
        let framework = catalog.framework(framework_id)?;
        by_framework.push(FrameworkScore {
            framework_id: framework.id.clone(),
            framework_name: framework.name.clone(),
            score: framework_score(framework, vendor)?,
        });
    }

    let average = if by_framework.is_empty() {
        None
    } else {
        Some(by_framework.iter().map(|f| f.score).sum::<f64>() / by_framework.len() as f64)
    };

    Ok(ComplianceSummary {
        by_framework,
        average,
    })
}
