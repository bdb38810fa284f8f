//! Threat-exposure scoring: expected annual loss from a threat model and the
//! portion a NAC deployment removes, scaled by how capable the vendor is.

use serde::{Deserialize, Serialize};

use crate::catalog::{Severity, ThreatModel};
use crate::errors::{AnalysisError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExposure {
    pub name: String,
    pub expected_annual_loss: f64,
    pub residual_annual_loss: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Sum of likelihood x impact over every threat, USD per year.
    pub expected_annual_loss: f64,
    /// Exposure remaining after mitigation, USD per year.
    pub residual_annual_loss: f64,
    /// Dollar value of the removed exposure.
    pub risk_reduction_value: f64,
    /// Removed exposure as a percentage of the total, 0-100.
    pub mitigation_pct: f64,
    pub by_category: Vec<CategoryExposure>,
    pub critical_threats: usize,
    pub total_threats: usize,
}

/// Assess a threat model with a vendor effectiveness factor in [0, 1].
///
/// Effectiveness scales each threat's NAC mitigation: a vendor covering the
/// whole feature matrix realizes the full mitigation, a weaker one
/// proportionally less. Pass 1.0 for the model's nominal mitigation.
pub fn assess_threats(model: &ThreatModel, effectiveness: f64) -> Result<RiskAssessment> {
    if !(0.0..=1.0).contains(&effectiveness) {
        return Err(AnalysisError::validation(format!(
            "effectiveness must be within [0, 1], got {effectiveness}"
        )));
    }

    let mut by_category = Vec::with_capacity(model.categories.len());
    let mut expected_total = 0.0;
    let mut residual_total = 0.0;
    let mut critical_threats = 0;
    let mut total_threats = 0;

    for category in &model.categories {
        let mut expected = 0.0;
        let mut residual = 0.0;
        for threat in &category.threats {
            let eal = threat.expected_annual_loss();
            expected += eal;
            residual += eal * (1.0 - threat.nac_mitigation * effectiveness);
            if threat.severity == Severity::Critical {
                critical_threats += 1;
            }
            total_threats += 1;
        }
        expected_total += expected;
        residual_total += residual;
        by_category.push(CategoryExposure {
            name: category.name.clone(),
            expected_annual_loss: expected,
            residual_annual_loss: residual,
        });
    }

    let risk_reduction_value = expected_total - residual_total;
    let mitigation_pct = if expected_total > 0.0 {
        100.0 * risk_reduction_value / expected_total
    } else {
        0.0
    };

    Ok(RiskAssessment {
        expected_annual_loss: expected_total,
        residual_annual_loss: residual_total,
        risk_reduction_value,
        mitigation_pct,
        by_category,
        critical_threats,
        total_threats,
    })
}
