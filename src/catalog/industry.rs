//! Industry benchmark profiles: breach economics, spend benchmarks and the
//! multipliers applied to scenario assumptions.

use serde::{Deserialize, Serialize};

/// Scaling factors applied to the base benefit assumptions for an industry.
/// `1.0` means "at the cross-industry baseline".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndustryMultipliers {
    pub risk: f64,
    pub compliance: f64,
    pub downtime: f64,
}

impl Default for IndustryMultipliers {
    fn default() -> Self {
        Self {
            risk: 1.0,
            compliance: 1.0,
            downtime: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub id: String,
    pub name: String,
    /// Average cost of a data breach in this industry, USD.
    pub avg_breach_cost: f64,
    /// Annual probability of a material breach, 0..=1.
    pub breach_frequency: f64,
    /// Average security spend as a fraction of IT budget.
    pub security_spend_fraction: f64,
    /// Fraction of organizations in this industry with NAC deployed.
    pub nac_adoption_fraction: f64,
    /// Typical cost of a compliance violation event, USD.
    pub violation_cost: f64,
    #[serde(default)]
    pub multipliers: IndustryMultipliers,
    /// Compliance framework ids this industry answers to.
    #[serde(default)]
    pub frameworks: Vec<String>,
    /// Threat model id describing this industry's threat landscape.
    pub threat_model: String,
}
