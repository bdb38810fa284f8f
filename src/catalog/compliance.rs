//! Compliance framework catalog: named controls, their NAC relevance tier
//! and the NAC capabilities that satisfy them.

use serde::{Deserialize, Serialize};

/// How much a control matters when scoring a vendor against a framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlTier {
    Critical,
    Important,
    Beneficial,
}

impl ControlTier {
    pub fn weight(self) -> f64 {
        match self {
            ControlTier::Critical => 3.0,
            ControlTier::Important => 2.0,
            ControlTier::Beneficial => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub name: String,
    pub tier: ControlTier,
    /// Feature-matrix capability names that implement this control. A
    /// vendor's support for the control is derived from these.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceFramework {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub controls: Vec<Control>,
    /// Maximum regulatory fine, USD, for report context.
    #[serde(default)]
    pub max_fine: Option<f64>,
}
