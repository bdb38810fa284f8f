//! Threat model catalog: per-category threat tables with likelihood, dollar
//! impact and the mitigation fraction attributable to NAC.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    pub name: String,
    pub severity: Severity,
    /// Annual likelihood, 0..=1.
    pub likelihood: f64,
    /// Dollar magnitude of a single occurrence.
    pub impact: f64,
    /// Fraction of the expected loss a NAC deployment removes, 0..=1.
    pub nac_mitigation: f64,
    #[serde(default)]
    pub time_to_detect_hours: Option<f64>,
    #[serde(default)]
    pub time_to_contain_hours: Option<f64>,
}

impl Threat {
    /// Expected annual loss before any mitigation.
    pub fn expected_annual_loss(&self) -> f64 {
        self.likelihood * self.impact
    }

    /// Expected annual loss remaining after NAC mitigation.
    pub fn residual_annual_loss(&self) -> f64 {
        self.expected_annual_loss() * (1.0 - self.nac_mitigation)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatCategory {
    pub name: String,
    pub threats: Vec<Threat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatModel {
    pub id: String,
    pub name: String,
    pub categories: Vec<ThreatCategory>,
}

impl ThreatModel {
    pub fn all_threats(&self) -> impl Iterator<Item = &Threat> {
        self.categories.iter().flat_map(|c| c.threats.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_loss_never_exceeds_expected_loss() {
        let t = Threat {
            name: "Ransomware".into(),
            severity: Severity::Critical,
            likelihood: 0.25,
            impact: 1_200_000.0,
            nac_mitigation: 0.8,
            time_to_detect_hours: Some(4.0),
            time_to_contain_hours: Some(24.0),
        };
        assert_eq!(t.expected_annual_loss(), 300_000.0);
        assert!(t.residual_annual_loss() <= t.expected_annual_loss());
        assert!((t.residual_annual_loss() - 60_000.0).abs() < 1e-6);
    }
}
