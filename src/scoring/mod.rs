//! Weighted scoring primitives shared by feature-coverage, compliance and
//! risk scoring. One formula, three catalogs:
//!
//! ```text
//! score = 100 * sum(weight_i * value_i) / sum(weight_i)
//! ```
//!
//! A zero-total weight table is a typed error, never a NaN.

pub mod compliance;
pub mod coverage;
pub mod risk;

pub use compliance::{industry_compliance, ComplianceSummary, FrameworkScore};
pub use coverage::{feature_coverage, CoverageScore};
pub use risk::{assess_threats, RiskAssessment};

use crate::errors::{AnalysisError, Result};

/// One scored item: a non-negative importance weight and a value in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct WeightedEntry {
    pub weight: f64,
    pub value: f64,
}

impl WeightedEntry {
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }
}

/// Weighted average of `entries`, scaled to a 0-100 percentage.
///
/// `context` names the score being computed so an empty weight table error
/// points at the right dataset.
pub fn weighted_score<I>(entries: I, context: &str) -> Result<f64>
where
    I: IntoIterator<Item = WeightedEntry>,
{
    let mut weight_total = 0.0;
    let mut value_total = 0.0;
    for entry in entries {
        if entry.weight < 0.0 {
            return Err(AnalysisError::validation(format!(
                "negative weight in {context}"
            )));
        }
        weight_total += entry.weight;
        value_total += entry.weight * entry.value;
    }

    if weight_total == 0.0 {
        return Err(AnalysisError::EmptyWeightTable(context.to_string()));
    }
    Ok(100.0 * value_total / weight_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_full_support_scores_100() {
        let entries = vec![
            WeightedEntry::new(3.0, 1.0),
            WeightedEntry::new(2.0, 1.0),
            WeightedEntry::new(1.0, 1.0),
        ];
        assert_eq!(weighted_score(entries, "test").unwrap(), 100.0);
    }

    #[test]
    fn all_none_support_scores_0() {
        let entries = vec![WeightedEntry::new(3.0, 0.0), WeightedEntry::new(1.0, 0.0)];
        assert_eq!(weighted_score(entries, "test").unwrap(), 0.0);
    }

    #[test]
    fn empty_table_is_a_typed_error() {
        let err = weighted_score(std::iter::empty(), "feature coverage").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyWeightTable(_)));
    }

    #[test]
    fn zero_total_weight_is_a_typed_error() {
        let entries = vec![WeightedEntry::new(0.0, 1.0)];
        assert!(matches!(
            weighted_score(entries, "test"),
            Err(AnalysisError::EmptyWeightTable(_))
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let entries = vec![WeightedEntry::new(-1.0, 1.0)];
        assert!(matches!(
            weighted_score(entries, "test"),
            Err(AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn order_of_entries_does_not_matter() {
        let a = vec![
            WeightedEntry::new(3.0, 0.5),
            WeightedEntry::new(2.0, 1.0),
            WeightedEntry::new(1.0, 0.0),
        ];
        let mut b = a.clone();
        b.reverse();
        let score_a = weighted_score(a, "test").unwrap();
        let score_b = weighted_score(b, "test").unwrap();
        assert!((score_a - score_b).abs() < 1e-9);
    }
}
