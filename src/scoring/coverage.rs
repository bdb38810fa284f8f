//! Feature-coverage scoring: how much of the weighted feature matrix a
//! vendor supports, overall and per category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{FeatureSpec, SupportLevel, Vendor};
use crate::errors::Result;

use super::{weighted_score, WeightedEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageScore {
    /// Weighted coverage percentage across the whole matrix.
    pub overall: f64,
    /// Weighted coverage percentage per feature category.
    pub by_category: BTreeMap<String, f64>,
    /// Features supported at `full`, for the summary line.
    pub full_count: usize,
    pub feature_count: usize,
}

/// Score a vendor against the feature matrix. Features the vendor does not
/// declare score as no support.
pub fn feature_coverage(features: &[FeatureSpec], vendor: &Vendor) -> Result<CoverageScore> {
    let overall = weighted_score(
        features.iter().map(|f| entry_for(f, vendor)),
        "feature coverage",
    )?;

    let mut by_category = BTreeMap::new();
    let mut categories: Vec<&str> = features.iter().map(|f| f.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    for category in categories {
        let score = weighted_score(
            features
                .iter()
                .filter(|f| f.category == category)
                .map(|f| entry_for(f, vendor)),
            &format!("feature coverage ({category})"),
        )?;
        by_category.insert(category.to_string(), score);
    }

    let full_count = features
        .iter()
        .filter(|f| vendor.support_for(&f.category, &f.name) == SupportLevel::Full)
        .count();

    Ok(CoverageScore {
        overall,
        by_category,
        full_count,
        feature_count: features.len(),
    })
}

fn entry_for(feature: &FeatureSpec, vendor: &Vendor) -> WeightedEntry {
    let support = vendor.support_for(&feature.category, &feature.name);
    WeightedEntry::new(feature.importance.weight(), support.fraction())
}
