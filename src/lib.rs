//! NAC vendor analysis library: weighted feature/compliance/risk scoring, a
//! cost/benefit model with ROI, payback and NPV, deterministic sensitivity
//! sweeps and a seeded Monte Carlo simulation.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod financial;
pub mod io;
pub mod scoring;
pub mod sensitivity;

pub use catalog::{load_catalog, Catalog};
pub use comparison::{analyze_vendor, compare, Comparison, VendorOutcome};
pub use config::ScenarioConfig;
pub use errors::{AnalysisError, Result};
pub use financial::{compute_cost_benefit, CostBenefit, Payback, Roi};
pub use sensitivity::{run_monte_carlo, run_sensitivity, MonteCarloSummary, Variable};
