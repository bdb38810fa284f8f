//! Shared error types for naclens computations and catalog access.
//!
//! Calculation functions return these typed errors instead of coercing bad
//! states (zero weight tables, zero investment, unknown catalog keys) into
//! NaN or silent defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analysis operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Dataset parsing errors
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Scenario or weight-table validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup of a vendor id not present in the catalog
    #[error("Unknown vendor id: {0}")]
    UnknownVendor(String),

    /// Lookup of an industry id not present in the catalog
    #[error("Unknown industry id: {0}")]
    UnknownIndustry(String),

    /// Lookup of a compliance framework id not present in the catalog
    #[error("Unknown compliance framework id: {0}")]
    UnknownFramework(String),

    /// Lookup of a threat model id not present in the catalog
    #[error("Unknown threat model id: {0}")]
    UnknownThreatModel(String),

    /// A weighted score was requested against an empty or zero-total weight table
    #[error("Empty weight table for {0}: score is undefined")]
    EmptyWeightTable(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl AnalysisError {
    pub fn file_system(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: source.to_string(),
            path: Some(path),
            source: Some(source),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn with_context(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by bad user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::UnknownVendor(_)
                | Self::UnknownIndustry(_)
                | Self::UnknownFramework(_)
                | Self::UnknownThreatModel(_)
                | Self::EmptyWeightTable(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
