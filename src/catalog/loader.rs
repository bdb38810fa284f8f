//! Catalog file loading.
//!
//! Reading, parsing and validation are separate pure steps so tests can
//! exercise the parsers on inline strings without touching the filesystem.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::compliance::ComplianceFramework;
use super::industry::IndustryProfile;
use super::threat::ThreatModel;
use super::vendor::{FeatureSpec, Vendor};
use super::Catalog;
use crate::errors::{AnalysisError, Result};

pub const VENDORS_FILE: &str = "vendors.toml";
pub const INDUSTRIES_FILE: &str = "industries.toml";
pub const FRAMEWORKS_FILE: &str = "frameworks.toml";
pub const THREATS_FILE: &str = "threats.toml";

#[derive(Debug, Deserialize)]
pub struct VendorsFile {
    #[serde(default)]
    pub features: Vec<FeatureSpec>,
    pub vendors: Vec<Vendor>,
}

#[derive(Debug, Deserialize)]
pub struct IndustriesFile {
    pub industries: Vec<IndustryProfile>,
}

#[derive(Debug, Deserialize)]
pub struct FrameworksFile {
    pub frameworks: Vec<ComplianceFramework>,
}

#[derive(Debug, Deserialize)]
pub struct ThreatsFile {
    pub threat_models: Vec<ThreatModel>,
}

/// Pure function to read a catalog file's contents.
fn read_catalog_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path).map_err(|e| AnalysisError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| AnalysisError::io(path, e))?;
    Ok(contents)
}

fn parse_toml<T: serde::de::DeserializeOwned>(contents: &str, name: &str) -> Result<T> {
    toml::from_str(contents).map_err(|e| AnalysisError::parse(name, e.to_string()))
}

pub fn parse_vendors(contents: &str) -> Result<VendorsFile> {
    parse_toml(contents, VENDORS_FILE)
}

pub fn parse_industries(contents: &str) -> Result<IndustriesFile> {
    parse_toml(contents, INDUSTRIES_FILE)
}

pub fn parse_frameworks(contents: &str) -> Result<FrameworksFile> {
    parse_toml(contents, FRAMEWORKS_FILE)
}

pub fn parse_threats(contents: &str) -> Result<ThreatsFile> {
    parse_toml(contents, THREATS_FILE)
}

/// Load all four dataset files from a directory and assemble a validated
/// catalog.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let vendors = parse_vendors(&read_catalog_file(&dir.join(VENDORS_FILE))?)?;
    let industries = parse_industries(&read_catalog_file(&dir.join(INDUSTRIES_FILE))?)?;
    let frameworks = parse_frameworks(&read_catalog_file(&dir.join(FRAMEWORKS_FILE))?)?;
    let threats = parse_threats(&read_catalog_file(&dir.join(THREATS_FILE))?)?;

    let catalog = Catalog::assemble(vendors, industries, frameworks, threats)?;
    log::debug!(
        "Loaded catalog from {}: {} vendors, {} industries, {} frameworks, {} threat models",
        dir.display(),
        catalog.vendor_count(),
        catalog.industry_count(),
        catalog.framework_count(),
        catalog.threat_model_count()
    );
    Ok(catalog)
}
