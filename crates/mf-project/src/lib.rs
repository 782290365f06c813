//! mf-project: network definition files and report serialization.

pub mod report;
pub mod schema;
pub mod validate;

pub use report::{FlowReportDef, FlowUsage};
pub use schema::*;
pub use validate::{ValidationError, validate_network};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File encodings understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.yaml`/`.yml` are YAML, anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

pub fn parse_json(content: &str) -> ProjectResult<NetworkDef> {
    let network: NetworkDef = serde_json::from_str(content)?;
    validate_network(&network)?;
    Ok(network)
}

pub fn parse_yaml(content: &str) -> ProjectResult<NetworkDef> {
    let network: NetworkDef = serde_yaml::from_str(content)?;
    validate_network(&network)?;
    Ok(network)
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

/// Load a network, picking the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<NetworkDef> {
    match Format::from_path(path) {
        Format::Json => load_json(path),
        Format::Yaml => load_yaml(path),
    }
}

pub fn save_json(path: &Path, network: &NetworkDef) -> ProjectResult<()> {
    validate_network(network)?;
    let content = serde_json::to_string_pretty(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_yaml(path: &Path, network: &NetworkDef) -> ProjectResult<()> {
    validate_network(network)?;
    let content = serde_yaml::to_string(network)?;
    std::fs::write(path, content)?;
    Ok(())
}
