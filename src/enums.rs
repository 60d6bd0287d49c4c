//! Closed enumerations used throughout the threat-model type system.
//!
//! Component types, protocols, threat types and ratings are open vocabularies
//! supplied by the input documents and are kept as strings. Only values the
//! generator itself decides are modelled as enums here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a control prevents a threat or limits its consequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    Preventive,
    Mitigative,
}

/// Lifecycle state of a security control. The generator only recommends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImplementationStatus {
    Recommended,
}

/// Which family of attack-surface rule produced an attack vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackVectorKind {
    External,
    Wireless,
    Physical,
}

/// Serialization format of the output threat model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Infer the format from a file path: `.json` selects JSON, anything else YAML.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Yaml,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
