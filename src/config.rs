//! Run configuration: system metadata, input/output paths and output format.

use crate::enums::OutputFormat;
use crate::error::ConfigError;
use crate::types::SystemInfo;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one generator run.
///
/// Every field has a default, so a configuration file may set any subset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub system_name: String,
    pub description: String,
    pub version: String,
    /// Assessment date (`YYYY-MM-DD`). Today's local date when unset.
    pub date_assessed: Option<String>,
    pub library: PathBuf,
    pub output: PathBuf,
    /// Inferred from the `output` extension when unset.
    pub format: Option<OutputFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            system_name: "Automotive System".to_string(),
            description: "Automotive system threat model".to_string(),
            version: "1.0".to_string(),
            date_assessed: None,
            library: PathBuf::from("threat_library.yaml"),
            output: PathBuf::from("automotive_threat_model.yaml"),
            format: None,
        }
    }
}

impl Config {
    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or carries a malformed `date_assessed`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let err = |message: String| ConfigError {
            path: path.to_path_buf(),
            message,
        };
        let text = std::fs::read_to_string(path).map_err(|e| err(e.to_string()))?;
        let config: Config = toml::from_str(&text).map_err(|e| err(e.to_string()))?;
        if let Some(date) = &config.date_assessed {
            check_date(date).map_err(err)?;
        }
        Ok(config)
    }

    /// The output format, explicit or inferred from the output path.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }

    /// The `system` block of the generated document.
    pub fn system_info(&self) -> SystemInfo {
        SystemInfo {
            name: self.system_name.clone(),
            version: self.version.clone(),
            description: self.description.clone(),
            date_assessed: self
                .date_assessed
                .clone()
                .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
        }
    }
}

/// Check that `date` is a calendar date in `YYYY-MM-DD` form.
pub fn check_date(date: &str) -> Result<(), String> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| format!("invalid date_assessed '{}': {}", date, e))
}
