//! [`ThreatModel`] → YAML or JSON serialization.

use crate::enums::OutputFormat;
use crate::error::SerializeError;
use crate::types::ThreatModel;

/// Serialize a threat model to text in the requested format.
///
/// Fields are emitted in declaration order: `system`, `components`,
/// `interfaces`, `attack_vectors`, `threats`, `security_controls`.
/// The output is a pure function of the model.
pub fn serialize(model: &ThreatModel, format: OutputFormat) -> Result<String, SerializeError> {
    // Convert to serde_json::Value first for consistent field ordering
    let value = serde_json::to_value(model).map_err(|e| SerializeError {
        message: format!("failed to convert threat model to JSON value: {}", e),
    })?;

    match format {
        OutputFormat::Yaml => serde_saphyr::to_string(&value).map_err(|e| SerializeError {
            message: format!("failed to serialize to YAML: {}", e),
        }),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&value).map_err(|e| SerializeError {
                message: format!("failed to serialize to JSON: {}", e),
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}
