//! Structural parsing of component definitions and threat libraries.
//!
//! Both documents are YAML (JSON is accepted as a YAML subset). Parsing
//! performs deserialization and type mapping only; missing optional fields
//! are left unset and defaulted later by the pipeline stages.

use crate::error::{LoadError, LoadErrorKind};
use crate::types::{SystemDefinition, ThreatLibrary};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a component/connection document.
///
/// Absent `components` or `connections` keys yield empty lists.
pub fn parse_components(input: &str) -> Result<SystemDefinition, LoadError> {
    if input.trim().is_empty() {
        return Err(LoadError::new(LoadErrorKind::Syntax, "empty input"));
    }
    let value = parse_value(input)?;
    if !value.is_object() {
        return Err(LoadError::new(
            LoadErrorKind::TypeMismatch,
            "document root must be a YAML mapping",
        ));
    }
    from_value(value)
}

/// Parse a threat library document.
///
/// An empty document, a `null` root, or a mapping without a `threats` key is an
/// empty library rather than an error.
pub fn parse_library(input: &str) -> Result<ThreatLibrary, LoadError> {
    if input.trim().is_empty() {
        return Ok(ThreatLibrary::default());
    }
    let value = parse_value(input)?;
    match value {
        Value::Null => Ok(ThreatLibrary::default()),
        Value::Object(_) => from_value(value),
        _ => Err(LoadError::new(
            LoadErrorKind::TypeMismatch,
            "threat library root must be a YAML mapping",
        )),
    }
}

fn parse_value(input: &str) -> Result<Value, LoadError> {
    serde_saphyr::from_str(input).map_err(|e| LoadError::new(LoadErrorKind::Syntax, e.to_string()))
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, LoadError> {
    serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        LoadError::new(classify_json_error(&msg), msg)
    })
}

fn classify_json_error(msg: &str) -> LoadErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("missing field")
        || lower.contains("invalid type")
        || lower.contains("unknown variant")
    {
        LoadErrorKind::TypeMismatch
    } else {
        LoadErrorKind::Syntax
    }
}
