use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::enums::*;

// ─── Input: component/connection definition ─────────────────────────────────

/// The declarative description of a system: its components and the
/// connections between them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SystemDefinition {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub components: Vec<ComponentSpec>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub connections: Vec<ConnectionSpec>,
}

/// A component as declared in the input document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentSpec {
    #[serde(deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "scalar_string")]
    pub component_type: String,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub criticality: Option<String>,
}

/// A directed link between two components as declared in the input document.
///
/// `source` and `target` are not required to resolve to declared components.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectionSpec {
    #[serde(deserialize_with = "scalar_string")]
    pub source: String,
    #[serde(deserialize_with = "scalar_string")]
    pub target: String,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub connection_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub protocol: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// A key present with an empty value (`connections:`) is an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a scalar as text. Numbers and booleans keep their YAML spelling
/// (`id: 101` is `"101"`, `protocol: 802.11` is `"802.11"`).
fn scalar_text<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!(
            "invalid type: expected a scalar, got {}",
            other
        ))),
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_text(Value::deserialize(deserializer)?)?
        .ok_or_else(|| serde::de::Error::custom("invalid type: null, expected a scalar"))
}

fn opt_scalar_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    scalar_text(Value::deserialize(deserializer)?)
}

fn opt_scalar_strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| scalar_text(v).transpose())
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        scalar => Ok(scalar_text(scalar)?.map(|s| vec![s])),
    }
}

fn scalar_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?)?.unwrap_or_default())
}

fn rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?)?.unwrap_or_else(unknown_rating))
}

// ─── Input: threat library ──────────────────────────────────────────────────

/// A catalog of reusable threat templates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ThreatLibrary {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub threats: Vec<LibraryEntry>,
}

impl ThreatLibrary {
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
    }

    /// First template whose `threat_type` equals `threat_type` exactly.
    pub fn first_of_type(&self, threat_type: &str) -> Option<&LibraryEntry> {
        self.threats
            .iter()
            .find(|t| t.threat_type.as_deref() == Some(threat_type))
    }
}

/// A reusable threat template, optionally scoped to component types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LibraryEntry {
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub threat_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub component_types: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub attack_vectors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub likelihood: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_level: Option<String>,
}

// ─── Output: threat model ───────────────────────────────────────────────────

/// The assembled threat model document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreatModel {
    pub system: SystemInfo,
    pub components: Vec<Component>,
    pub interfaces: Vec<Interface>,
    pub attack_vectors: Vec<AttackVector>,
    pub threats: Vec<Threat>,
    pub security_controls: Vec<SecurityControl>,
}

/// Descriptive metadata about the assessed system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub date_assessed: String,
}

/// A component of the assessed system with defaults applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub description: Option<String>,
    pub criticality: String,
}

impl From<&ComponentSpec> for Component {
    fn from(spec: &ComponentSpec) -> Self {
        Component {
            id: spec.id.clone(),
            name: spec.name.clone(),
            component_type: spec.component_type.clone(),
            description: spec.description.clone(),
            criticality: spec
                .criticality
                .clone()
                .unwrap_or_else(|| "Low".to_string()),
        }
    }
}

/// A communication interface derived from one connection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub id: String,
    pub name: String,
    pub source_component: String,
    pub target_component: String,
    #[serde(rename = "type")]
    pub interface_type: String,
    pub protocol: String,
    pub description: String,
}

/// An entry point plus the components it exposes and the applicable threat categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackVector {
    pub id: String,
    pub name: String,
    pub description: String,
    pub entry_point: String,
    pub affected_components: Vec<String>,
    /// Threat categories in declaration order.
    pub threat_types: Vec<String>,
}

/// Qualitative impact ratings across the four assessment dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    #[serde(default = "unknown_rating", deserialize_with = "rating")]
    pub safety: String,
    #[serde(default = "unknown_rating", deserialize_with = "rating")]
    pub privacy: String,
    #[serde(default = "unknown_rating", deserialize_with = "rating")]
    pub operational: String,
    #[serde(default = "unknown_rating", deserialize_with = "rating")]
    pub financial: String,
}

fn unknown_rating() -> String {
    "Unknown".to_string()
}

impl Impact {
    /// All four dimensions rated "Unknown".
    pub fn unknown() -> Self {
        Impact {
            safety: unknown_rating(),
            privacy: unknown_rating(),
            operational: unknown_rating(),
            financial: unknown_rating(),
        }
    }
}

/// A concrete threat instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    pub id: String,
    pub name: String,
    pub description: String,
    pub threat_type: String,
    pub affected_components: Vec<String>,
    pub attack_vectors: Vec<String>,
    pub impact: Impact,
    pub likelihood: String,
    pub risk_level: String,
}

/// A mitigation recommendation linked to the threats it addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityControl {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub mitigated_threats: Vec<String>,
    pub implementation_status: ImplementationStatus,
}
