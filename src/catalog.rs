//! Immutable derivation tables: attack-surface rules, control mappings and
//! the generic impact heuristic.
//!
//! The built-in tables are compile-time constants. The pipeline stages take
//! them as explicit arguments so callers can substitute their own.

use crate::enums::{AttackVectorKind, ControlType};
use crate::types::Impact;

// ─── Attack-surface rules ───────────────────────────────────────────────────

/// How an attack-surface rule selects its entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matcher {
    /// Component `type` equals the value exactly.
    ComponentTypeEquals(&'static str),
    /// Component `type` contains the value, ASCII case-insensitively.
    ComponentTypeContains(&'static str),
    /// Interface `protocol` contains the value, ASCII case-insensitively.
    ProtocolContains(&'static str),
}

/// One attack-surface rule and the threat categories it exposes.
///
/// `name` and `description` are templates for the produced vector; `{}` is
/// replaced by the matched component's or interface's name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceRule {
    pub kind: AttackVectorKind,
    pub matcher: Matcher,
    pub name: &'static str,
    pub description: &'static str,
    pub threat_types: &'static [&'static str],
}

impl SurfaceRule {
    pub(crate) fn vector_name(&self, subject: &str) -> String {
        self.name.replace("{}", subject)
    }

    pub(crate) fn vector_description(&self, subject: &str) -> String {
        self.description.replace("{}", subject)
    }
}

/// The built-in rules in evaluation order. Attack-vector ids follow this order.
pub static SURFACE_RULES: &[SurfaceRule] = &[
    SurfaceRule {
        kind: AttackVectorKind::External,
        matcher: Matcher::ComponentTypeEquals("external_interface"),
        name: "Attack via {}",
        description: "External attack through {} interface",
        threat_types: &["spoofing", "tampering"],
    },
    SurfaceRule {
        kind: AttackVectorKind::Wireless,
        matcher: Matcher::ProtocolContains("wireless"),
        name: "Wireless attack via {}",
        description: "Attack through wireless interface {}",
        threat_types: &["spoofing", "denial_of_service"],
    },
    SurfaceRule {
        kind: AttackVectorKind::Physical,
        matcher: Matcher::ComponentTypeContains("physical"),
        name: "Physical access to {}",
        description: "Attack through physical access to {}",
        threat_types: &["tampering", "information_disclosure"],
    },
];

/// An ordered set of attack-surface rules.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceRules {
    pub rules: &'static [SurfaceRule],
}

impl Default for SurfaceRules {
    fn default() -> Self {
        SurfaceRules {
            rules: SURFACE_RULES,
        }
    }
}

pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

// ─── Control mappings ───────────────────────────────────────────────────────

/// A mitigation control recommended for a threat type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub control_type: ControlType,
}

/// The controls recommended for one threat type, in recommendation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlMapping {
    pub threat_type: &'static str,
    pub controls: &'static [ControlTemplate],
}

/// The built-in STRIDE-derived control mappings.
pub static CONTROL_MAPPINGS: &[ControlMapping] = &[
    ControlMapping {
        threat_type: "spoofing",
        controls: &[
            ControlTemplate {
                name: "Strong Authentication",
                description: "Implement strong authentication mechanisms",
                control_type: ControlType::Preventive,
            },
            ControlTemplate {
                name: "Message Authentication",
                description: "Implement message authentication codes (MACs)",
                control_type: ControlType::Preventive,
            },
        ],
    },
    ControlMapping {
        threat_type: "tampering",
        controls: &[
            ControlTemplate {
                name: "Integrity Protection",
                description: "Implement integrity protection mechanisms",
                control_type: ControlType::Preventive,
            },
            ControlTemplate {
                name: "Secure Boot",
                description: "Implement secure boot process",
                control_type: ControlType::Preventive,
            },
        ],
    },
    ControlMapping {
        threat_type: "information_disclosure",
        controls: &[
            ControlTemplate {
                name: "Encryption",
                description: "Encrypt sensitive data in transit and at rest",
                control_type: ControlType::Preventive,
            },
            ControlTemplate {
                name: "Access Control",
                description: "Implement strict access controls",
                control_type: ControlType::Preventive,
            },
        ],
    },
    ControlMapping {
        threat_type: "denial_of_service",
        controls: &[
            ControlTemplate {
                name: "Rate Limiting",
                description: "Implement rate limiting mechanisms",
                control_type: ControlType::Preventive,
            },
            ControlTemplate {
                name: "Redundancy",
                description: "Implement redundant systems or components",
                control_type: ControlType::Mitigative,
            },
        ],
    },
    ControlMapping {
        threat_type: "elevation_of_privilege",
        controls: &[
            ControlTemplate {
                name: "Privilege Separation",
                description: "Implement privilege separation mechanisms",
                control_type: ControlType::Preventive,
            },
            ControlTemplate {
                name: "Least Privilege",
                description: "Apply principle of least privilege",
                control_type: ControlType::Preventive,
            },
        ],
    },
];

/// Threat type → control templates lookup table.
#[derive(Clone, Copy, Debug)]
pub struct ControlCatalog {
    pub mappings: &'static [ControlMapping],
}

impl Default for ControlCatalog {
    fn default() -> Self {
        ControlCatalog {
            mappings: CONTROL_MAPPINGS,
        }
    }
}

impl ControlCatalog {
    /// Look up the controls for a threat type. Returns `None` for unmapped types.
    pub fn lookup(&self, threat_type: &str) -> Option<&'static [ControlTemplate]> {
        self.mappings
            .iter()
            .find(|m| m.threat_type == threat_type)
            .map(|m| m.controls)
    }
}

// ─── Generic impact heuristic ───────────────────────────────────────────────

/// Impact ratings for a threat synthesized without a library template.
pub fn generic_impact(threat_type: &str) -> Impact {
    let rate = |hit: bool, yes: &str, no: &str| (if hit { yes } else { no }).to_string();
    Impact {
        safety: rate(
            matches!(threat_type, "tampering" | "spoofing"),
            "Medium",
            "Low",
        ),
        privacy: rate(threat_type == "information_disclosure", "High", "Low"),
        operational: rate(threat_type == "denial_of_service", "High", "Medium"),
        financial: "Medium".to_string(),
    }
}

/// Likelihood and risk level assigned when a template leaves them unset.
pub const DEFAULT_LIKELIHOOD: &str = "Medium";
pub const DEFAULT_RISK_LEVEL: &str = "Medium";
