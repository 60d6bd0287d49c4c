use autothreat::types::*;
use proptest::prelude::*;

/// Component types covering every attack-surface rule plus non-matching ones.
pub const COMPONENT_TYPES: &[&str] = &[
    "external_interface",
    "gateway",
    "ecu",
    "physical_port",
    "Physical_Sensor",
    "infotainment",
];

pub const PROTOCOLS: &[&str] = &["wireless", "CAN", "Wireless-BLE", "Ethernet", "LIN"];

pub const THREAT_TYPES: &[&str] = &[
    "spoofing",
    "tampering",
    "denial_of_service",
    "information_disclosure",
    "elevation_of_privilege",
];

pub fn system() -> SystemInfo {
    SystemInfo {
        name: "Prop".to_string(),
        version: "1.0".to_string(),
        description: "property test".to_string(),
        date_assessed: "2024-01-01".to_string(),
    }
}

/// Strategy for a system definition. Connection endpoints may name components
/// that do not exist.
pub fn arb_definition() -> impl Strategy<Value = SystemDefinition> {
    let components = prop::collection::vec(0..COMPONENT_TYPES.len(), 0..8);
    let connections = prop::collection::vec((0usize..10, 0usize..10, 0..PROTOCOLS.len()), 0..8);
    (components, connections).prop_map(|(types, conns)| SystemDefinition {
        components: types
            .iter()
            .enumerate()
            .map(|(i, &t)| ComponentSpec {
                id: format!("C{}", i),
                name: format!("Component {}", i),
                component_type: COMPONENT_TYPES[t].to_string(),
                description: None,
                criticality: None,
            })
            .collect(),
        connections: conns
            .iter()
            .map(|&(s, t, p)| ConnectionSpec {
                source: format!("C{}", s),
                target: format!("C{}", t),
                name: None,
                connection_type: None,
                protocol: Some(PROTOCOLS[p].to_string()),
                description: None,
            })
            .collect(),
    })
}

/// Strategy for a threat library drawn from the known threat types.
pub fn arb_library() -> impl Strategy<Value = ThreatLibrary> {
    let entry = (
        0..THREAT_TYPES.len(),
        prop::option::of(prop::collection::vec(0..COMPONENT_TYPES.len(), 1..3)),
        any::<bool>(),
    );
    prop::collection::vec(entry, 0..5).prop_map(|entries| ThreatLibrary {
        threats: entries
            .into_iter()
            .enumerate()
            .map(|(i, (ty, scope, with_impact))| LibraryEntry {
                name: format!("Template {}", i),
                description: format!("Template threat {}", i),
                threat_type: Some(THREAT_TYPES[ty].to_string()),
                component_types: scope
                    .map(|s| s.iter().map(|&c| COMPONENT_TYPES[c].to_string()).collect()),
                attack_vectors: None,
                impact: with_impact.then(|| Impact {
                    safety: "High".to_string(),
                    privacy: "High".to_string(),
                    operational: "Low".to_string(),
                    financial: "Low".to_string(),
                }),
                likelihood: None,
                risk_level: Some("High".to_string()),
            })
            .collect(),
    })
}

/// Whether `ids` is exactly `<prefix>1`, `<prefix>2`, ... with no gaps.
pub fn is_gapless(ids: &[String], prefix: &str) -> bool {
    ids.iter()
        .enumerate()
        .all(|(i, id)| *id == format!("{}{}", prefix, i + 1))
}
