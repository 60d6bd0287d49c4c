//! Attack-surface analysis: interfaces from connections, attack vectors from
//! component and interface classification.

use crate::catalog::{Matcher, SurfaceRule, SurfaceRules, contains_ignore_ascii_case};
use crate::types::*;

/// Deterministic interface id for a connection endpoint pair.
pub fn interface_id(source: &str, target: &str) -> String {
    format!("IF-{}-{}", source, target)
}

/// Derive one interface per connection, in connection order.
///
/// Duplicate connections produce duplicate interfaces.
pub fn derive_interfaces(connections: &[ConnectionSpec]) -> Vec<Interface> {
    connections
        .iter()
        .map(|conn| {
            let id = interface_id(&conn.source, &conn.target);
            Interface {
                name: conn
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Interface {}", id)),
                source_component: conn.source.clone(),
                target_component: conn.target.clone(),
                interface_type: conn
                    .connection_type
                    .clone()
                    .unwrap_or_else(|| "data".to_string()),
                protocol: conn
                    .protocol
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                description: conn
                    .description
                    .clone()
                    .unwrap_or_else(|| "Component interface".to_string()),
                id,
            }
        })
        .collect()
}

/// Identify attack vectors by applying each rule in order.
///
/// Ids (`AV-1`, `AV-2`, ...) come from one counter shared across all rules.
/// An entity matching several rules yields one vector per rule.
pub fn identify_attack_vectors(
    components: &[Component],
    interfaces: &[Interface],
    rules: &SurfaceRules,
) -> Vec<AttackVector> {
    let mut vectors = Vec::new();

    for rule in rules.rules {
        let before = vectors.len();
        match rule.matcher {
            Matcher::ComponentTypeEquals(ty) => {
                for c in components.iter().filter(|c| c.component_type == ty) {
                    push_component_vector(&mut vectors, rule, c);
                }
            }
            Matcher::ComponentTypeContains(needle) => {
                for c in components
                    .iter()
                    .filter(|c| contains_ignore_ascii_case(&c.component_type, needle))
                {
                    push_component_vector(&mut vectors, rule, c);
                }
            }
            Matcher::ProtocolContains(needle) => {
                for i in interfaces
                    .iter()
                    .filter(|i| contains_ignore_ascii_case(&i.protocol, needle))
                {
                    push_interface_vector(&mut vectors, rule, i);
                }
            }
        }
        tracing::debug!(kind = ?rule.kind, count = vectors.len() - before, "applied attack-surface rule");
    }

    vectors
}

fn next_id(vectors: &[AttackVector]) -> String {
    format!("AV-{}", vectors.len() + 1)
}

fn push_component_vector(vectors: &mut Vec<AttackVector>, rule: &SurfaceRule, c: &Component) {
    vectors.push(AttackVector {
        id: next_id(vectors),
        name: rule.vector_name(&c.name),
        description: rule.vector_description(&c.name),
        entry_point: c.id.clone(),
        affected_components: vec![c.id.clone()],
        threat_types: owned(rule.threat_types),
    });
}

fn push_interface_vector(vectors: &mut Vec<AttackVector>, rule: &SurfaceRule, i: &Interface) {
    vectors.push(AttackVector {
        id: next_id(vectors),
        name: rule.vector_name(&i.name),
        description: rule.vector_description(&i.name),
        entry_point: i.source_component.clone(),
        affected_components: vec![i.source_component.clone(), i.target_component.clone()],
        threat_types: owned(rule.threat_types),
    });
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
