//! Threat synthesis from the threat library and identified attack vectors.

use crate::catalog::{DEFAULT_LIKELIHOOD, DEFAULT_RISK_LEVEL, generic_impact};
use crate::types::*;

/// Produce the threat set in two phases sharing one id counter.
///
/// 1. Every library entry with `component_types` that matches at least one
///    component yields one threat covering all matching components.
/// 2. Every attack vector yields one threat per threat type, in declaration
///    order, from the first library entry of that type or, failing that, from
///    the generic heuristic.
pub fn synthesize_threats(
    components: &[Component],
    attack_vectors: &[AttackVector],
    library: &ThreatLibrary,
) -> Vec<Threat> {
    let mut threats = Vec::new();

    library_threats(components, library, &mut threats);
    let from_library = threats.len();

    vector_threats(attack_vectors, library, &mut threats);
    tracing::debug!(
        from_library,
        from_vectors = threats.len() - from_library,
        "synthesized threats"
    );

    threats
}

fn next_id(threats: &[Threat]) -> String {
    format!("T-{}", threats.len() + 1)
}

fn library_threats(components: &[Component], library: &ThreatLibrary, threats: &mut Vec<Threat>) {
    for entry in &library.threats {
        let Some(types) = &entry.component_types else {
            continue;
        };

        let affected: Vec<String> = components
            .iter()
            .filter(|c| types.iter().any(|t| *t == c.component_type))
            .map(|c| c.id.clone())
            .collect();
        if affected.is_empty() {
            continue;
        }

        threats.push(Threat {
            id: next_id(threats),
            name: entry.name.clone(),
            description: entry.description.clone(),
            threat_type: entry
                .threat_type
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            affected_components: affected,
            attack_vectors: entry.attack_vectors.clone().unwrap_or_default(),
            impact: template_impact(entry),
            likelihood: template_likelihood(entry),
            risk_level: template_risk_level(entry),
        });
    }
}

fn vector_threats(attack_vectors: &[AttackVector], library: &ThreatLibrary, threats: &mut Vec<Threat>) {
    for av in attack_vectors {
        for threat_type in &av.threat_types {
            let threat = match library.first_of_type(threat_type) {
                Some(template) => Threat {
                    id: next_id(threats),
                    name: format!("{} via {}", template.name, av.name),
                    description: template.description.clone(),
                    threat_type: threat_type.clone(),
                    affected_components: av.affected_components.clone(),
                    attack_vectors: vec![av.id.clone()],
                    impact: template_impact(template),
                    likelihood: template_likelihood(template),
                    risk_level: template_risk_level(template),
                },
                None => Threat {
                    id: next_id(threats),
                    name: format!("{} via {}", title_case(threat_type), av.name),
                    description: format!(
                        "Generic {} threat through {}",
                        threat_type, av.description
                    ),
                    threat_type: threat_type.clone(),
                    affected_components: av.affected_components.clone(),
                    attack_vectors: vec![av.id.clone()],
                    impact: generic_impact(threat_type),
                    likelihood: DEFAULT_LIKELIHOOD.to_string(),
                    risk_level: DEFAULT_RISK_LEVEL.to_string(),
                },
            };
            threats.push(threat);
        }
    }
}

fn template_impact(entry: &LibraryEntry) -> Impact {
    entry.impact.clone().unwrap_or_else(Impact::unknown)
}

fn template_likelihood(entry: &LibraryEntry) -> String {
    entry
        .likelihood
        .clone()
        .unwrap_or_else(|| DEFAULT_LIKELIHOOD.to_string())
}

fn template_risk_level(entry: &LibraryEntry) -> String {
    entry
        .risk_level
        .clone()
        .unwrap_or_else(|| DEFAULT_RISK_LEVEL.to_string())
}

/// Capitalize the first letter of every alphabetic run and lowercase the rest.
///
/// Non-letters are kept and act as word boundaries: `denial_of_service`
/// becomes `Denial_Of_Service`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}
