//! Security control recommendation.

use crate::catalog::ControlCatalog;
use crate::enums::ImplementationStatus;
use crate::types::{SecurityControl, Threat};
use indexmap::{IndexMap, IndexSet};

/// Recommend controls for the threat types present in `threats`.
///
/// Threat types are visited in order of first appearance. A control name is
/// instantiated at most once; its `mitigated_threats` lists every threat of the
/// threat type that first requested it. Unmapped threat types are ignored.
pub fn recommend_controls(threats: &[Threat], catalog: &ControlCatalog) -> Vec<SecurityControl> {
    let mut by_type: IndexMap<&str, Vec<String>> = IndexMap::new();
    for threat in threats {
        by_type
            .entry(threat.threat_type.as_str())
            .or_default()
            .push(threat.id.clone());
    }

    let mut added: IndexSet<&str> = IndexSet::new();
    let mut controls = Vec::new();

    for (threat_type, threat_ids) in &by_type {
        let Some(templates) = catalog.lookup(threat_type) else {
            tracing::debug!(threat_type, "no controls mapped for threat type");
            continue;
        };
        for template in templates {
            if !added.insert(template.name) {
                continue;
            }
            controls.push(SecurityControl {
                id: format!("SC-{}", controls.len() + 1),
                name: template.name.to_string(),
                description: template.description.to_string(),
                control_type: template.control_type,
                mitigated_threats: threat_ids.clone(),
                implementation_status: ImplementationStatus::Recommended,
            });
        }
    }

    controls
}
