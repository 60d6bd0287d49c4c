//! Non-fatal consistency checks over a system definition.
//!
//! Lint never rejects or alters input. Unresolved endpoints and duplicates are
//! carried through the pipeline unchanged; the diagnostics only report them.

use crate::error::Diagnostic;
use crate::types::SystemDefinition;
use std::collections::HashSet;

pub const DUPLICATE_COMPONENT_ID: &str = "duplicate_component_id";
pub const UNRESOLVED_ENDPOINT: &str = "unresolved_endpoint";
pub const DUPLICATE_CONNECTION: &str = "duplicate_connection";

/// Report duplicate component ids, unresolved connection endpoints and
/// repeated source/target pairs.
pub fn lint(def: &SystemDefinition) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();

    let mut ids = HashSet::new();
    for (i, c) in def.components.iter().enumerate() {
        if !ids.insert(c.id.as_str()) {
            warnings.push(Diagnostic::warning(
                DUPLICATE_COMPONENT_ID,
                Some(format!("components[{}].id", i)),
                format!("component id '{}' is declared more than once", c.id),
            ));
        }
    }

    let mut pairs = HashSet::new();
    for (i, conn) in def.connections.iter().enumerate() {
        for (field, endpoint) in [("source", &conn.source), ("target", &conn.target)] {
            if !ids.contains(endpoint.as_str()) {
                warnings.push(Diagnostic::warning(
                    UNRESOLVED_ENDPOINT,
                    Some(format!("connections[{}].{}", i, field)),
                    format!("'{}' does not name a declared component", endpoint),
                ));
            }
        }
        if !pairs.insert((conn.source.as_str(), conn.target.as_str())) {
            warnings.push(Diagnostic::warning(
                DUPLICATE_CONNECTION,
                Some(format!("connections[{}]", i)),
                format!(
                    "connection {} -> {} duplicates an earlier connection",
                    conn.source, conn.target
                ),
            ));
        }
    }

    warnings
}
