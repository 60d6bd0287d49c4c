use super::common::*;
use autothreat::catalog::CONTROL_MAPPINGS;
use autothreat::generate_model;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn control_names_unique(def in arb_definition(), library in arb_library()) {
        let model = generate_model(&def, &library, system());
        let mut seen = HashSet::new();
        for c in &model.security_controls {
            prop_assert!(seen.insert(c.name.clone()), "duplicate control {}", c.name);
        }
    }

    // mitigated_threats is exactly the set of threats of the originating type.
    #[test]
    fn mitigated_threats_complete(def in arb_definition(), library in arb_library()) {
        let model = generate_model(&def, &library, system());
        for control in &model.security_controls {
            let origin = CONTROL_MAPPINGS
                .iter()
                .find(|m| m.controls.iter().any(|t| t.name == control.name))
                .map(|m| m.threat_type);
            prop_assert!(origin.is_some(), "unknown control {}", control.name);
            let expected: Vec<String> = model
                .threats
                .iter()
                .filter(|t| Some(t.threat_type.as_str()) == origin)
                .map(|t| t.id.clone())
                .collect();
            prop_assert_eq!(&control.mitigated_threats, &expected);
        }
    }

    // Every mapped threat type present yields all of its controls.
    #[test]
    fn every_mapped_type_has_controls(def in arb_definition(), library in arb_library()) {
        let model = generate_model(&def, &library, system());
        let names: HashSet<&str> = model.security_controls.iter().map(|c| c.name.as_str()).collect();
        for t in &model.threats {
            if let Some(m) = CONTROL_MAPPINGS.iter().find(|m| m.threat_type == t.threat_type) {
                for template in m.controls {
                    prop_assert!(names.contains(template.name));
                }
            }
        }
    }
}
