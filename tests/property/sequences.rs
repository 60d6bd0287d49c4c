use super::common::*;
use autothreat::generate_model;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Attack vector, threat and control ids are each 1..n without gaps.
    #[test]
    fn ids_are_gapless(def in arb_definition(), library in arb_library()) {
        let model = generate_model(&def, &library, system());

        let av_ids: Vec<String> = model.attack_vectors.iter().map(|a| a.id.clone()).collect();
        let threat_ids: Vec<String> = model.threats.iter().map(|t| t.id.clone()).collect();
        let control_ids: Vec<String> = model.security_controls.iter().map(|c| c.id.clone()).collect();
        prop_assert!(is_gapless(&av_ids, "AV-"), "attack vectors: {:?}", av_ids);
        prop_assert!(is_gapless(&threat_ids, "T-"), "threats: {:?}", threat_ids);
        prop_assert!(is_gapless(&control_ids, "SC-"), "controls: {:?}", control_ids);
    }

    // One vector per rule hit, in rule order: external, wireless, physical.
    #[test]
    fn vector_count_and_order(def in arb_definition()) {
        let model = generate_model(&def, &Default::default(), system());

        let external = def.components.iter().filter(|c| c.component_type == "external_interface").count();
        let wireless = def
            .connections
            .iter()
            .filter(|c| c.protocol.as_deref().unwrap_or("").to_lowercase().contains("wireless"))
            .count();
        let physical = def
            .components
            .iter()
            .filter(|c| c.component_type.to_lowercase().contains("physical"))
            .count();
        prop_assert_eq!(model.attack_vectors.len(), external + wireless + physical);

        let kinds: Vec<&str> = model
            .attack_vectors
            .iter()
            .map(|a| a.threat_types[1].as_str())
            .collect();
        let mut expected = vec!["tampering"; external];
        expected.extend(vec!["denial_of_service"; wireless]);
        expected.extend(vec!["information_disclosure"; physical]);
        prop_assert_eq!(kinds, expected);

        // Empty library: two generic threats per vector, nothing from the library phase.
        prop_assert_eq!(model.threats.len(), model.attack_vectors.len() * 2);
        for t in &model.threats {
            prop_assert!(t.description.starts_with("Generic "));
        }
    }
}
