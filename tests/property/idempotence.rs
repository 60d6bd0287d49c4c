use super::common::*;
use autothreat::enums::OutputFormat;
use autothreat::{ThreatModel, generate_model, serialize};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Two runs over identical input serialize byte-identically.
    #[test]
    fn repeated_runs_identical(def in arb_definition(), library in arb_library()) {
        for format in [OutputFormat::Yaml, OutputFormat::Json] {
            let a = serialize(&generate_model(&def, &library, system()), format).unwrap();
            let b = serialize(&generate_model(&def, &library, system()), format).unwrap();
            prop_assert_eq!(a, b);
        }
    }

    // YAML output parses back into the same model with top-level keys in document order.
    #[test]
    fn yaml_output_reparses(def in arb_definition(), library in arb_library()) {
        let model = generate_model(&def, &library, system());
        let yaml = serialize(&model, OutputFormat::Yaml).unwrap();

        let value: serde_json::Value = serde_saphyr::from_str(&yaml).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        prop_assert_eq!(
            keys,
            vec!["system", "components", "interfaces", "attack_vectors", "threats", "security_controls"]
        );

        let back: ThreatModel = serde_json::from_value(value).unwrap();
        prop_assert_eq!(back, model);
    }
}
