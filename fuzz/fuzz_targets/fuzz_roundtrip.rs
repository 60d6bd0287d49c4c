#![no_main]

use autothreat::{OutputFormat, SystemInfo, ThreatLibrary, ThreatModel};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let def = match autothreat::parse_components(&s) {
        Ok(d) => d,
        Err(_) => return,
    };

    let system = SystemInfo {
        name: "fuzz".to_string(),
        version: "1.0".to_string(),
        description: "fuzz".to_string(),
        date_assessed: "2024-01-01".to_string(),
    };
    let model = autothreat::generate_model(&def, &ThreatLibrary::default(), system);

    let yaml = match autothreat::serialize(&model, OutputFormat::Yaml) {
        Ok(y) => y,
        Err(_) => return,
    };

    // Anything we emit must parse back into the same model.
    let value: serde_json::Value = match serde_saphyr::from_str(&yaml) {
        Ok(v) => v,
        Err(e) => panic!("serialized YAML does not re-parse: {}\n{}", e, yaml),
    };
    let back: ThreatModel = serde_json::from_value(value)
        .unwrap_or_else(|e| panic!("serialized YAML lost structure: {}\n{}", e, yaml));
    assert_eq!(back, model, "roundtrip changed the model");
});
