//! Pipeline orchestration and output persistence.

use crate::attack_surface::{derive_interfaces, identify_attack_vectors};
use crate::catalog::{ControlCatalog, SurfaceRules};
use crate::config::Config;
use crate::controls::recommend_controls;
use crate::error::{Diagnostic, Error, WriteError};
use crate::lint::lint;
use crate::load::{load_components, load_library};
use crate::serialize::serialize;
use crate::synthesize::synthesize_threats;
use crate::types::*;
use std::path::Path;
use tracing::{info, warn};

/// Result of a generator run.
#[derive(Clone, Debug)]
pub struct Generated {
    /// The assembled threat model.
    pub model: ThreatModel,
    /// Non-fatal diagnostics: library absence and lint findings.
    pub warnings: Vec<Diagnostic>,
}

/// Derives threat models from system definitions against a fixed library and
/// fixed derivation tables.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    library: ThreatLibrary,
    rules: SurfaceRules,
    catalog: ControlCatalog,
}

impl Generator {
    pub fn new(library: ThreatLibrary) -> Self {
        Generator {
            library,
            ..Default::default()
        }
    }

    /// Replace the attack-surface rules.
    pub fn with_rules(mut self, rules: SurfaceRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the control catalog.
    pub fn with_catalog(mut self, catalog: ControlCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn library(&self) -> &ThreatLibrary {
        &self.library
    }

    /// Run every derivation stage in order and assemble the document.
    ///
    /// The result depends only on `def`, `system` and the generator's tables.
    pub fn generate(&self, def: &SystemDefinition, system: SystemInfo) -> Generated {
        let warnings = lint(def);
        for w in &warnings {
            warn!(code = %w.code, path = w.path.as_deref().unwrap_or(""), "{}", w.message);
        }

        let components: Vec<Component> = def.components.iter().map(Component::from).collect();
        info!("Added {} components to model", components.len());

        let interfaces = derive_interfaces(&def.connections);
        info!("Generated {} interfaces", interfaces.len());

        let attack_vectors = identify_attack_vectors(&components, &interfaces, &self.rules);
        info!("Identified {} attack vectors", attack_vectors.len());

        let threats = synthesize_threats(&components, &attack_vectors, &self.library);
        info!("Mapped {} threats to components", threats.len());

        let security_controls = recommend_controls(&threats, &self.catalog);
        info!("Suggested {} security controls", security_controls.len());

        Generated {
            model: ThreatModel {
                system,
                components,
                interfaces,
                attack_vectors,
                threats,
                security_controls,
            },
            warnings,
        }
    }
}

/// Convenience entry point for a pure in-memory run.
pub fn generate_model(
    def: &SystemDefinition,
    library: &ThreatLibrary,
    system: SystemInfo,
) -> ThreatModel {
    Generator::new(library.clone()).generate(def, system).model
}

/// Write serialized output to `path`.
///
/// # Errors
///
/// Returns a [`WriteError`] carrying the attempted path on any I/O failure.
pub fn write_model(path: &Path, text: &str) -> Result<(), WriteError> {
    std::fs::write(path, text).map_err(|e| WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!("Threat model written to {}", path.display());
    Ok(())
}

/// Load inputs, generate the model, serialize it and write it to
/// `config.output`.
///
/// # Errors
///
/// Fails on unreadable or unparsable components or library, on serialization
/// failure, and on write failure. A missing library is only a warning.
pub fn run(config: &Config, components: &Path) -> Result<Generated, Error> {
    let def = load_components(components)?;
    let loaded = load_library(&config.library)?;

    let mut generated = Generator::new(loaded.library).generate(&def, config.system_info());
    if let Some(w) = loaded.warning {
        generated.warnings.insert(0, w);
    }

    let text = serialize(&generated.model, config.output_format())?;
    write_model(&config.output, &text)?;
    Ok(generated)
}
