//! Threat-model derivation for composite technical systems such as vehicle
//! architectures.
//!
//! A declarative description of components and their connections, plus an
//! optional library of threat templates, is turned into a structured threat
//! model:
//!
//! ```text
//! parse_components(yaml) → SystemDefinition ─┐
//! parse_library(yaml)    → ThreatLibrary    ─┤
//!                                            ▼
//!   derive_interfaces → identify_attack_vectors → synthesize_threats
//!                     → recommend_controls → ThreatModel → serialize(model)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use autothreat::{OutputFormat, SystemInfo, ThreatLibrary};
//!
//! let yaml = r#"
//! components:
//!   - id: ECU1
//!     name: Telematics Unit
//!     type: external_interface
//!   - id: GW1
//!     name: Central Gateway
//!     type: gateway
//! connections:
//!   - source: ECU1
//!     target: GW1
//!     protocol: wireless
//! "#;
//!
//! let def = autothreat::parse_components(yaml).expect("valid definition");
//! let system = SystemInfo {
//!     name: "Demo".to_string(),
//!     version: "1.0".to_string(),
//!     description: "Demo vehicle".to_string(),
//!     date_assessed: "2024-01-01".to_string(),
//! };
//! let model = autothreat::generate_model(&def, &ThreatLibrary::default(), system);
//! assert_eq!(model.interfaces[0].id, "IF-ECU1-GW1");
//! assert_eq!(model.attack_vectors.len(), 2);
//!
//! let out = autothreat::serialize(&model, OutputFormat::Yaml).expect("serializable");
//! assert!(out.contains("security_controls"));
//! ```

pub mod assemble;
pub mod attack_surface;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod enums;
pub mod error;
pub mod lint;
pub mod load;
pub mod parse;
pub mod serialize;
pub mod synthesize;
pub mod types;

pub use enums::*;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use assemble::{Generated, Generator, generate_model, run, write_model};
pub use attack_surface::{derive_interfaces, identify_attack_vectors};
pub use config::Config;
pub use controls::recommend_controls;
pub use lint::lint;
pub use load::{load_components, load_library};
pub use parse::{parse_components, parse_library};
pub use serialize::serialize;
pub use synthesize::synthesize_threats;
