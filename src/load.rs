//! File-level loading of input documents.

use crate::error::{Diagnostic, LIBRARY_MISSING, LoadError, LoadErrorKind};
use crate::parse::{parse_components, parse_library};
use crate::types::{SystemDefinition, ThreatLibrary};
use std::path::Path;
use tracing::{info, warn};

/// Result of [`load_library`].
#[derive(Clone, Debug)]
pub struct LibraryLoad {
    pub library: ThreatLibrary,
    /// Set when the library file was absent and an empty library substituted.
    pub warning: Option<Diagnostic>,
}

/// Read and parse a component/connection document.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or parsed.
pub fn load_components(path: &Path) -> Result<SystemDefinition, LoadError> {
    let text = read(path)?;
    let def = parse_components(&text).map_err(|e| e.at(path))?;
    info!(
        path = %path.display(),
        components = def.components.len(),
        connections = def.connections.len(),
        "loaded component definitions"
    );
    Ok(def)
}

/// Read and parse a threat library.
///
/// A missing file is not an error: an empty library is returned together with
/// a `library_missing` warning.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file exists but cannot be read or parsed.
pub fn load_library(path: &Path) -> Result<LibraryLoad, LoadError> {
    if !path.exists() {
        let message = format!(
            "threat library {} not found, using generic threats",
            path.display()
        );
        warn!("{}", message);
        return Ok(LibraryLoad {
            library: ThreatLibrary::default(),
            warning: Some(Diagnostic::warning(
                LIBRARY_MISSING,
                Some(path.display().to_string()),
                message,
            )),
        });
    }

    let text = read(path)?;
    let library = parse_library(&text).map_err(|e| e.at(path))?;
    info!(path = %path.display(), threats = library.threats.len(), "loaded threat library");
    Ok(LibraryLoad {
        library,
        warning: None,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path)
        .map_err(|e| LoadError::new(LoadErrorKind::Io, e.to_string()).at(path))
}
