use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A structured non-fatal message produced while loading or linting input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(code: &str, path: Option<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: DiagnosticSeverity::Warning,
            code: code.to_string(),
            path,
            message: message.into(),
        }
    }
}

/// Diagnostic code for an absent threat library file.
pub const LIBRARY_MISSING: &str = "library_missing";

/// Error kind for load failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorKind {
    Io,
    Syntax,
    TypeMismatch,
}

/// Produced when an input document is missing or cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}{message}", path_prefix(.path))]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
    pub path: Option<PathBuf>,
}

impl LoadError {
    pub(crate) fn new(kind: LoadErrorKind, message: impl Into<String>) -> Self {
        LoadError {
            kind,
            message: message.into(),
            path: None,
        }
    }

    /// Attach the file the document was read from.
    pub fn at(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

fn path_prefix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("{}: ", p.display()),
        None => String::new(),
    }
}

/// Produced when the output document cannot be persisted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot write {}: {message}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub message: String,
}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SerializeError {
    pub message: String,
}

/// Produced when a configuration file cannot be read or parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("config {}: {message}", .path.display())]
pub struct ConfigError {
    pub path: PathBuf,
    pub message: String,
}

/// Combined error type for a generator run.
#[derive(Clone, Debug, Error)]
pub enum Error {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] SerializeError),
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
