//! Error types for the scaffolding core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the core and the command helpers built on it.
///
/// Per-entry failures during a tree walk are not represented here: they are
/// logged and degrade the affected node instead of failing the walk.
#[derive(Debug, Error)]
pub enum Error {
    /// The resolved artifact name was empty after normalization
    #[error("Invalid name '{0}': the resolved name is empty")]
    InvalidName(String),

    /// The walk root is missing or is not a directory
    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The working directory is not a React Native CLI project
    #[error("Not a React Native CLI project: {}", .0.display())]
    NotReactNativeProject(PathBuf),

    /// The selected package manager is not available in PATH
    #[error("{manager} is not installed. Install it using: {hint}")]
    PackageManagerMissing {
        manager: &'static str,
        hint: &'static str,
    },

    /// A package manager subprocess exited unsuccessfully
    #[error("`{command}` failed with exit code {code}")]
    InstallFailed { command: String, code: i32 },

    /// A filesystem operation failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file could not be parsed or serialized
    #[error("Invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
