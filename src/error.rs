//! Application-level error types.

use crate::validation::PathError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Directive parsing or evaluation failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// Reading a manifest or config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest is not valid YAML or JSON
    #[error("Failed to parse manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),

    /// Rendering output as JSON failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest contained no object
    #[error("Manifest is empty")]
    EmptyManifest,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The config file is not valid TOML for our schema
    #[error("Failed to parse config: {0}")]
    ParsingFailed(String),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, ValidatorError>;
