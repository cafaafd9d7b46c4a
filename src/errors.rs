//! Typed error definitions for scrubname.
//! A small set of well-known failure modes outside the per-path results
//! (config, template creation, logging setup) for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Refusing to use {0}: an ancestor directory is a symlink")]
    SymlinkAncestor(PathBuf),

    #[error("Could not determine a config directory for this user")]
    NoConfigDir,

    #[error("Unknown log level '{0}' (expected quiet, normal, info or debug)")]
    UnknownLogLevel(String),
}

impl ScrubError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            ScrubError::ConfigParse { .. } => 10,
            ScrubError::ConfigExists(_) => 11,
            ScrubError::SymlinkAncestor(_) => 12,
            ScrubError::NoConfigDir => 13,
            ScrubError::UnknownLogLevel(_) => 20,
        }
    }
}
