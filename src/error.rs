//! Error types for sshush.
//!
//! All errors in sshush are represented by [`SshushError`], which covers
//! malformed host documents, source discovery problems, and I/O failures.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in sshush.
#[derive(Error, Debug)]
pub enum SshushError {
    /// A document or one of its values does not have the expected shape.
    ///
    /// `context` names where the problem was found (a group identifier or a
    /// reserved section), `message` describes what was wrong.
    #[error("Invalid config in {context}: {message}")]
    ShapeError { context: String, message: String },

    /// A source pattern matched no files.
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    /// No source documents were given on the command line or in settings.
    #[error("No source files specified")]
    NoSources,

    /// A source pattern is not a valid glob.
    #[error("Invalid source pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Could not determine the user's home directory.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// A settings file passed with `--config` does not exist.
    #[error("Settings file not found: {0}")]
    SettingsNotFound(PathBuf),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing failed.
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The TOML settings file could not be parsed.
    #[error("Failed to parse settings: {0}")]
    SettingsError(#[from] toml::de::Error),
}

impl SshushError {
    /// Build a [`SshushError::ShapeError`] for the given context.
    pub fn shape(context: impl Into<String>, message: impl ToString) -> Self {
        SshushError::ShapeError {
            context: context.into(),
            message: message.to_string(),
        }
    }
}

/// Convenient Result type alias for sshush operations.
pub type Result<T> = std::result::Result<T, SshushError>;
