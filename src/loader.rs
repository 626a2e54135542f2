//! File discovery, loading and writing.
//!
//! Handles finding the settings file, expanding source patterns, reading host
//! documents, and writing the generated config. The settings search order is:
//!
//! 1. `--config <PATH>` (must exist)
//! 2. `./sshush.toml`
//! 3. `$XDG_CONFIG_HOME/sshush/config.toml`
//! 4. `~/.config/sshush/config.toml`

use crate::document::Document;
use crate::error::{Result, SshushError};
use crate::interpolate::expand_path;
use crate::settings::ToolSettings;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Find an existing settings file, if any.
///
/// Checks locations in order of preference:
/// 1. `sshush.toml` in the current directory
/// 2. `$XDG_CONFIG_HOME/sshush/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/sshush/config.toml`
pub fn find_settings_path() -> Option<PathBuf> {
    let local = PathBuf::from("sshush.toml");
    if local.exists() {
        return Some(local);
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("sshush").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    let path = dirs::home_dir()?
        .join(".config")
        .join("sshush")
        .join("config.toml");
    path.exists().then_some(path)
}

/// Load tool settings from an explicit path, or from the first discovered file.
///
/// Missing discovered files are not an error; the settings are then empty.
///
/// # Errors
///
/// - [`SshushError::SettingsNotFound`] if `explicit` is given but doesn't exist
/// - [`SshushError::IoError`] if reading fails
/// - [`SshushError::SettingsError`] if TOML parsing fails
pub fn load_settings(explicit: Option<&Path>) -> Result<ToolSettings> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(SshushError::SettingsNotFound(path.to_path_buf()));
        }
        Some(path) => path.to_path_buf(),
        None => match find_settings_path() {
            Some(path) => path,
            None => return Ok(ToolSettings::default()),
        },
    };

    debug!(path = %path.display(), "loading settings");
    let contents = std::fs::read_to_string(&path)?;
    Ok(ToolSettings::from_str(&contents)?)
}

/// Default destination for the generated config: `~/.ssh/config`.
///
/// # Errors
///
/// Returns [`SshushError::NoHomeDir`] if the home directory cannot be determined.
pub fn default_destination() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(SshushError::NoHomeDir)?;
    Ok(home.join(".ssh").join("config"))
}

/// Expand source patterns into concrete file paths.
///
/// Each pattern has `~` and environment variables expanded, then is matched as
/// a glob. Matches keep the pattern order; within a pattern they are sorted.
///
/// # Errors
///
/// - [`SshushError::InvalidPattern`] if a pattern is not a valid glob
/// - [`SshushError::SourceNotFound`] if a pattern matches nothing
pub fn expand_sources(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let expanded = expand_path(pattern)?;
        let matches = glob::glob(&expanded).map_err(|e| SshushError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        let mut found = Vec::new();
        for entry in matches {
            let path =
                entry.map_err(|e| std::io::Error::new(e.error().kind(), e.to_string()))?;
            if path.is_file() {
                found.push(path);
            }
        }

        if found.is_empty() {
            return Err(SshushError::SourceNotFound(pattern.clone()));
        }
        found.sort();
        paths.extend(found);
    }

    Ok(paths)
}

/// Read and parse one host document.
///
/// # Errors
///
/// - [`SshushError::IoError`] if reading fails
/// - [`SshushError::YamlError`] or [`SshushError::ShapeError`] if the document is malformed
pub fn load_document(path: &Path) -> Result<Document> {
    info!(source = %path.display(), "reading source");
    let contents = std::fs::read_to_string(path)?;
    Document::from_str(&contents)
}

/// Write the generated config in a single operation, creating the parent
/// directory if necessary.
pub fn write_config(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    info!(dest = %path.display(), bytes = contents.len(), "wrote config");
    Ok(())
}
