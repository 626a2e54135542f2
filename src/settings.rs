//! Tool settings file.
//!
//! An optional TOML file can supply the sources and destination so that
//! `sshush` runs without arguments:
//!
//! ```toml
//! # ~/.config/sshush/config.toml
//! sources = ["~/.ssh/hosts/*.yml"]
//! dest = "~/.ssh/config"
//! ```
//!
//! Command-line arguments take precedence over anything set here.

use serde::Deserialize;

/// Settings read from `sshush.toml` or `~/.config/sshush/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSettings {
    /// Source YAML files or glob patterns.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Destination SSH config path.
    #[serde(default)]
    pub dest: Option<String>,
}

impl ToolSettings {
    /// Parse settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `toml::de::Error` if the TOML is malformed or has unknown keys.
    pub fn from_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
