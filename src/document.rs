//! Parsed host documents and reserved section extraction.
//!
//! A [`Document`] is the ordered top-level mapping of one YAML source.
//! The reserved sections `default` and `global` are taken out with
//! [`extract_section`] before the remaining entries are walked as groups.

use crate::config::{GroupEntry, SettingsMap, scalar_to_string, value_kind};
use crate::error::{Result, SshushError};
use serde_yaml::{Mapping, Value};

/// Reserved key holding settings applied to every group.
pub const DEFAULT_SECTION: &str = "default";
/// Reserved key holding settings for the trailing `Host *` block.
pub const GLOBAL_SECTION: &str = "global";

/// One parsed YAML source, with top-level keys in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Mapping,
}

impl Document {
    /// Parse a document from a YAML string.
    ///
    /// An empty document is valid and has no entries.
    ///
    /// # Errors
    ///
    /// - [`SshushError::YamlError`] if the YAML is malformed
    /// - [`SshushError::ShapeError`] if the root is not a mapping
    pub fn from_str(yaml: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(yaml)?;
        match root {
            Value::Null => Ok(Document::default()),
            Value::Mapping(entries) => Ok(Document { entries }),
            other => Err(SshushError::shape(
                "document",
                format!("expected a mapping at the top level, found {}", value_kind(&other)),
            )),
        }
    }

    /// Convert the remaining entries into host groups, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`SshushError::ShapeError`] naming the first group whose key or
    /// body does not match the group shape.
    pub fn into_groups(self) -> Result<Vec<GroupEntry>> {
        self.entries
            .into_iter()
            .map(|(key, value)| {
                let id = identifier(&key)?;
                GroupEntry::from_value(id.clone(), value).map_err(|e| SshushError::shape(id, e))
            })
            .collect()
    }
}

/// Remove `key` from `document`, returning the remaining document and the value.
///
/// The value is `None` when the key is absent, in which case the document is
/// returned unchanged. Order of the remaining entries is preserved.
pub fn extract_section(mut document: Document, key: &str) -> (Document, Option<Value>) {
    let value = document.entries.shift_remove(key);
    (document, value)
}

/// Extract a reserved section as settings, or `fallback` when absent or null.
///
/// # Errors
///
/// Returns [`SshushError::ShapeError`] if the section is not a flat mapping of
/// directives.
pub fn extract_settings(
    document: Document,
    key: &str,
    fallback: Option<SettingsMap>,
) -> Result<(Document, Option<SettingsMap>)> {
    let (document, value) = extract_section(document, key);
    match value {
        None | Some(Value::Null) => Ok((document, fallback)),
        Some(value) => {
            let settings: SettingsMap =
                serde_yaml::from_value(value).map_err(|e| SshushError::shape(key, e))?;
            Ok((document, Some(settings)))
        }
    }
}

fn identifier(key: &Value) -> Result<String> {
    scalar_to_string(key).ok_or_else(|| {
        SshushError::shape(
            "document",
            format!("group identifier must be a scalar, found {}", value_kind(key)),
        )
    })
}
