//! Configuration types for sshush.
//!
//! This module defines the data structures that map to the YAML host format.
//! The document uses a simple structure where:
//!
//! - `default` and `global` are reserved top-level keys
//! - Everything else is treated as a host group
//!
//! # Document Format
//!
//! ```yaml
//! default:
//!   User: deploy
//!
//! web:
//!   Prefix: prod-
//!   Config:
//!     Port: 2222
//!   Hosts:
//!     app1: 10.0.0.1
//!     app2:
//!       HostName: 10.0.0.2
//!       IdentityFile: [~/.ssh/a, ~/.ssh/b]
//!
//! legacy:
//!   Extends: web
//!   Hosts:
//!     - old*.example.com
//!
//! global:
//!   ForwardAgent: "no"
//! ```
//!
//! Key order is significant everywhere: it is the order directives are
//! rendered in, so every mapping here is an [`IndexMap`].

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_yaml::Value;
use std::fmt;

/// Ordered directive name to value mapping.
pub type SettingsMap = IndexMap<String, DirectiveValue>;

/// A single scalar directive value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, expecting = "a string, number or boolean")]
pub enum Scalar {
    /// `yes`/`no` style values are plain strings in YAML 1.2; this covers `true`/`false`.
    Bool(bool),
    /// Integers and floats, e.g. `Port: 22`.
    Number(serde_yaml::Number),
    /// Any string value.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Directive value that accepts either a single scalar or a list of scalars.
///
/// This allows flexible config syntax:
/// ```yaml
/// IdentityFile: ~/.ssh/id_ed25519
/// # or
/// IdentityFile: [~/.ssh/id_ed25519, ~/.ssh/id_rsa]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(
    untagged,
    expecting = "a directive value (a scalar or a sequence of scalars)"
)]
pub enum DirectiveValue {
    /// Rendered as one directive line.
    Single(Scalar),
    /// Rendered as one directive line per element, in order.
    Multiple(Vec<Scalar>),
}

impl DirectiveValue {
    /// Convert to a `Vec<String>`, normalizing both variants.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            DirectiveValue::Single(s) => vec![s.to_string()],
            DirectiveValue::Multiple(v) => v.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<&str> for DirectiveValue {
    fn from(s: &str) -> Self {
        DirectiveValue::Single(s.into())
    }
}

/// Per-host overrides attached to an alias in a `Hosts` mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(
    untagged,
    expecting = "a host detail (nothing, a hostname, or a mapping of directives)"
)]
pub enum HostDetail {
    /// `alias:` with no value.
    NoOverride,
    /// `alias: 10.0.0.1`, shorthand for `{ HostName: 10.0.0.1 }`.
    BareHostname(String),
    /// `alias: { User: bob, Port: 2222 }`.
    OverrideMap(SettingsMap),
}

impl HostDetail {
    /// The directive overrides this detail contributes.
    pub fn into_settings(self) -> SettingsMap {
        match self {
            HostDetail::NoOverride => SettingsMap::new(),
            HostDetail::BareHostname(name) => {
                let mut settings = SettingsMap::new();
                settings.insert("HostName".to_string(), name.as_str().into());
                settings
            }
            HostDetail::OverrideMap(settings) => settings,
        }
    }
}

/// The `Hosts` entry of a group, in either of its two accepted shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Hosts {
    /// `Hosts: [web1, db*.internal]`
    PatternList(Vec<String>),
    /// `Hosts: { web1: 10.0.0.1, db1: { User: postgres } }`
    AliasMap(IndexMap<String, HostDetail>),
}

impl Hosts {
    /// Build from a YAML value.
    ///
    /// Alias keys may be any scalar (`1234:` is the alias `1234`). Errors name
    /// the offending pattern or alias.
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Sequence(patterns) => patterns
                .into_iter()
                .enumerate()
                .map(|(i, pattern)| match pattern {
                    Value::String(s) => Ok(s),
                    other => Err(format!(
                        "host pattern #{} must be a string, found {}",
                        i + 1,
                        value_kind(&other)
                    )),
                })
                .collect::<Result<_, _>>()
                .map(Hosts::PatternList),
            Value::Mapping(entries) => {
                let mut map = IndexMap::with_capacity(entries.len());
                for (key, detail) in entries {
                    let alias = scalar_to_string(&key).ok_or_else(|| {
                        format!("host alias must be a scalar, found {}", value_kind(&key))
                    })?;
                    let detail: HostDetail = serde_yaml::from_value(detail)
                        .map_err(|e| format!("host {}: {}", alias, e))?;
                    map.insert(alias, detail);
                }
                Ok(Hosts::AliasMap(map))
            }
            other => Err(format!(
                "expected a sequence of host patterns or a mapping of alias to host detail, found {}",
                value_kind(&other)
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Hosts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Hosts::from_value(value).map_err(de::Error::custom)
    }
}

/// Render a scalar YAML key as a string, `None` for collections and null.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Short description of a YAML value's shape, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// A named host group.
///
/// # Example
///
/// ```yaml
/// staging:
///   Extends: production
///   Prefix: stg-
///   Config:
///     User: ci
///   Hosts:
///     web1: 10.1.0.1
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupEntry {
    /// Group identifier, taken from the document key.
    #[serde(skip)]
    pub id: String,
    /// Identifier of an earlier group whose resolved settings this one inherits.
    #[serde(rename = "Extends", default)]
    pub extends: Option<String>,
    /// String prepended to every host alias in this group.
    #[serde(rename = "Prefix", default)]
    pub prefix: Option<String>,
    /// Group-wide directives. `None` and `Config: ~` both mean empty.
    #[serde(rename = "Config", default)]
    pub config: Option<SettingsMap>,
    /// Hosts in this group.
    #[serde(rename = "Hosts")]
    pub hosts: Hosts,
}

impl GroupEntry {
    /// Deserialize a group body from its YAML value.
    ///
    /// # Errors
    ///
    /// Returns `serde_yaml::Error` if the value is not a mapping, lacks `Hosts`,
    /// or any field has the wrong shape.
    pub fn from_value(id: String, value: serde_yaml::Value) -> Result<Self, serde_yaml::Error> {
        let mut entry: GroupEntry = serde_yaml::from_value(value)?;
        entry.id = id;
        Ok(entry)
    }

    /// Group-wide directives, empty when `Config` was absent.
    pub fn config(&self) -> SettingsMap {
        self.config.clone().unwrap_or_default()
    }
}

/// Shallow merge: keys in `over` replace keys in `base`.
///
/// A replaced key keeps the position it had in `base`; new keys are appended
/// in `over`'s order. Values are never merged recursively.
pub fn merge(base: &SettingsMap, over: &SettingsMap) -> SettingsMap {
    let mut merged = base.clone();
    for (key, value) in over {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
