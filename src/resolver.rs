//! Group settings resolution.
//!
//! Each group's effective settings are built by layering, later wins:
//!
//! 1. the document's `default` section
//! 2. the resolved settings of the group named by `Extends`, if any
//! 3. the group's own `Config`
//!
//! `Extends` only sees groups resolved earlier in the same document, so the
//! inherited settings are already fully merged and chains resolve transitively.
//!
//! # Example
//!
//! ```yaml
//! default:
//!   Port: 22
//!
//! base:
//!   Config:
//!     User: admin
//!   Hosts: {}
//!
//! child:
//!   Extends: base          # inherits Port 22 and User admin
//!   Config:
//!     IdentityFile: ~/.ssh/child
//!   Hosts: [child1]
//! ```

use crate::config::{GroupEntry, SettingsMap, merge};
use std::collections::HashMap;
use tracing::debug;

/// Resolves group settings for one document, remembering each result for
/// later `Extends` lookups.
#[derive(Debug, Default)]
pub struct Resolver {
    defaults: SettingsMap,
    resolved: HashMap<String, SettingsMap>,
}

impl Resolver {
    /// Create a resolver seeded with the document's default settings.
    pub fn new(defaults: SettingsMap) -> Self {
        Resolver {
            defaults,
            resolved: HashMap::new(),
        }
    }

    /// Compute and record the effective settings for `group`.
    ///
    /// An `Extends` naming a group that has not been resolved yet (unknown, or
    /// declared later in the document) is ignored.
    pub fn resolve(&mut self, group: &GroupEntry) -> SettingsMap {
        let empty = SettingsMap::new();
        let inherited = match group.extends.as_deref() {
            Some(parent) => match self.resolved.get(parent) {
                Some(settings) => settings,
                None => {
                    debug!(group = %group.id, extends = parent, "Extends target not resolved, ignoring");
                    &empty
                }
            },
            None => &empty,
        };

        let settings = merge(&merge(&self.defaults, inherited), &group.config());
        debug!(group = %group.id, directives = settings.len(), "resolved group settings");

        self.resolved.insert(group.id.clone(), settings.clone());
        settings
    }
}
