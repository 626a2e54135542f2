//! SSH config block rendering.
//!
//! Produces the lines of the final config file. A group renders as a comment
//! followed by one `Host` block per alias:
//!
//! ```text
//! # web
//! Host prod-app1
//!     Port 22
//!     HostName 10.0.0.1
//!
//! ```
//!
//! and the accumulated global settings render as a trailing `Host *` block.

use crate::config::{GroupEntry, HostDetail, SettingsMap, merge};
use crate::hosts;

/// Indentation for directive lines inside a `Host` block.
const INDENT: &str = "    ";

/// Render one group's host blocks.
///
/// `settings` is the group's resolved settings; each host's detail is merged
/// on top of it. Wildcard aliases ignore their detail.
pub fn render_group(group: GroupEntry, settings: &SettingsMap) -> Vec<String> {
    let mut lines = vec![format!("# {}", group.id)];
    let prefix = group.prefix.unwrap_or_default();

    for (alias, detail) in hosts::normalize(group.hosts) {
        let alias = format!("{}{}", prefix, alias);
        let detail = if hosts::is_pattern(&alias) {
            HostDetail::NoOverride
        } else {
            detail
        };

        lines.push(format!("Host {}", alias));
        lines.extend(directive_lines(&merge(settings, &detail.into_settings())));
        lines.push(String::new());
    }

    lines
}

/// Render `settings` as indented directive lines, one per value.
pub fn directive_lines(settings: &SettingsMap) -> Vec<String> {
    settings
        .iter()
        .flat_map(|(key, value)| {
            value
                .to_vec()
                .into_iter()
                .map(move |v| format!("{}{} {}", INDENT, key, v))
        })
        .collect()
}

/// Global settings accumulated across every processed document.
///
/// Later documents override earlier same-named keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalSettings {
    settings: Option<SettingsMap>,
}

impl GlobalSettings {
    /// Fold one document's `global` section into the accumulator.
    pub fn absorb(&mut self, global: Option<SettingsMap>) {
        let Some(global) = global else {
            return;
        };
        self.settings = Some(match self.settings.take() {
            Some(existing) => merge(&existing, &global),
            None => global,
        });
    }

    /// Render the `Host *` block, or nothing when there are no global settings.
    pub fn render(&self) -> Vec<String> {
        match &self.settings {
            Some(settings) if !settings.is_empty() => {
                let mut lines = vec!["Host *".to_string()];
                lines.extend(directive_lines(settings));
                lines
            }
            _ => Vec::new(),
        }
    }
}
