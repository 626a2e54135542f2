//! Host list normalization.
//!
//! Groups may declare hosts as a list of patterns or as a mapping of alias to
//! detail. Both are normalized to an ordered alias to [`HostDetail`] mapping:
//!
//! ```yaml
//! Hosts:
//!   - web1.example.com
//!   - db*.example.com
//! ```
//!
//! is treated as
//!
//! ```yaml
//! Hosts:
//!   web1.example.com: web1.example.com
//!   db*.example.com: db*.example.com
//! ```

use crate::config::{HostDetail, Hosts};
use indexmap::IndexMap;

/// Character that marks an alias as a pattern rather than a concrete host.
pub const WILDCARD: char = '*';

/// Convert a group's `Hosts` into an ordered alias to detail mapping.
///
/// Each pattern-list entry refers to itself as its hostname.
pub fn normalize(hosts: Hosts) -> IndexMap<String, HostDetail> {
    match hosts {
        Hosts::PatternList(patterns) => patterns
            .into_iter()
            .map(|p| (p.clone(), HostDetail::BareHostname(p)))
            .collect(),
        Hosts::AliasMap(map) => map,
    }
}

/// Whether an alias is a wildcard pattern.
///
/// Wildcard aliases never take per-host overrides.
pub fn is_pattern(alias: &str) -> bool {
    alias.contains(WILDCARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_list_is_self_referential() {
        let normalized = normalize(Hosts::PatternList(vec!["b".into(), "a".into()]));
        let entries: Vec<_> = normalized.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("b".to_string(), HostDetail::BareHostname("b".into())),
                ("a".to_string(), HostDetail::BareHostname("a".into())),
            ]
        );
    }

    #[test]
    fn test_alias_map_passes_through() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), HostDetail::NoOverride);
        map.insert("y".to_string(), HostDetail::BareHostname("10.0.0.1".into()));
        assert_eq!(normalize(Hosts::AliasMap(map.clone())), map);
    }

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("db*.internal"));
        assert!(is_pattern("*"));
        assert!(!is_pattern("db1.internal"));
        assert!(!is_pattern("db?.internal"));
    }
}
