//! Document to SSH config pipeline.
//!
//! For each document: extract `default` and `global`, resolve every group in
//! declaration order, and render its host blocks. The `Host *` block built
//! from all `global` sections is appended once, after every document.

use crate::config::SettingsMap;
use crate::document::{DEFAULT_SECTION, Document, GLOBAL_SECTION, extract_settings};
use crate::error::Result;
use crate::render::{self, GlobalSettings};
use crate::resolver::Resolver;
use tracing::debug;

/// Render the group blocks of one document.
///
/// The document's `global` section is folded into `globals`; its `Host *`
/// block is not rendered here.
///
/// # Errors
///
/// Returns [`crate::SshushError::ShapeError`] if a reserved section or any
/// group is malformed. Nothing is rendered for the document in that case.
pub fn process_document(document: Document, globals: &mut GlobalSettings) -> Result<Vec<String>> {
    let (document, defaults) = extract_settings(document, DEFAULT_SECTION, Some(SettingsMap::new()))?;
    let (document, global) = extract_settings(document, GLOBAL_SECTION, None)?;

    let groups = document.into_groups()?;
    debug!(groups = groups.len(), "processing document");

    let mut resolver = Resolver::new(defaults.unwrap_or_default());
    let mut lines = Vec::new();
    for group in groups {
        let settings = resolver.resolve(&group);
        lines.extend(render::render_group(group, &settings));
    }

    globals.absorb(global);
    Ok(lines)
}

/// Accumulates rendered output across one or more documents.
#[derive(Debug, Default)]
pub struct Generator {
    lines: Vec<String>,
    globals: GlobalSettings,
}

impl Generator {
    /// Create an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a document, appending its group blocks.
    pub fn add_document(&mut self, document: Document) -> Result<()> {
        let lines = process_document(document, &mut self.globals)?;
        self.lines.extend(lines);
        Ok(())
    }

    /// Parse and process a YAML string.
    pub fn add_yaml(&mut self, yaml: &str) -> Result<()> {
        self.add_document(Document::from_str(yaml)?)
    }

    /// Finish with the global block and return the full config text.
    ///
    /// Lines are newline-joined with one trailing newline. No output gives an
    /// empty string.
    pub fn finish(self) -> String {
        let mut lines = self.lines;
        lines.extend(self.globals.render());
        if lines.is_empty() {
            return String::new();
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

/// Render a single YAML document to SSH config text.
pub fn generate(yaml: &str) -> Result<String> {
    let mut generator = Generator::new();
    generator.add_yaml(yaml)?;
    Ok(generator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SshushError;

    #[test]
    fn test_end_to_end() {
        let yaml = "\
default: {Port: 22}
web: {Config: {User: deploy}, Hosts: {app1: 10.0.0.1}}
global: {ForwardAgent: \"yes\"}
";
        let expected = "\
# web
Host app1
    Port 22
    User deploy
    HostName 10.0.0.1

Host *
    ForwardAgent yes
";
        assert_eq!(generate(yaml).unwrap(), expected);
    }

    #[test]
    fn test_extends_example() {
        let yaml = "\
base: {Config: {Port: 22}, Hosts: {}}
child: {Extends: base, Config: {User: x}, Hosts: {h: h}}
";
        let expected = "\
# base
# child
Host h
    Port 22
    User x
    HostName h

";
        assert_eq!(generate(yaml).unwrap(), expected);
    }

    #[test]
    fn test_no_global_no_wildcard_block() {
        let out = generate("web: {Hosts: [a]}").unwrap();
        assert!(!out.contains("Host *"));
    }

    #[test]
    fn test_groups_keep_declaration_order() {
        let out = generate("zeta: {Hosts: [z]}\nalpha: {Hosts: [a]}\nmid: {Hosts: [m]}").unwrap();
        let comments: Vec<_> = out.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(comments, ["# zeta", "# alpha", "# mid"]);
    }

    #[test]
    fn test_reserved_sections_anywhere() {
        let out = generate("global: {A: b}\nweb: {Hosts: [w]}\ndefault: {Port: 22}").unwrap();
        assert_eq!(out, "# web\nHost w\n    Port 22\n    HostName w\n\nHost *\n    A b\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(generate("").unwrap(), "");
    }

    #[test]
    fn test_missing_hosts_is_shape_error() {
        let err = generate("web: {Config: {User: x}}").unwrap_err();
        assert!(matches!(err, SshushError::ShapeError { ref context, .. } if context == "web"));
    }

    #[test]
    fn test_prefix_must_be_string() {
        let err = generate("web: {Prefix: [a], Hosts: [h]}").unwrap_err();
        assert!(matches!(err, SshushError::ShapeError { .. }));
    }

    #[test]
    fn test_pattern_list_must_be_strings() {
        let err = generate("web: {Hosts: [[a], b]}").unwrap_err();
        assert!(matches!(err, SshushError::ShapeError { .. }));
    }

    #[test]
    fn test_numeric_alias_renders() {
        assert_eq!(
            generate("web: {Hosts: {1234: h}}").unwrap(),
            "# web\nHost 1234\n    HostName h\n\n"
        );
    }

    #[test]
    fn test_bad_host_detail_names_alias() {
        let err = generate("web: {Hosts: {ok: 10.0.0.1, h: 10}}").unwrap_err();
        match err {
            SshushError::ShapeError { context, message } => {
                assert_eq!(context, "web");
                assert!(message.contains("host h"), "{}", message);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_extends_must_be_string() {
        let err = generate("web: {Extends: 5, Hosts: [h]}").unwrap_err();
        assert!(matches!(err, SshushError::ShapeError { ref context, .. } if context == "web"));
    }

    #[test]
    fn test_config_must_be_mapping() {
        let err = generate("web: {Config: [a], Hosts: [h]}").unwrap_err();
        assert!(matches!(err, SshushError::ShapeError { ref context, .. } if context == "web"));
    }

    #[test]
    fn test_group_identifier_must_be_scalar() {
        let err = generate("? [a, b]\n: {Hosts: [h]}").unwrap_err();
        assert!(matches!(err, SshushError::ShapeError { ref context, .. } if context == "document"));
    }

    #[test]
    fn test_default_must_be_mapping() {
        let err = generate("default: [Port]\nweb: {Hosts: [h]}").unwrap_err();
        assert!(matches!(err, SshushError::ShapeError { ref context, .. } if context == "default"));
    }

    #[test]
    fn test_extends_does_not_cross_documents() {
        let mut generator = Generator::new();
        generator.add_yaml("a: {Config: {User: x}, Hosts: {}}").unwrap();
        generator.add_yaml("b: {Extends: a, Hosts: [h]}").unwrap();
        assert_eq!(generator.finish(), "# a\n# b\nHost h\n    HostName h\n\n");
    }

    #[test]
    fn test_defaults_are_per_document() {
        let mut generator = Generator::new();
        generator.add_yaml("default: {Port: 22}\na: {Hosts: [a]}").unwrap();
        generator.add_yaml("b: {Hosts: [b]}").unwrap();
        let out = generator.finish();
        assert_eq!(
            out,
            "# a\nHost a\n    Port 22\n    HostName a\n\n# b\nHost b\n    HostName b\n\n"
        );
    }

    #[test]
    fn test_globals_accumulate_across_documents() {
        let mut generator = Generator::new();
        generator.add_yaml("global: {ForwardAgent: \"no\", User: me}").unwrap();
        generator.add_yaml("global: {ForwardAgent: \"yes\"}").unwrap();
        assert_eq!(generator.finish(), "Host *\n    ForwardAgent yes\n    User me\n");
    }
}
