//! Rule validating the plugin name header.

use std::path::Path;

use readme_lint_core::utils::{find_line, normalize_loose};
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::companion;
use crate::pattern::is_match;

/// Rule id for plugin-name.
pub const ID: &str = "plugin-name";

/// Name shapes that are generic or squat on trademarks.
const INVALID_NAME_PATTERNS: &[&str] = &[
    r"(?i)^WordPress",
    r"(?i)^WP$",
    r"(?i)Plugin$", // Generic "Plugin" suffix
    r"(?i)^Test Plugin",
    r"(?i)^Sample Plugin",
    r"(?i)^Example Plugin",
    r"(?i)^My Plugin",
    r"(?i)^Plugin Name",
    r"(?i)^Your Plugin",
];

/// Checks that the `=== Plugin Name ===` header exists, is well formed,
/// is not a generic placeholder, and matches the companion plugin file's
/// own `Plugin Name:` header when one is supplied.
#[derive(Debug, Clone, Default)]
pub struct PluginName {
    plugin_file_name: Option<String>,
}

impl PluginName {
    /// Creates a new rule without a companion plugin file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the companion plugin file's name header at construction.
    /// An unreadable file means the consistency check is skipped.
    #[must_use]
    pub fn with_plugin_file(path: &Path) -> Self {
        let plugin_file_name = companion::load(path)
            .and_then(|content| companion::header_field(&content, "Plugin Name"));
        Self { plugin_file_name }
    }
}

impl Rule for PluginName {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Plugin name header must be present, properly formatted, and match plugin file"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let Some(name) = fields.scalar("name") else {
            return vec![Diagnostic::new(
                ID,
                Severity::Error,
                "Missing plugin name header. Expected format: === Plugin Name ===",
            )];
        };

        let name = name.trim();
        if name.is_empty() {
            return vec![Diagnostic::new(
                ID,
                Severity::Error,
                "Plugin name header is empty. Provide a meaningful plugin name.",
            )];
        }

        let mut diagnostics = Vec::new();

        if !is_match(r"(?m)^===\s+(.+?)\s+===\s*$", raw) {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    "Plugin name header must be in the format: === Plugin Name ===",
                )
                .with_line(find_line(raw, name)),
            );
        }

        if INVALID_NAME_PATTERNS.iter().any(|p| is_match(p, name)) {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Invalid plugin name: \"{name}\". Plugin names should not contain WordPress trademarks or be generic."
                    ),
                )
                .with_line(find_line(raw, name)),
            );
        }

        if let Some(file_name) = &self.plugin_file_name {
            if normalize_loose(name) != normalize_loose(file_name) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Warning,
                        format!(
                            "Plugin name mismatch: readme.txt has \"{name}\" but plugin file has \"{file_name}\""
                        ),
                    )
                    .with_line(find_line(raw, name)),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_lint_core::ReadmeParser;
    use std::io::Write;

    fn check(content: &str) -> Vec<Diagnostic> {
        let fields = ReadmeParser::new().parse(content);
        PluginName::new().check(&fields, content)
    }

    #[test]
    fn good_name_passes() {
        assert!(check("=== Fast Forms ===\nStable tag: 1.0\n").is_empty());
    }

    #[test]
    fn missing_header_is_an_error() {
        let diags = check("Stable tag: 1.0\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert!(diags[0].message.contains("Missing plugin name header"));
    }

    #[test]
    fn generic_name_is_an_error() {
        for name in ["My Plugin", "WordPress Helper", "Backup Plugin"] {
            let content = format!("=== {name} ===\n");
            let diags = check(&content);
            assert!(
                diags
                    .iter()
                    .any(|d| d.message.contains("Invalid plugin name")),
                "name {name} should be flagged"
            );
        }
    }

    #[test]
    fn mismatch_with_plugin_file_is_a_warning() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "<?php\n/**\n * Plugin Name: Fast Forms Pro\n */").expect("write");

        let content = "=== Fast Forms ===\n";
        let fields = ReadmeParser::new().parse(content);
        let diags = PluginName::with_plugin_file(file.path()).check(&fields, content);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("Plugin name mismatch"));
    }

    #[test]
    fn name_match_ignores_case_and_spacing() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "<?php\n/**\n * Plugin Name: fast  forms\n */").expect("write");

        let content = "=== Fast Forms ===\n";
        let fields = ReadmeParser::new().parse(content);
        let diags = PluginName::with_plugin_file(file.path()).check(&fields, content);
        assert!(diags.is_empty());
    }

    #[test]
    fn unreadable_plugin_file_skips_the_comparison() {
        let content = "=== Fast Forms ===\n";
        let fields = ReadmeParser::new().parse(content);
        let diags = PluginName::with_plugin_file(Path::new("/nonexistent/plugin.php"))
            .check(&fields, content);
        assert!(diags.is_empty());
    }
}
