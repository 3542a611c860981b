//! Rule validating the license field.

use std::path::Path;

use readme_lint_core::utils::{find_line, normalize_loose};
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::companion;

/// Rule id for license.
pub const ID: &str = "license";

/// Licenses the directory accepts.
const VALID_LICENSES: &[&str] = &[
    "GPL2",
    "GPL2+",
    "GPL3",
    "GPL3+",
    "GPLv2",
    "GPLv2+",
    "GPLv2 or later",
    "GPLv3",
    "GPLv3+",
    "GPLv3 or later",
    "MIT",
    "BSD",
    "Apache",
    "Apache 2.0",
    "LGPL",
    "LGPL2.1",
    "LGPL3",
];

/// Checks that the license is present, accepted, and consistent with the
/// companion plugin file's `License:` header when one is supplied.
#[derive(Debug, Clone, Default)]
pub struct License {
    plugin_license: Option<String>,
}

impl License {
    /// Creates a new rule without a companion plugin file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the companion plugin file's license header at construction.
    /// An unreadable file means the consistency check is skipped.
    #[must_use]
    pub fn with_plugin_file(path: &Path) -> Self {
        let plugin_license =
            companion::load(path).and_then(|content| companion::header_field(&content, "License"));
        Self { plugin_license }
    }

    fn is_valid(license: &str) -> bool {
        let normalized = normalize_loose(license);
        VALID_LICENSES
            .iter()
            .any(|valid| normalize_loose(valid) == normalized)
    }
}

impl Rule for License {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "License field must be present, valid, and match plugin header"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let line = find_line(raw, "License:");

        let Some(license) = fields.scalar("license") else {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    "Missing license field. WordPress.org requires a valid license.",
                )
                .with_line(line),
            ];
        };

        let mut diagnostics = Vec::new();

        if !Self::is_valid(license) {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Invalid license \"{license}\". WordPress.org accepts: {}",
                        VALID_LICENSES.join(", ")
                    ),
                )
                .with_line(line),
            );
        }

        if let Some(plugin_license) = &self.plugin_license {
            if normalize_loose(license) != normalize_loose(plugin_license) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Error,
                        format!(
                            "License mismatch: readme.txt has \"{license}\" but plugin file has \"{plugin_license}\""
                        ),
                    )
                    .with_line(line),
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
        License::new().check(&fields, content)
    }

    #[test]
    fn accepted_licenses_pass() {
        for license in ["GPLv2 or later", "MIT", "Apache 2.0", "gplv2  OR  Later"] {
            let content = format!("=== X ===\nLicense: {license}\n");
            assert!(check(&content).is_empty(), "license {license} should pass");
        }
    }

    #[test]
    fn missing_license_is_an_error() {
        let diags = check("=== X ===\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert!(diags[0].message.contains("Missing license field"));
    }

    #[test]
    fn unknown_license_lists_accepted_values() {
        let diags = check("=== X ===\nLicense: WTFPL\n");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("Invalid license \"WTFPL\""));
        assert!(diags[0].message.contains("GPLv2 or later"));
        assert_eq!(diags[0].line, Some(2));
    }

    #[test]
    fn mismatch_with_plugin_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "<?php\n/**\n * License: MIT\n */").expect("write");

        let content = "=== X ===\nLicense: GPLv2\n";
        let fields = ReadmeParser::new().parse(content);
        let diags = License::with_plugin_file(file.path()).check(&fields, content);

        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("License mismatch"));
        assert!(diags[0].message.contains("\"MIT\""));
    }

    #[test]
    fn matching_plugin_file_has_no_findings() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "<?php\n/**\n * License: GPLv2 or later\n */").expect("write");

        let content = "=== X ===\nLicense: gplv2 or later\n";
        let fields = ReadmeParser::new().parse(content);
        let diags = License::with_plugin_file(file.path()).check(&fields, content);
        assert!(diags.is_empty());
    }

    #[test]
    fn unreadable_plugin_file_skips_the_comparison() {
        let content = "=== X ===\nLicense: MIT\n";
        let fields = ReadmeParser::new().parse(content);
        let diags =
            License::with_plugin_file(Path::new("/nonexistent/plugin.php")).check(&fields, content);
        assert!(diags.is_empty());
    }
}
