//! Human-readable grouped text report.

use super::Reporter;
use crate::types::{Diagnostic, Severity};

/// Renders diagnostics grouped by severity with ANSI-colored headers.
///
/// Empty input renders to an empty string. Groups appear in Error,
/// Warning, Info order; a group without diagnostics emits no header.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Creates a new text reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn format_line(diagnostic: &Diagnostic, glyph: &str) -> String {
        let mut parts = vec![glyph.to_string()];

        if let Some(line) = diagnostic.line {
            parts.push(format!("Line {line}:"));
        }

        parts.push(format!("[{}]", diagnostic.rule_id));
        parts.push(diagnostic.message.clone());

        format!("  {}", parts.join(" "))
    }
}

impl Reporter for TextReporter {
    fn render(&self, diagnostics: &[Diagnostic]) -> String {
        if diagnostics.is_empty() {
            return String::new();
        }

        let groups = [
            (Severity::Error, "\x1b[1;31mErrors:\x1b[0m", "\u{2717}"),
            (Severity::Warning, "\x1b[1;33mWarnings:\x1b[0m", "\u{26a0}"),
            (Severity::Info, "\x1b[1;36mInfo:\x1b[0m", "\u{2139}"),
        ];

        let mut output: Vec<String> = Vec::new();

        for (severity, header, glyph) in groups {
            let group: Vec<&Diagnostic> = diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .collect();
            if group.is_empty() {
                continue;
            }

            output.push(header.to_string());
            for diagnostic in group {
                output.push(Self::format_line(diagnostic, glyph));
            }
            output.push(String::new());
        }

        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(TextReporter::new().render(&[]), "");
    }

    #[test]
    fn error_line_has_glyph_line_and_rule_id() {
        let diags = vec![
            Diagnostic::new("test-rule", Severity::Error, "Test error message")
                .with_line(Some(10))
                .with_file("readme.txt"),
        ];
        let output = TextReporter::new().render(&diags);

        assert!(output.contains("Errors:"));
        assert!(output.contains('\u{2717}'));
        assert!(output.contains("Line 10:"));
        assert!(output.contains("[test-rule]"));
        assert!(output.contains("Test error message"));
    }

    #[test]
    fn groups_appear_in_severity_order() {
        let diags = vec![
            Diagnostic::new("rule1", Severity::Info, "Info message").with_line(Some(10)),
            Diagnostic::new("rule2", Severity::Error, "Error message").with_line(Some(5)),
            Diagnostic::new("rule3", Severity::Warning, "Warning message").with_line(Some(15)),
        ];
        let output = TextReporter::new().render(&diags);

        let error_pos = output.find("Errors:").expect("has errors header");
        let warning_pos = output.find("Warnings:").expect("has warnings header");
        let info_pos = output.find("Info:").expect("has info header");
        assert!(error_pos < warning_pos);
        assert!(warning_pos < info_pos);
    }

    #[test]
    fn empty_groups_emit_no_header() {
        let diags = vec![Diagnostic::new("only-info", Severity::Info, "msg")];
        let output = TextReporter::new().render(&diags);
        assert!(!output.contains("Errors:"));
        assert!(!output.contains("Warnings:"));
        assert!(output.contains("Info:"));
    }

    #[test]
    fn document_level_diagnostic_has_no_line_prefix() {
        let diags = vec![Diagnostic::new("r", Severity::Warning, "whole-document finding")];
        let output = TextReporter::new().render(&diags);
        assert!(!output.contains("Line"));
        assert!(output.contains("whole-document finding"));
    }
}
