//! JSON document report.

use serde_json::json;

use super::Reporter;
use crate::types::{severity_counts, Diagnostic};

/// Renders diagnostics as a pretty-printed JSON document with an `issues`
/// array and a `summary` count block.
///
/// Absent lines/columns are preserved as `null`; slashes are not escaped.
/// If the document cannot be serialized the reporter returns `{}` instead
/// of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Creates a new JSON reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for JsonReporter {
    fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let issues: Vec<serde_json::Value> = diagnostics
            .iter()
            .map(|d| {
                json!({
                    "ruleId": d.rule_id,
                    "level": d.severity.to_string(),
                    "message": d.message,
                    "file": d.file,
                    "line": d.line,
                    "column": d.column,
                })
            })
            .collect();

        let (errors, warnings, info) = severity_counts(diagnostics);

        let document = json!({
            "issues": issues,
            "summary": {
                "total": diagnostics.len(),
                "errors": errors,
                "warnings": warnings,
                "info": info,
            },
        });

        serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn parse(output: &str) -> serde_json::Value {
        serde_json::from_str(output).expect("reporter output must be valid JSON")
    }

    #[test]
    fn empty_input_is_valid_json_with_zero_summary() {
        let output = JsonReporter::new().render(&[]);
        let doc = parse(&output);
        assert_eq!(doc["summary"]["total"], 0);
        assert_eq!(doc["issues"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn summary_total_equals_issue_count() {
        let diags = vec![
            Diagnostic::new("a", Severity::Error, "e").with_file("readme.txt"),
            Diagnostic::new("b", Severity::Warning, "w").with_file("readme.txt"),
            Diagnostic::new("c", Severity::Info, "i").with_file("readme.txt"),
        ];
        let doc = parse(&JsonReporter::new().render(&diags));

        let total = doc["summary"]["total"].as_u64().unwrap();
        assert_eq!(total, doc["issues"].as_array().unwrap().len() as u64);

        let errors = doc["summary"]["errors"].as_u64().unwrap();
        let warnings = doc["summary"]["warnings"].as_u64().unwrap();
        let info = doc["summary"]["info"].as_u64().unwrap();
        assert_eq!(errors + warnings + info, total);
    }

    #[test]
    fn absent_line_and_column_are_null() {
        let diags = vec![Diagnostic::new("a", Severity::Error, "e").with_file("readme.txt")];
        let doc = parse(&JsonReporter::new().render(&diags));
        assert!(doc["issues"][0]["line"].is_null());
        assert!(doc["issues"][0]["column"].is_null());
    }

    #[test]
    fn slashes_are_not_escaped() {
        let diags = vec![
            Diagnostic::new("donate-link", Severity::Info, "see https://example.org/donate")
                .with_file("readme.txt"),
        ];
        let output = JsonReporter::new().render(&diags);
        assert!(output.contains("https://example.org/donate"));
        assert!(!output.contains("\\/"));
    }

    #[test]
    fn issue_fields_round_trip() {
        let diags = vec![
            Diagnostic::new("stable-tag", Severity::Error, "bad tag")
                .with_line(Some(7))
                .with_column(2)
                .with_file("readme.txt"),
        ];
        let doc = parse(&JsonReporter::new().render(&diags));
        let issue = &doc["issues"][0];
        assert_eq!(issue["ruleId"], "stable-tag");
        assert_eq!(issue["level"], "error");
        assert_eq!(issue["line"], 7);
        assert_eq!(issue["column"], 2);
        assert_eq!(issue["file"], "readme.txt");
    }
}
