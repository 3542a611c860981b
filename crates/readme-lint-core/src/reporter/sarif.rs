//! SARIF 2.1.0 document report.

use serde_json::json;

use super::Reporter;
use crate::types::{Diagnostic, Severity};

const SCHEMA_URI: &str = "https://json.schemastore.org/sarif-2.1.0.json";
const INFORMATION_URI: &str = "https://github.com/wporg-tools/readme-lint";

/// Renders diagnostics as a SARIF 2.1.0 document with a single run.
///
/// The driver lists one rule definition per distinct rule id, in
/// first-seen order, using the first diagnostic's message as both short
/// and full description. Each diagnostic becomes one result; a physical
/// location is attached only when the file label is set. Returns `{}` if
/// serialization fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SarifReporter;

impl SarifReporter {
    /// Creates a new SARIF reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn map_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "note",
        }
    }
}

impl Reporter for SarifReporter {
    fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut rules: Vec<serde_json::Value> = Vec::new();
        let mut rules_seen: Vec<&str> = Vec::new();
        let mut results: Vec<serde_json::Value> = Vec::new();

        for diagnostic in diagnostics {
            let rule_id = diagnostic.rule_id.as_str();
            if !rules_seen.contains(&rule_id) {
                rules.push(json!({
                    "id": rule_id,
                    "name": rule_id,
                    "shortDescription": { "text": diagnostic.message },
                    "fullDescription": { "text": diagnostic.message },
                    "defaultConfiguration": {
                        "level": Self::map_level(diagnostic.severity),
                    },
                }));
                rules_seen.push(rule_id);
            }

            let mut result = json!({
                "ruleId": rule_id,
                "level": Self::map_level(diagnostic.severity),
                "message": { "text": diagnostic.message },
            });

            if let Some(file) = &diagnostic.file {
                let mut region = json!({
                    "startLine": diagnostic.line.unwrap_or(1),
                });
                if let Some(column) = diagnostic.column {
                    region["startColumn"] = json!(column);
                }
                result["locations"] = json!([{
                    "physicalLocation": {
                        "artifactLocation": { "uri": file },
                        "region": region,
                    },
                }]);
            }

            results.push(result);
        }

        let sarif = json!({
            "version": "2.1.0",
            "$schema": SCHEMA_URI,
            "runs": [{
                "tool": {
                    "driver": {
                        "name": "readme-lint",
                        "informationUri": INFORMATION_URI,
                        "version": env!("CARGO_PKG_VERSION"),
                        "rules": rules,
                    },
                },
                "results": results,
            }],
        });

        serde_json::to_string_pretty(&sarif).unwrap_or_else(|_| "{}".to_string())
    }
}
