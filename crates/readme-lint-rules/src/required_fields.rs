//! Rule requiring the mandatory header metadata fields.

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

/// Rule id for required-fields.
pub const ID: &str = "required-fields";

/// Mandatory fields as `(field name, header label)` pairs.
const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("contributors", "Contributors"),
    ("tags", "Tags"),
    ("requires", "Requires at least"),
    ("tested", "Tested up to"),
    ("stable_tag", "Stable tag"),
];

/// Reports an error for each missing mandatory header field.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl RequiredFields {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequiredFields {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Required metadata fields must be present"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (field, label) in REQUIRED_FIELDS {
            if fields.is_absent(field) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Error,
                        format!("Missing required field: {label}"),
                    )
                    .with_line(find_line(raw, label)),
                );
            }
        }

        diagnostics
    }
}
