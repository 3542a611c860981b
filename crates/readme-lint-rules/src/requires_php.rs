//! Rule checking the Requires PHP field.

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;

/// Rule id for requires-php.
pub const ID: &str = "requires-php";

/// Advises on a missing or malformed `Requires PHP` field. Both findings
/// are warnings: the field is recommended, not mandatory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiresPhp;

impl RequiresPhp {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequiresPhp {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Requires PHP field should be present and valid"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let line = find_line(raw, "Requires PHP:");

        let Some(requires_php) = fields.scalar("requires_php") else {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Warning,
                    "Requires PHP field is missing. Consider specifying minimum PHP version.",
                )
                .with_line(line),
            ];
        };

        if !is_match(r"^\d+\.\d+(\.\d+)?$", requires_php) {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Warning,
                    format!(
                        "Requires PHP \"{requires_php}\" should be a valid PHP version (e.g., 7.4 or 8.0)"
                    ),
                )
                .with_line(line),
            ];
        }

        Vec::new()
    }
}
