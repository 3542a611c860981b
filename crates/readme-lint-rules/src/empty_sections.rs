//! Rule flagging sections with no meaningful content.

use readme_lint_core::utils::{find_line, strip_tags};
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

/// Rule id for empty-sections.
pub const ID: &str = "empty-sections";

const MIN_CONTENT_LENGTH: usize = 10;

/// Warns about sections whose body, with markup stripped, is shorter than
/// a minimal useful length.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySections;

impl EmptySections {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EmptySections {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Sections should have meaningful content"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        fields
            .sections()
            .iter()
            .filter(|(_, content)| strip_tags(content).trim().len() < MIN_CONTENT_LENGTH)
            .map(|(name, _)| {
                Diagnostic::new(
                    ID,
                    Severity::Warning,
                    format!("Section \"{name}\" appears to be empty or has very little content"),
                )
                .with_line(find_line(raw, &format!("== {name} ==")))
            })
            .collect()
    }
}
