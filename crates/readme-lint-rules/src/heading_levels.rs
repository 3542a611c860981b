//! Rule rejecting over-deep heading markers.

use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;

/// Rule id for heading-levels.
pub const ID: &str = "heading-levels";

/// Reports an error for any `==== ... ====` (or deeper) heading; the
/// format only defines `===` for the plugin name and `==` for sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingLevels;

impl HeadingLevels {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for HeadingLevels {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Heading levels should be properly structured"
    }

    fn check(&self, _fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        raw.lines()
            .enumerate()
            .filter(|(_, line)| is_match(r"^={4,}\s+.+\s+={4,}\s*$", line))
            .map(|(idx, _)| {
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    "Invalid heading level. Use === for plugin name and == for sections",
                )
                .with_line(Some(idx + 1))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_lint_core::ReadmeParser;

    fn check(content: &str) -> Vec<Diagnostic> {
        let fields = ReadmeParser::new().parse(content);
        HeadingLevels::new().check(&fields, content)
    }

    #[test]
    fn normal_headings_pass() {
        let diags = check("=== X ===\n\n== Description ==\n\n= 1.0 =\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn four_equals_heading_is_an_error_at_its_line() {
        let diags = check("=== X ===\n\n==== Deep Heading ====\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].line, Some(3));
    }

    #[test]
    fn each_offending_line_is_reported() {
        let diags = check("==== A ====\ntext\n===== B =====\n");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].line, Some(1));
        assert_eq!(diags[1].line, Some(3));
    }
}
