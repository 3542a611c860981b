//! Rule bounding the short-description paragraph length.

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;

/// Rule id for short-description.
pub const ID: &str = "short-description";

const MAX_LENGTH: usize = 150;
const WARN_LENGTH: usize = 140;

/// Header labels that disqualify a line from being the short description.
const METADATA_FIELDS: &[&str] = &[
    "Contributors:",
    "Tags:",
    "Requires at least:",
    "Tested up to:",
    "Requires PHP:",
    "Stable tag:",
    "License:",
    "License URI:",
    "Donate link:",
    "Author:",
    "Author URI:",
    "Plugin URI:",
    "Version:",
];

/// Checks that the short description exists and stays within length
/// limits. Length is measured in Unicode code points, and the raw text is
/// consulted directly so the count reflects what the author wrote, not a
/// truncated parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortDescription;

impl ShortDescription {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts the short description: the first non-empty line after the
    /// header block that is neither a metadata field nor a section header.
    fn extract_raw(content: &str) -> Option<String> {
        let mut found_blank_line = false;

        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                found_blank_line = true;
                continue;
            }

            if !found_blank_line {
                continue;
            }

            if is_section_header(trimmed) {
                // A section header right after the header block means the
                // short description was skipped entirely.
                return None;
            }

            if !is_metadata_field(trimmed) {
                return Some(trimmed.to_string());
            }
        }

        None
    }
}

fn is_metadata_field(line: &str) -> bool {
    METADATA_FIELDS.iter().any(|field| {
        line.get(..field.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(field))
    })
}

fn is_section_header(line: &str) -> bool {
    is_match(r"^==+\s+.+\s+==+$", line)
}

impl Rule for ShortDescription {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Short description must be present and within length limits"
    }

    fn check(&self, _fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let Some(short_desc) = Self::extract_raw(raw) else {
            return vec![Diagnostic::new(
                ID,
                Severity::Error,
                "Missing short description",
            )];
        };

        let length = short_desc.chars().count();
        let line = find_line(raw, &short_desc);
        let mut diagnostics = Vec::new();

        if length > MAX_LENGTH {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Short description is too long ({length} characters, maximum {MAX_LENGTH})"
                    ),
                )
                .with_line(line),
            );
        } else if length > WARN_LENGTH {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Warning,
                    format!(
                        "Short description is approaching maximum length ({length} characters, recommended maximum {WARN_LENGTH})"
                    ),
                )
                .with_line(line),
            );
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_lint_core::ReadmeParser;

    fn check(content: &str) -> Vec<Diagnostic> {
        let fields = ReadmeParser::new().parse(content);
        ShortDescription::new().check(&fields, content)
    }

    fn readme_with_description(desc: &str) -> String {
        format!(
            "=== X ===\nContributors: alice\nStable tag: 1.0.0\n\n{desc}\n\n== Description ==\nbody\n"
        )
    }

    #[test]
    fn reasonable_description_has_no_findings() {
        let diags = check(&readme_with_description("Does one thing well."));
        assert!(diags.is_empty());
    }

    #[test]
    fn missing_description_is_an_error() {
        let diags = check("=== X ===\nStable tag: 1.0.0\n\n== Description ==\nbody\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].message, "Missing short description");
    }

    #[test]
    fn over_maximum_is_an_error_with_literal_count() {
        // 160 code points against the 150 maximum.
        let desc: String = "å".repeat(160);
        let diags = check(&readme_with_description(&desc));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert!(diags[0].message.contains("160"));
        assert!(diags[0].message.contains("maximum 150"));
    }

    #[test]
    fn between_warn_and_max_is_a_warning() {
        let desc: String = "x".repeat(145);
        let diags = check(&readme_with_description(&desc));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("145"));
    }

    #[test]
    fn length_is_code_points_not_bytes() {
        // 145 multibyte characters: warn threshold applies, not the error
        // threshold a byte count would suggest.
        let desc: String = "é".repeat(145);
        let diags = check(&readme_with_description(&desc));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn anchors_to_the_description_line() {
        let diags = check(&readme_with_description(&"x".repeat(151)));
        assert_eq!(diags[0].line, Some(5));
    }
}
