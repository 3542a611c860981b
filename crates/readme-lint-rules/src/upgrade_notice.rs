//! Rule bounding upgrade notices in number and length.

use readme_lint_core::utils::{find_line, strip_tags};
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

/// Rule id for upgrade-notice.
pub const ID: &str = "upgrade-notice";

const MAX_UPGRADE_NOTICES: usize = 3;
const MAX_NOTICE_LENGTH: usize = 300;

/// Warns when the upgrade-notice section accumulates too many entries or
/// an entry runs too long. No upgrade notices at all is fine.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpgradeNotice;

impl UpgradeNotice {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UpgradeNotice {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Upgrade notices should be limited in number and length"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let notices = fields.section_map("upgrade_notice");
        if notices.is_empty() {
            return Vec::new();
        }

        let section_line = find_line(raw, "== Upgrade Notice ==");
        let mut diagnostics = Vec::new();

        if notices.len() > MAX_UPGRADE_NOTICES {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Warning,
                    format!(
                        "Too many upgrade notices ({}). WordPress.org recommends maximum {MAX_UPGRADE_NOTICES} upgrade notices.",
                        notices.len()
                    ),
                )
                .with_line(section_line),
            );
        }

        for (version, notice) in notices {
            let length = strip_tags(notice).len();
            if length > MAX_NOTICE_LENGTH {
                let notice_line = find_line(raw, &format!("= {version} ="));
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Warning,
                        format!(
                            "Upgrade notice for version {version} is too long ({length} characters, maximum {MAX_NOTICE_LENGTH} recommended)"
                        ),
                    )
                    .with_line(notice_line.or(section_line)),
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

    fn check(content: &str) -> Vec<Diagnostic> {
        let fields = ReadmeParser::new().parse(content);
        UpgradeNotice::new().check(&fields, content)
    }

    fn readme_with_notices(notices: &[(&str, &str)]) -> String {
        let mut content = String::from("=== X ===\n\n== Upgrade Notice ==\n\n");
        for (version, text) in notices {
            content.push_str(&format!("= {version} =\n{text}\n\n"));
        }
        content
    }

    #[test]
    fn no_notices_is_fine() {
        assert!(check("=== X ===\n\n== Description ==\nbody\n").is_empty());
    }

    #[test]
    fn a_few_short_notices_pass() {
        let content = readme_with_notices(&[("1.2", "Fixes a bug."), ("1.1", "Minor release.")]);
        assert!(check(&content).is_empty());
    }

    #[test]
    fn more_than_three_notices_warns() {
        let content = readme_with_notices(&[
            ("1.4", "a"),
            ("1.3", "b"),
            ("1.2", "c"),
            ("1.1", "d"),
        ]);
        let diags = check(&content);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("Too many upgrade notices (4)"));
        assert_eq!(diags[0].line, Some(3));
    }

    #[test]
    fn overlong_notice_warns_per_version() {
        let long_text = "word ".repeat(80);
        let content = readme_with_notices(&[("2.0", &long_text)]);
        let diags = check(&content);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("version 2.0"));
        assert!(diags[0].message.contains("maximum 300"));
        // Anchored to the version subheading.
        assert_eq!(diags[0].line, Some(5));
    }
}
