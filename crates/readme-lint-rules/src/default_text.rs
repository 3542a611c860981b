//! Rule detecting readme template boilerplate left in place.

use readme_lint_core::utils::{find_line, line_at_offset, truncate};
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::first_match;

/// Rule id for default-text.
pub const ID: &str = "default-text";

/// Patterns lifted from the stock readme template.
const DEFAULT_PATTERNS: &[&str] = &[
    // Plugin name patterns
    r"(?i)===\s*(Plugin Name|Your Plugin Name|My Plugin|Sample Plugin|Example Plugin)\s*===",
    // Description patterns
    r"(?i)Here is a short description of the plugin",
    r"(?i)This is the long description",
    r"(?i)A brief description of the Plugin",
    r"(?i)Short description of your plugin",
    r"(?i)Describe your plugin here",
    // Installation patterns
    r"(?i)Upload.*plugin.*directory",
    r"(?i)This section describes how to install the plugin",
    r"(?i)Upload the plugin files to the.*wp-content.*plugins",
    // FAQ patterns
    r"(?i)A question that someone might have",
    r"(?i)What about foo bar\?",
    r#"(?i)Answer to "What about foo bar\?""#,
    // Changelog patterns
    r"(?i)List versions from most recent at top",
    // Contributors patterns
    r"(?i)yourname",
    r"(?i)username1, username2",
    // Tags patterns
    r"(?i)tag1, tag2",
    r"(?i)tags, go, here",
    // Generic placeholder patterns
    r"(?i)\[Your Plugin Name\]",
    r"(?i)\{plugin.*name\}",
    r"(?i)TODO:",
    r"(?i)FIXME:",
    r"(?i)CHANGEME:",
    r"(?i)REPLACEME:",
    r"(?i)\[PLACEHOLDER\]",
    r"(?i)Lorem ipsum",
    // Version patterns
    r"(?i)0\.1", // Very common default version
    r"(?i)1\.0\.0-alpha",
    // URL patterns
    r"(?i)example\.com",
    r"(?i)yoursite\.com",
    r"(?i)http://URI_Of_Page_Describing_Plugin_and_Updates",
    // License patterns that suggest defaults
    r"(?i)URI_Of_License",
];

/// Whole sentences from the stock template.
const DEFAULT_TEXT_BLOCKS: &[&str] = &[
    "Here is a short description of the plugin. This should be no more than 150 characters. No markup here.",
    "This is the long description. No limit, and you can use Markdown (as well as in the following sections).",
    "This section describes how to install the plugin and get it working.",
    "A question that someone might have",
    "Answer to \"What about foo bar?\"",
    "List versions from most recent at top to oldest at bottom.",
];

/// Per-field default indicators.
const FIELD_DEFAULTS: &[(&str, &[&str])] = &[
    ("name", &["Plugin Name", "Your Plugin Name", "My Plugin"]),
    ("contributors", &["yourname", "username1", "username2"]),
    ("tags", &["tag1", "tag2", "tags", "go", "here"]),
];

/// Per-section default snippets.
const SECTION_DEFAULTS: &[(&str, &[&str])] = &[
    (
        "description",
        &[
            "This is the long description",
            "Here is a short description",
            "Describe your plugin here",
        ],
    ),
    (
        "installation",
        &["This section describes how to install", "Upload the plugin files"],
    ),
    (
        "faq",
        &["A question that someone might have", "What about foo bar?"],
    ),
    ("changelog", &["List versions from most recent"]),
];

/// Reports template text that was never replaced with real content.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultText;

impl DefaultText {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DefaultText {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Readme should not contain default template text"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for pattern in DEFAULT_PATTERNS {
            if let Some((offset, matched)) = first_match(pattern, raw) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Error,
                        format!(
                            "Default readme template text detected: \"{}\"",
                            matched.trim()
                        ),
                    )
                    .with_line(Some(line_at_offset(raw, offset))),
                );
            }
        }

        let raw_lower = raw.to_lowercase();
        for block in DEFAULT_TEXT_BLOCKS {
            if raw_lower.contains(&block.to_lowercase()) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Error,
                        format!(
                            "Default readme template text detected: \"{}\"",
                            truncate(block, 50)
                        ),
                    )
                    .with_line(find_line(raw, block)),
                );
            }
        }

        for (field, indicators) in FIELD_DEFAULTS {
            check_field(fields, raw, field, indicators, &mut diagnostics);
        }

        for (section_name, content) in fields.sections() {
            check_section(section_name, content, raw, &mut diagnostics);
        }

        diagnostics
    }
}

/// Joins a field's value into one comparison string.
fn field_value(fields: &FieldMap, field: &str) -> Option<String> {
    if let Some(scalar) = fields.scalar(field) {
        return Some(scalar.to_string());
    }
    let list = fields.list(field);
    if list.is_empty() {
        None
    } else {
        Some(list.join(", "))
    }
}

fn check_field(
    fields: &FieldMap,
    raw: &str,
    field: &str,
    indicators: &[&str],
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(value) = field_value(fields, field) else {
        return;
    };
    let value_lower = value.to_lowercase();

    for indicator in indicators {
        if value_lower.contains(&indicator.to_lowercase()) {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!("Default template value in {field} field: \"{value}\""),
                )
                .with_line(find_line(raw, &value)),
            );
            break;
        }
    }
}

fn check_section(
    section_name: &str,
    content: &str,
    raw: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let key = section_name.to_lowercase();
    let Some((_, snippets)) = SECTION_DEFAULTS.iter().find(|(name, _)| *name == key) else {
        return;
    };

    let content_lower = content.to_lowercase();
    for snippet in *snippets {
        if content_lower.contains(&snippet.to_lowercase()) {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Default template text in {section_name} section: \"{}\"",
                        truncate(snippet, 40)
                    ),
                )
                .with_line(find_line(raw, &format!("== {section_name} =="))),
            );
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_lint_core::ReadmeParser;

    fn check(content: &str) -> Vec<Diagnostic> {
        let fields = ReadmeParser::new().parse(content);
        DefaultText::new().check(&fields, content)
    }

    #[test]
    fn clean_readme_has_no_findings() {
        let diags = check(
            "=== Fast Forms ===\n\
             Contributors: alice\n\
             Tags: forms, email\n\
             Stable tag: 2.3.4\n\n\
             Collects form submissions without fuss.\n\n\
             == Description ==\n\
             A longer account of what the plugin does.\n",
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn template_title_is_detected_at_its_line() {
        let diags = check("=== Plugin Name ===\nStable tag: 2.3.4\n");
        assert!(diags
            .iter()
            .any(|d| d.message.contains("=== Plugin Name ===") && d.line == Some(1)));
        assert!(diags.iter().all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn template_contributor_names_are_detected() {
        let diags = check("=== Fast Forms ===\nContributors: yourname\nStable tag: 2.3.4\n");
        assert!(diags
            .iter()
            .any(|d| d.message.contains("Default template value in contributors field")));
    }

    #[test]
    fn default_installation_text_is_detected_per_section() {
        let diags = check(
            "=== Fast Forms ===\nStable tag: 2.3.4\n\n\
             Collects form submissions.\n\n\
             == Installation ==\n\
             This section describes how to install the plugin and get it working.\n",
        );
        assert!(diags
            .iter()
            .any(|d| d.message.contains("Default template text in Installation section")));
    }

    #[test]
    fn lorem_ipsum_is_detected() {
        let diags = check(
            "=== Fast Forms ===\nStable tag: 2.3.4\n\n\
             Lorem ipsum dolor sit amet.\n",
        );
        assert!(diags
            .iter()
            .any(|d| d.message.contains("Lorem ipsum") && d.line == Some(4)));
    }

    #[test]
    fn default_version_zero_point_one_is_detected() {
        let diags = check("=== Fast Forms ===\nStable tag: 0.1\n");
        assert!(diags.iter().any(|d| d.message.contains("\"0.1\"")));
    }
}
