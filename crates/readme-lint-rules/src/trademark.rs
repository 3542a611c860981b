//! Rule flagging improper use of trademarked names.

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;

/// Rule id for trademark.
pub const ID: &str = "trademark";

/// WordPress-ecosystem trademarks; improper use is a warning.
const WORDPRESS_TRADEMARKS: &[&str] = &[
    "WordPress",
    "WordCamp",
    "BuddyPress",
    "bbPress",
    "GlotPress",
    "Automattic",
    "WooCommerce",
    "Jetpack",
    "Akismet",
    "Gravatar",
    "WordPress.com",
    "WordPress.org",
    "Matt Mullenweg",
];

/// Other common trademarks; a hit is informational only.
const OTHER_TRADEMARKS: &[&str] = &[
    "Google",
    "Facebook",
    "Twitter",
    "Instagram",
    "YouTube",
    "Amazon",
    "Microsoft",
    "Apple",
    "Adobe",
    "PayPal",
    "Stripe",
    "Mailchimp",
    "Salesforce",
    "Shopify",
    "WooCommerce", // Also in the WordPress list but important
];

/// Usages that are generally acceptable.
const ALLOWED_PATTERNS: &[&str] = &[
    r"(?i)for WordPress",
    r"(?i)WordPress integration",
    r"(?i)WordPress compatible",
    r"(?i)works with WordPress",
    r"(?i)integrates with",
    r"(?i)connects to",
    r"(?i)syncs with",
];

/// Checks the plugin name, short description, and main sections for
/// improper trademark usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trademark;

impl Trademark {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_text(&self, text: &str, context: &str, raw: &str, diagnostics: &mut Vec<Diagnostic>) {
        for trademark in WORDPRESS_TRADEMARKS {
            if has_improper_usage(text, trademark) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Warning,
                        format!(
                            "Potential trademark issue in {context}: \"{trademark}\" should not be used improperly. Consider using \"for WordPress\" or similar."
                        ),
                    )
                    .with_line(find_line(raw, text)),
                );
            }
        }

        for trademark in OTHER_TRADEMARKS {
            if has_improper_usage(text, trademark) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Info,
                        format!(
                            "Potential trademark usage in {context}: \"{trademark}\". Ensure you have permission to use this trademark."
                        ),
                    )
                    .with_line(find_line(raw, text)),
                );
            }
        }
    }
}

impl Rule for Trademark {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Plugin should not improperly use trademarked names"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if let Some(name) = fields.scalar("name") {
            self.check_text(name, "plugin name", raw, &mut diagnostics);
        }

        if let Some(short_desc) = extract_short_description(raw) {
            self.check_text(&short_desc, "short description", raw, &mut diagnostics);
        }

        for (section_name, content) in fields.sections() {
            let key = section_name.to_lowercase();
            if matches!(key.as_str(), "description" | "installation" | "faq") {
                self.check_text(
                    content,
                    &format!("section '{section_name}'"),
                    raw,
                    &mut diagnostics,
                );
            }
        }

        diagnostics
    }
}

/// Decides whether `text` uses `trademark` in a problematic way.
fn has_improper_usage(text: &str, trademark: &str) -> bool {
    if !text.to_lowercase().contains(&trademark.to_lowercase()) {
        return false;
    }

    if ALLOWED_PATTERNS.iter().any(|p| is_match(p, text)) {
        return false;
    }

    let escaped = regex::escape(trademark);
    let problematic = [
        // Text starting with the trademark
        format!(r"(?i)^{escaped}\s"),
        // Trademark used as if it were the plugin's brand
        format!(r"(?i){escaped}\s+(plugin|theme|extension|addon)"),
        // Claiming to be official
        format!(r"(?i)official\s+{escaped}"),
        format!(r"(?i){escaped}\s+official"),
        format!(r"(?i)the\s+official\s+{escaped}"),
    ];

    if problematic.iter().any(|p| is_match(p, text)) {
        return true;
    }

    // WordPress itself is held to a stricter standard: never the leading
    // word.
    if trademark.eq_ignore_ascii_case("wordpress")
        && text.trim().to_lowercase().starts_with("wordpress")
    {
        return true;
    }

    false
}

/// Finds the first free-form line after the title header.
fn extract_short_description(raw: &str) -> Option<String> {
    let mut found_header = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if is_match(r"^===.*===\s*$", trimmed) {
            found_header = true;
            continue;
        }

        if found_header && !trimmed.is_empty() && !is_match(r"^[A-Za-z\s]+:", trimmed) {
            return Some(trimmed.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_lint_core::ReadmeParser;

    fn check(content: &str) -> Vec<Diagnostic> {
        let fields = ReadmeParser::new().parse(content);
        Trademark::new().check(&fields, content)
    }

    #[test]
    fn neutral_name_passes() {
        let diags = check("=== Fast Forms ===\n\nCollects form submissions.\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn leading_wordpress_in_name_is_a_warning() {
        let diags = check("=== WordPress Turbo Cache ===\n\nSpeeds things up.\n");
        assert!(diags
            .iter()
            .any(|d| d.severity == Severity::Warning && d.message.contains("plugin name")));
    }

    #[test]
    fn for_wordpress_phrasing_is_allowed() {
        let diags = check("=== Turbo Cache for WordPress ===\n\nSpeeds things up.\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn official_claim_is_flagged() {
        let diags = check("=== Shop Sync ===\n\nThe official WooCommerce companion.\n");
        assert!(diags
            .iter()
            .any(|d| d.message.contains("\"WooCommerce\"") && d.message.contains("short description")));
    }

    #[test]
    fn other_trademark_is_informational() {
        let diags = check("=== Tube Embed ===\n\nYouTube plugin for embedding videos.\n");
        let info: Vec<&Diagnostic> = diags
            .iter()
            .filter(|d| d.severity == Severity::Info)
            .collect();
        assert!(!info.is_empty());
        assert!(info[0].message.contains("\"YouTube\""));
    }

    #[test]
    fn checked_sections_include_description() {
        let diags = check(
            "=== Shop Sync ===\n\nHelps with shops.\n\n== Description ==\nThe official Google plugin for shops.\n",
        );
        assert!(diags
            .iter()
            .any(|d| d.message.contains("section 'Description'")));
    }

    #[test]
    fn changelog_section_is_not_checked() {
        let diags = check(
            "=== Shop Sync ===\n\nHelps with shops.\n\n== Changelog ==\nofficial Google plugin\n",
        );
        assert!(diags.is_empty());
    }
}
