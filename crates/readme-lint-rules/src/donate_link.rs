//! Rule vetting the donate link.

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;

/// Rule id for donate-link.
pub const ID: &str = "donate-link";

/// Domains the directory discourages for donation links.
const DISCOURAGED_DOMAINS: &[&str] = &[
    "paypal.me",
    "gofundme.com",
    "kickstarter.com",
    "indiegogo.com",
    "patreon.com",
    "ko-fi.com",
    "buymeacoffee.com",
    "venmo.com",
    "cashapp.com",
    "zelle.com",
    "example.com",
    "yoursite.com",
    "localhost",
    "127.0.0.1",
];

/// Preferred donation platforms, suggested when neither list matches.
const PREFERRED_DOMAINS: &[&str] = &[
    "paypal.com",
    "stripe.com",
    "github.com", // GitHub Sponsors
    "opencollective.com",
    "liberapay.com",
];

/// Link shapes that are never legitimate donation pages.
const INVALID_PATTERNS: &[&str] = &[
    r"(?i)example\.com",
    r"(?i)localhost",
    r"(?i)127\.0\.0\.1",
    r"(?i)192\.168\.",
    r"(?i)10\.0\.",
    r"(?i)yoursite\.com",
    r"(?i)test\.com",
    r"(?i)donate\.html?$",
];

/// Checks that the donate link, when present, is a plausible URL on an
/// acceptable domain. A missing link is only an informational nudge.
#[derive(Debug, Clone, Copy, Default)]
pub struct DonateLink;

impl DonateLink {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DonateLink {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Donate link should be present, properly formatted, and use appropriate domains"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let line = find_line(raw, "Donate link:");

        let Some(donate_link) = fields.scalar("donate_link") else {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Info,
                    "Consider adding a donate link to support the plugin",
                )
                .with_line(line),
            ];
        };

        let Some(domain) = extract_domain(donate_link) else {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Warning,
                    format!("Donate link \"{donate_link}\" does not appear to be a valid URL"),
                )
                .with_line(line),
            ];
        };

        let mut diagnostics = Vec::new();
        let discouraged = DISCOURAGED_DOMAINS.contains(&domain.as_str());

        if discouraged {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Discouraged donate link domain: \"{domain}\". WordPress.org discourages certain donation platforms."
                    ),
                )
                .with_line(line),
            );
        }

        if INVALID_PATTERNS.iter().any(|p| is_match(p, donate_link)) {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Invalid donate link: \"{donate_link}\". Donate links should point to legitimate donation pages."
                    ),
                )
                .with_line(line),
            );
        }

        if !discouraged && !PREFERRED_DOMAINS.contains(&domain.as_str()) {
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Info,
                    format!(
                        "Consider using preferred donation platforms: {}",
                        PREFERRED_DOMAINS.join(", ")
                    ),
                )
                .with_line(line),
            );
        }

        diagnostics
    }
}

/// Extracts the lowercased host from an http(s) URL, dropping any leading
/// `www.`; `None` means the value is not a usable URL.
fn extract_domain(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;

    let host_end = rest
        .find(['/', '?', '#', ':'])
        .unwrap_or(rest.len());
    let host = rest[..host_end].to_lowercase();
    if host.is_empty() {
        return None;
    }

    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}
