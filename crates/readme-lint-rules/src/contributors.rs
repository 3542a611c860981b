//! Rule vetting contributor usernames.

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;

/// Rule id for contributors.
pub const ID: &str = "contributors";

/// Usernames that cannot be used as contributors.
const RESTRICTED_CONTRIBUTORS: &[&str] = &[
    "wordpress",
    "wordpressdotorg",
    "admin",
    "root",
    "www",
    "web",
    "ftp",
    "mail",
    "email",
    "blog",
    "forum",
    "support",
    "help",
    "api",
    "dev",
    "developer",
    "test",
    "testing",
    "stage",
    "staging",
    "demo",
    "sample",
    "example",
    "null",
    "undefined",
    "false",
    "true",
    "anonymous",
    "guest",
    "user",
    "users",
    "member",
    "members",
    "staff",
    "team",
    "group",
    "groups",
    "owner",
    "owners",
    "moderator",
    "moderators",
    "editor",
    "editors",
    "author",
    "authors",
    "contributor",
    "contributors",
    "subscriber",
    "subscribers",
];

/// Reserved usernames that only trigger warnings.
const RESERVED_CONTRIBUTORS: &[&str] = &[
    "plugin",
    "plugins",
    "theme",
    "themes",
    "wp",
    "wordpress-org",
    "wordpressorg",
    "automattic",
    "matt",
    "mullenweg",
];

/// Checks each listed contributor against the restricted and reserved
/// username tables and the username format. An absent field is owned by
/// the required-fields rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contributors;

impl Contributors {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Contributors {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Contributors field must be valid and not use restricted usernames"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let contributors = fields.list("contributors");
        if contributors.is_empty() {
            return Vec::new();
        }

        let line = find_line(raw, "Contributors:");
        let mut diagnostics = Vec::new();

        for contributor in contributors {
            let contributor = contributor.trim();
            if contributor.is_empty() {
                continue;
            }

            let lowered = contributor.to_lowercase();

            if RESTRICTED_CONTRIBUTORS.contains(&lowered.as_str()) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Error,
                        format!(
                            "Restricted contributor username: \"{contributor}\". This username cannot be used."
                        ),
                    )
                    .with_line(line),
                );
            }

            if RESERVED_CONTRIBUTORS.contains(&lowered.as_str()) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Warning,
                        format!(
                            "Reserved contributor username: \"{contributor}\". Consider using a different username."
                        ),
                    )
                    .with_line(line),
                );
            }

            if !is_match(r"^[a-zA-Z0-9_-]{3,60}$", contributor) {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Warning,
                        format!(
                            "Invalid contributor format: \"{contributor}\". Contributors should be WordPress.org usernames."
                        ),
                    )
                    .with_line(line),
                );
            }
        }

        diagnostics
    }
}
