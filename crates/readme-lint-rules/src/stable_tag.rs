//! Rule validating the stable tag version format.
//!
//! # Configuration
//!
//! - `allow_trunk`: downgrade a literal "trunk" tag from an error to a
//!   warning (default: false)

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;

/// Rule id for stable-tag.
pub const ID: &str = "stable-tag";

/// Checks that the stable tag is a dotted numeric version.
///
/// Field presence is owned by the required-fields rule; an absent tag is
/// silently skipped here.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableTag {
    allow_trunk: bool,
}

impl StableTag {
    /// Creates a new rule with trunk disallowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a literal "trunk" tag is tolerated.
    #[must_use]
    pub fn allow_trunk(mut self, allow: bool) -> Self {
        self.allow_trunk = allow;
        self
    }
}

impl Rule for StableTag {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Stable tag must be present and in valid format"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let Some(stable_tag) = fields.scalar("stable_tag") else {
            return Vec::new();
        };

        let line = find_line(raw, "Stable tag:");

        if stable_tag.trim().eq_ignore_ascii_case("trunk") {
            let severity = if self.allow_trunk {
                Severity::Warning
            } else {
                Severity::Error
            };
            return vec![
                Diagnostic::new(
                    ID,
                    severity,
                    "Stable tag is set to \"trunk\". Consider using a semantic version number.",
                )
                .with_line(line),
            ];
        }

        if !is_match(r"^\d+(\.\d+)*$", stable_tag) {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Stable tag \"{stable_tag}\" should follow semantic versioning (e.g., 1.0.0)"
                    ),
                )
                .with_line(line),
            ];
        }

        Vec::new()
    }
}
