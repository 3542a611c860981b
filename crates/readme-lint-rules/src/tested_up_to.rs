//! Rule checking the Tested up to version against the current WordPress
//! release.

use readme_lint_core::utils::find_line;
use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

use crate::pattern::is_match;
use crate::wp_version::WpVersionProvider;

/// Rule id for tested-up-to.
pub const ID: &str = "tested-up-to";

/// Validates the `Tested up to` version format and, when a reference
/// WordPress version is known, flags versions that do not exist yet or
/// are badly outdated. The reference version is resolved once at
/// construction; without one, only the format check runs.
#[derive(Debug, Clone, Default)]
pub struct TestedUpTo {
    reference_version: Option<String>,
}

impl TestedUpTo {
    /// Creates a new rule with no reference version.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the reference WordPress version.
    #[must_use]
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            reference_version: Some(version.into()),
        }
    }

    /// Resolves the reference version from a provider, once, at
    /// construction. A provider that cannot answer leaves the rule in
    /// format-check-only mode.
    #[must_use]
    pub fn from_provider(provider: &dyn WpVersionProvider) -> Self {
        Self {
            reference_version: provider.current_version(),
        }
    }
}

impl Rule for TestedUpTo {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Tested up to field must be current and valid WordPress version"
    }

    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let Some(tested) = fields.scalar("tested") else {
            return Vec::new(); // Owned by required-fields.
        };

        let line = find_line(raw, "Tested up to:");

        if !is_match(r"^\d+\.\d+(\.\d+)?$", tested) {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Invalid \"Tested up to\" version format: \"{tested}\". Use format like \"6.4\" or \"6.4.1\""
                    ),
                )
                .with_line(line),
            ];
        }

        let Some(current) = self.reference_version.as_deref() else {
            return Vec::new();
        };

        let tested_version = parse_version(tested);
        let current_version = parse_version(current);

        if is_too_future(tested_version, current_version) {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Tested up to: {tested}. This version of WordPress does not exist (yet)."
                    ),
                )
                .with_line(line),
            ];
        }

        if is_outdated(tested_version, current_version) {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Tested up to version \"{tested}\" is outdated. Current WordPress version is {current}."
                    ),
                )
                .with_line(line),
            ];
        }

        if has_minor_version_issue(tested_version, current_version) {
            return vec![
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!(
                        "Invalid minor version in \"Tested up to\": \"{tested}\". When using the same major version as current ({current}), use the major.minor format without patch version."
                    ),
                )
                .with_line(line),
            ];
        }

        Vec::new()
    }
}

/// `(major, minor, patch)`, missing components zero.
fn parse_version(version: &str) -> (u64, u64, u64) {
    let mut parts = version.split('.');
    let mut next = || {
        parts
            .next()
            .and_then(|p| p.parse::<u64>().ok())
            .unwrap_or(0)
    };
    (next(), next(), next())
}

/// More than one major version ahead of the reference does not exist.
fn is_too_future(tested: (u64, u64, u64), current: (u64, u64, u64)) -> bool {
    tested.0 > current.0 + 1
}

/// More than one major version behind the reference is outdated.
fn is_outdated(tested: (u64, u64, u64), current: (u64, u64, u64)) -> bool {
    current.0.saturating_sub(tested.0) > 1
}

/// Same-major minor-version validation. Deliberately never fires: the
/// directory's own rules here are subtle, and no lenient approximation
/// has been agreed on, so the check is kept as a stub.
fn has_minor_version_issue(_tested: (u64, u64, u64), _current: (u64, u64, u64)) -> bool {
    false
}
