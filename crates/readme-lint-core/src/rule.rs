//! Rule trait for defining readme lint rules.

use crate::fields::FieldMap;
use crate::types::Diagnostic;

/// A single lint rule over a parsed readme document.
///
/// Rules are stateless per invocation: `check` must be a pure function of
/// the parsed fields, the raw text, and any parameters fixed at
/// construction time. Rules never fail: an absent or malformed field is a
/// condition to report (or to leave to the rule that owns that concern),
/// not an error, and a rule whose auxiliary input is unavailable simply
/// reports nothing for that concern.
///
/// # Example
///
/// ```ignore
/// use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};
///
/// pub struct RequireTags;
///
/// impl Rule for RequireTags {
///     fn id(&self) -> &'static str { "require-tags" }
///     fn description(&self) -> &'static str { "Tags field must be present" }
///
///     fn check(&self, fields: &FieldMap, _raw: &str) -> Vec<Diagnostic> {
///         if fields.is_absent("tags") {
///             vec![Diagnostic::new(self.id(), Severity::Error, "Missing tags")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the stable kebab-case identifier of this rule
    /// (e.g. `"stable-tag"`).
    fn id(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks the document and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `fields` - Parsed view of the document
    /// * `raw` - Raw document text, for line-location heuristics
    fn check(&self, fields: &FieldMap, raw: &str) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
