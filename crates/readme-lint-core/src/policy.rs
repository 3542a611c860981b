//! Suppression and exit-code policy.

use std::collections::HashSet;

use crate::types::{Diagnostic, Severity};

/// Aggregate pass/fail decision for one lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No diagnostic met the failure threshold.
    Pass,
    /// At least one diagnostic met the failure threshold.
    Fail,
}

/// Drops diagnostics whose rule id is in the ignore set, preserving order.
#[must_use]
pub fn filter_ignored(
    diagnostics: Vec<Diagnostic>,
    ignored_rule_ids: &HashSet<String>,
) -> Vec<Diagnostic> {
    if ignored_rule_ids.is_empty() {
        return diagnostics;
    }
    diagnostics
        .into_iter()
        .filter(|d| !ignored_rule_ids.contains(&d.rule_id))
        .collect()
}

/// Decides pass/fail from a failure threshold.
///
/// An empty diagnostic list always passes. `"error"` fails only on errors,
/// `"warning"` on warnings or errors, `"info"` on any diagnostic at all.
/// Any other threshold value never fails; that matches the permissive
/// default path and must be applied after suppression filtering, never
/// before.
#[must_use]
pub fn decide(diagnostics: &[Diagnostic], fail_on: &str) -> Outcome {
    if diagnostics.is_empty() {
        return Outcome::Pass;
    }

    let threshold = match fail_on {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        "info" => Severity::Info,
        _ => return Outcome::Pass,
    };

    if diagnostics.iter().any(|d| d.severity >= threshold) {
        Outcome::Fail
    } else {
        Outcome::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(rule_id: &str, severity: Severity) -> Diagnostic {
        Diagnostic::new(rule_id, severity, "msg")
    }

    #[test]
    fn empty_always_passes() {
        for fail_on in ["error", "warning", "info", "bogus"] {
            assert_eq!(decide(&[], fail_on), Outcome::Pass);
        }
    }

    #[test]
    fn error_threshold_fails_only_on_error() {
        let warnings = vec![diag("a", Severity::Warning), diag("b", Severity::Info)];
        assert_eq!(decide(&warnings, "error"), Outcome::Pass);

        let with_error = vec![diag("a", Severity::Error)];
        assert_eq!(decide(&with_error, "error"), Outcome::Fail);
    }

    #[test]
    fn warning_threshold_fails_on_warning_or_error() {
        assert_eq!(
            decide(&[diag("a", Severity::Warning)], "warning"),
            Outcome::Fail
        );
        assert_eq!(
            decide(&[diag("a", Severity::Error)], "warning"),
            Outcome::Fail
        );
        assert_eq!(
            decide(&[diag("a", Severity::Info)], "warning"),
            Outcome::Pass
        );
    }

    #[test]
    fn info_threshold_fails_on_anything() {
        assert_eq!(decide(&[diag("a", Severity::Info)], "info"), Outcome::Fail);
    }

    #[test]
    fn unknown_threshold_never_fails() {
        let diags = vec![diag("a", Severity::Error)];
        assert_eq!(decide(&diags, "fatal"), Outcome::Pass);
        assert_eq!(decide(&diags, ""), Outcome::Pass);
    }

    #[test]
    fn threshold_monotonicity() {
        // If the strictest threshold passes, looser ones must too.
        let diags = vec![diag("a", Severity::Info)];
        if decide(&diags, "info") == Outcome::Pass {
            assert_eq!(decide(&diags, "warning"), Outcome::Pass);
            assert_eq!(decide(&diags, "error"), Outcome::Pass);
        }
        assert_eq!(decide(&diags, "warning"), Outcome::Pass);
        assert_eq!(decide(&diags, "error"), Outcome::Pass);
    }

    #[test]
    fn filter_drops_ignored_rule_ids_in_order() {
        let diags = vec![
            diag("keep-1", Severity::Error),
            diag("drop", Severity::Error),
            diag("keep-2", Severity::Info),
        ];
        let ignored: HashSet<String> = ["drop".to_string()].into_iter().collect();
        let filtered = filter_ignored(diags, &ignored);
        let ids: Vec<&str> = filtered.iter().map(|d| d.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["keep-1", "keep-2"]);
    }

    #[test]
    fn empty_ignore_set_keeps_everything() {
        let diags = vec![diag("a", Severity::Error)];
        let filtered = filter_ignored(diags.clone(), &HashSet::new());
        assert_eq!(filtered, diags);
    }
}
