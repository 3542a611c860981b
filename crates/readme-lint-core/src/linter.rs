//! Core engine for orchestrating lint execution.

use crate::parser::ReadmeParser;
use crate::rule::{Rule, RuleBox};
use crate::types::Diagnostic;

use tracing::{debug, info};

/// Builder for configuring a [`Linter`].
///
/// Rule insertion order is significant: it is the tie-break for
/// diagnostics that share a line and rule id, so the final output is
/// deterministic for a fixed rule set.
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
}

impl LinterBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules, preserving their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            parser: ReadmeParser::new(),
            rules: self.rules,
        }
    }
}

/// The engine that runs all active rules over one document.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    parser: ReadmeParser,
    rules: Vec<RuleBox>,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lints a document and returns diagnostics in canonical order.
    ///
    /// Runs every rule in insertion order against the parsed fields and
    /// raw text, stamps `file` onto diagnostics that lack one, then
    /// stable-sorts by `(line, rule_id)` with document-level diagnostics
    /// (no line) last. Never fails: a rule that cannot complete its check
    /// contributes fewer diagnostics, not an error.
    #[must_use]
    pub fn lint(&self, content: &str, file: &str) -> Vec<Diagnostic> {
        let fields = self.parser.parse(content);
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            debug!("Running rule: {}", rule.id());
            for mut diagnostic in rule.check(&fields, content) {
                if diagnostic.file.is_none() {
                    diagnostic.file = Some(file.to_string());
                }
                diagnostics.push(diagnostic);
            }
        }

        // Stable sort: line (document-level last), then rule id; ties keep
        // rule-registration order.
        diagnostics.sort_by(|a, b| {
            let line_a = a.line.unwrap_or(usize::MAX);
            let line_b = b.line.unwrap_or(usize::MAX);
            line_a.cmp(&line_b).then_with(|| a.rule_id.cmp(&b.rule_id))
        });

        info!(
            "Linted {} with {} rules: {} diagnostics",
            file,
            self.rules.len(),
            diagnostics.len()
        );

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldMap;
    use crate::types::Severity;

    struct FixedRule {
        id: &'static str,
        lines: Vec<Option<usize>>,
    }

    impl Rule for FixedRule {
        fn id(&self) -> &'static str {
            self.id
        }

        fn check(&self, _fields: &FieldMap, _raw: &str) -> Vec<Diagnostic> {
            self.lines
                .iter()
                .map(|line| {
                    Diagnostic::new(self.id, Severity::Warning, format!("from {}", self.id))
                        .with_line(*line)
                })
                .collect()
        }
    }

    #[test]
    fn stamps_file_on_all_diagnostics() {
        let linter = Linter::builder()
            .rule(FixedRule {
                id: "a",
                lines: vec![Some(1), None],
            })
            .build();

        let diags = linter.lint("content", "readme.txt");
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.file.as_deref() == Some("readme.txt")));
    }

    #[test]
    fn preserves_rule_supplied_file() {
        struct Labeled;
        impl Rule for Labeled {
            fn id(&self) -> &'static str {
                "labeled"
            }
            fn check(&self, _fields: &FieldMap, _raw: &str) -> Vec<Diagnostic> {
                vec![
                    Diagnostic::new("labeled", Severity::Info, "msg").with_file("other.txt"),
                ]
            }
        }

        let linter = Linter::builder().rule(Labeled).build();
        let diags = linter.lint("", "readme.txt");
        assert_eq!(diags[0].file.as_deref(), Some("other.txt"));
    }

    #[test]
    fn sorts_by_line_then_rule_id() {
        let linter = Linter::builder()
            .rule(FixedRule {
                id: "b",
                lines: vec![Some(5)],
            })
            .rule(FixedRule {
                id: "a",
                lines: vec![Some(3)],
            })
            .build();

        let diags = linter.lint("", "readme.txt");
        assert_eq!(diags[0].rule_id, "a");
        assert_eq!(diags[0].line, Some(3));
        assert_eq!(diags[1].rule_id, "b");
        assert_eq!(diags[1].line, Some(5));
    }

    #[test]
    fn document_level_diagnostics_sort_last() {
        let linter = Linter::builder()
            .rule(FixedRule {
                id: "z",
                lines: vec![None],
            })
            .rule(FixedRule {
                id: "a",
                lines: vec![Some(9)],
            })
            .build();

        let diags = linter.lint("", "readme.txt");
        assert_eq!(diags[0].line, Some(9));
        assert_eq!(diags[1].line, None);
    }

    #[test]
    fn same_line_sorts_by_rule_id() {
        let linter = Linter::builder()
            .rule(FixedRule {
                id: "beta",
                lines: vec![Some(2)],
            })
            .rule(FixedRule {
                id: "alpha",
                lines: vec![Some(2)],
            })
            .build();

        let diags = linter.lint("", "readme.txt");
        assert_eq!(diags[0].rule_id, "alpha");
        assert_eq!(diags[1].rule_id, "beta");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let linter = Linter::builder()
            .rule(FixedRule {
                id: "a",
                lines: vec![Some(2), None, Some(1)],
            })
            .build();

        let first = linter.lint("text", "readme.txt");
        let second = linter.lint("text", "readme.txt");
        assert_eq!(first, second);
    }
}
