//! Core types for lint diagnostics.

use serde::{Deserialize, Serialize};

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding, advisory only.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed before submission.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding produced by a rule.
///
/// `line` and `column` are 1-indexed; a diagnostic without a line is
/// document-level and sorts after all line-anchored diagnostics. `file` is
/// stamped by the engine when the rule did not set one, and is never `None`
/// in diagnostics returned from [`crate::Linter::lint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Identifier of the rule that raised this diagnostic.
    pub rule_id: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Human-readable message, final as rendered.
    pub message: String,
    /// Line in the source document, if the finding is line-anchored.
    pub line: Option<usize>,
    /// Column within `line`; only meaningful when `line` is set.
    pub column: Option<usize>,
    /// Label of the source document.
    pub file: Option<String>,
}

impl Diagnostic {
    /// Creates a new document-level diagnostic.
    #[must_use]
    pub fn new(rule_id: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            line: None,
            column: None,
            file: None,
        }
    }

    /// Anchors this diagnostic to a line, if one was found.
    #[must_use]
    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    /// Sets the column within the anchored line.
    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Sets the source-file label.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.file.as_deref().unwrap_or("<unknown>"),
            self.line.map_or_else(|| "-".to_string(), |l| l.to_string()),
            self.severity,
            self.rule_id,
            self.message
        )
    }
}

/// Counts diagnostics by severity as `(errors, warnings, info)`.
#[must_use]
pub fn severity_counts(diagnostics: &[Diagnostic]) -> (usize, usize, usize) {
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    let info = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Info)
        .count();
    (errors, warnings, info)
}
