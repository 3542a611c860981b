//! Report rendering for lint diagnostics.
//!
//! Each reporter is a pure function over an already filtered and sorted
//! diagnostic sequence: no mutation, no I/O. Structured formats (JSON,
//! SARIF) fail closed: if serialization is impossible they return a
//! minimal valid document rather than propagating an error out of the
//! render call.

mod annotations;
mod json;
mod sarif;
mod text;

pub use annotations::AnnotationsReporter;
pub use json::JsonReporter;
pub use sarif::SarifReporter;
pub use text::TextReporter;

use crate::types::Diagnostic;

/// Renders a diagnostic sequence into one output format.
pub trait Reporter {
    /// Renders the diagnostics to a single output string.
    fn render(&self, diagnostics: &[Diagnostic]) -> String;
}
