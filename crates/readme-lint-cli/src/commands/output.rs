//! Shared report rendering and summary output.

use readme_lint_core::reporter::{
    AnnotationsReporter, JsonReporter, Reporter, SarifReporter, TextReporter,
};
use readme_lint_core::{severity_counts, Diagnostic};

use crate::OutputFormat;

/// Renders the diagnostics in the selected format.
#[must_use]
pub fn render(diagnostics: &[Diagnostic], format: OutputFormat) -> String {
    let reporter: Box<dyn Reporter> = match format {
        OutputFormat::Text => Box::new(TextReporter::new()),
        OutputFormat::Annotations => Box::new(AnnotationsReporter::new()),
        OutputFormat::Json => Box::new(JsonReporter::new()),
        OutputFormat::Sarif => Box::new(SarifReporter::new()),
    };
    reporter.render(diagnostics)
}

/// Prints the severity-count summary footer.
pub fn print_summary(diagnostics: &[Diagnostic]) {
    let (errors, warnings, info) = severity_counts(diagnostics);

    println!();
    println!("Summary:");
    println!("  Errors: {errors}");
    println!("  Warnings: {warnings}");
    println!("  Info: {info}");
    println!("  Total: {}", diagnostics.len());
}
