//! Rule bounding overall readme size.

use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

/// Rule id for file-size.
pub const ID: &str = "file-size";

const MAX_SIZE_BYTES: usize = 20_480; // 20KB
const WARN_SIZE_BYTES: usize = 10_240; // 10KB

/// Flags readmes that are larger than the directory comfortably renders.
/// Document-level: the findings carry no line number.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSize;

impl FileSize {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FileSize {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Readme file size should be reasonable"
    }

    fn check(&self, _fields: &FieldMap, raw: &str) -> Vec<Diagnostic> {
        let size = raw.len();

        if size > MAX_SIZE_BYTES {
            return vec![Diagnostic::new(
                ID,
                Severity::Warning,
                format!(
                    "Readme file is very large ({}, maximum recommended {})",
                    format_bytes(size),
                    format_bytes(MAX_SIZE_BYTES)
                ),
            )];
        }

        if size > WARN_SIZE_BYTES {
            return vec![Diagnostic::new(
                ID,
                Severity::Info,
                format!("Readme file is getting large ({})", format_bytes(size)),
            )];
        }

        Vec::new()
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} bytes")
    }
}
