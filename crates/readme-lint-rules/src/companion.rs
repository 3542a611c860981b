//! Companion plugin-file access for cross-document consistency rules.
//!
//! The main plugin file carries its own `Plugin Name:` / `License:`
//! header block. Rules that compare the readme against it load the file
//! once at construction; an unreadable file means the comparison is
//! simply skipped, never an error.

use std::path::Path;

use crate::pattern::capture_first;

/// Reads the companion plugin file, logging and skipping on failure.
pub(crate) fn load(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!("Skipping plugin file {}: {}", path.display(), e);
            None
        }
    }
}

/// Extracts a header field (e.g. `License`, `Plugin Name`) from a plugin
/// file's comment header.
pub(crate) fn header_field(content: &str, field: &str) -> Option<String> {
    let pattern = format!(r"(?mi)^\s*\*\s*{}:\s*(.+)$", regex::escape(field));
    capture_first(&pattern, content)
}
