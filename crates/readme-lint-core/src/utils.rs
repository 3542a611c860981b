//! Shared helpers for rule implementations.

/// Finds the 1-indexed line on which `needle` first appears.
///
/// This is a case-insensitive literal substring scan, not a pattern match:
/// the first line containing the needle wins, and `None` means the text was
/// not found anywhere. Rules use this to anchor diagnostics to the label
/// they refer to, so the first-match-wins behavior is load-bearing for
/// message stability.
#[must_use]
pub fn find_line(content: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let needle_lower = needle.to_lowercase();
    content
        .lines()
        .position(|line| line.to_lowercase().contains(&needle_lower))
        .map(|idx| idx + 1)
}

/// Converts a byte offset into a 1-indexed line number.
#[must_use]
pub fn line_at_offset(content: &str, offset: usize) -> usize {
    let clamped = offset.min(content.len());
    content[..clamped].matches('\n').count() + 1
}

/// Strips HTML-style tags from text.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Collapses runs of whitespace to single spaces and lowercases, for
/// loose equality comparisons.
#[must_use]
pub fn normalize_loose(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Truncates text to `max_len` bytes, appending an ellipsis when cut.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }
    let mut end = max_len;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
