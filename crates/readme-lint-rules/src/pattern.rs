//! Regex helpers for table-driven rules.
//!
//! Pattern tables are kept as plain strings and compiled on demand; an
//! invalid pattern behaves as a non-match so a bad table entry can never
//! abort a rule.

use regex::Regex;

/// Returns `true` if `pattern` matches anywhere in `text`.
pub(crate) fn is_match(pattern: &str, text: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(text)).unwrap_or(false)
}

/// Finds the first match of `pattern` in `text`, returning its byte
/// offset and matched slice.
pub(crate) fn first_match<'t>(pattern: &str, text: &'t str) -> Option<(usize, &'t str)> {
    let re = Regex::new(pattern).ok()?;
    re.find(text).map(|m| (m.start(), m.as_str()))
}

/// Returns the first capture group of the first match, trimmed.
pub(crate) fn capture_first(pattern: &str, text: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_match_on_valid_pattern() {
        assert!(is_match(r"(?i)lorem ipsum", "Some Lorem Ipsum text"));
        assert!(!is_match(r"^\d+$", "abc"));
    }

    #[test]
    fn invalid_pattern_is_a_non_match() {
        assert!(!is_match(r"([unclosed", "anything"));
        assert!(first_match(r"([unclosed", "anything").is_none());
    }

    #[test]
    fn first_match_reports_offset() {
        let (offset, matched) = first_match(r"b+", "aaabbbccc").expect("match");
        assert_eq!(offset, 3);
        assert_eq!(matched, "bbb");
    }

    #[test]
    fn capture_first_trims() {
        let value = capture_first(r"(?m)^License:\s*(.+)$", "License:  GPLv2  ").expect("capture");
        assert_eq!(value, "GPLv2");
    }
}
