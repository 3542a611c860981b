//! Line-oriented parser for plugin readme files.
//!
//! Produces the [`FieldMap`] consumed by rules. The grammar is deliberately
//! small: a `=== Plugin Name ===` title, `Label: value` header fields, a
//! short-description paragraph, `== Section ==` bodies, and `= version =`
//! subsections inside the upgrade-notice section. Anything unrecognized is
//! simply absent from the result; parsing never fails.

use crate::fields::{FieldMap, FieldValue};

/// Header labels mapped to field names; list-valued fields are
/// comma-separated.
const HEADER_FIELDS: &[(&str, &str, bool)] = &[
    ("Contributors", "contributors", true),
    ("Donate link", "donate_link", false),
    ("Tags", "tags", true),
    ("Requires at least", "requires", false),
    ("Tested up to", "tested", false),
    ("Requires PHP", "requires_php", false),
    ("Stable tag", "stable_tag", false),
    ("License URI", "license_uri", false),
    ("License", "license", false),
];

/// Parser for plugin readme documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadmeParser;

impl ReadmeParser {
    /// Creates a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses raw readme text into a field map.
    #[must_use]
    pub fn parse(&self, content: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        let mut sections: Vec<(String, String)> = Vec::new();
        let mut current_section: Option<(String, String)> = None;
        let mut short_description: Option<String> = None;
        let mut past_header_blank = false;

        for line in content.lines() {
            let trimmed = line.trim();

            if current_section.is_none() && fields.is_absent("name") {
                if let Some(name) = title_text(trimmed) {
                    fields.insert("name", FieldValue::Scalar(name.to_string()));
                    continue;
                }
            }

            if let Some(name) = section_name(trimmed) {
                if let Some((prev_name, prev_body)) = current_section.take() {
                    sections.push((prev_name, prev_body.trim().to_string()));
                }
                current_section = Some((name.to_string(), String::new()));
                continue;
            }

            if let Some((_, body)) = current_section.as_mut() {
                body.push_str(line);
                body.push('\n');
                continue;
            }

            // Still in the header block.
            if trimmed.is_empty() {
                past_header_blank = true;
                continue;
            }

            if let Some((key, value, is_list)) = header_field(trimmed) {
                if is_list {
                    let items: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect();
                    fields.insert(key, FieldValue::List(items));
                } else {
                    fields.insert(key, FieldValue::Scalar(value.to_string()));
                }
                continue;
            }

            // First free-form line after the header fields is the short
            // description.
            if past_header_blank && short_description.is_none() {
                short_description = Some(trimmed.to_string());
            }
        }

        if let Some((name, body)) = current_section.take() {
            sections.push((name, body.trim().to_string()));
        }

        if let Some(desc) = short_description {
            fields.insert("short_description", FieldValue::Scalar(desc));
        }

        let notices = upgrade_notices(&sections);
        if !notices.is_empty() {
            fields.insert("upgrade_notice", FieldValue::Sections(notices));
        }

        fields.insert("sections", FieldValue::Sections(sections));
        fields
    }
}

/// Extracts the plugin name from a `=== Name ===` title line.
fn title_text(line: &str) -> Option<&str> {
    let inner = line.strip_prefix("===")?.strip_suffix("===")?;
    let inner = inner.trim();
    if inner.is_empty() || inner.contains('=') {
        return None;
    }
    Some(inner)
}

/// Extracts a section name from a `== Section ==` line.
fn section_name(line: &str) -> Option<&str> {
    if line.starts_with("===") {
        return None;
    }
    let inner = line.strip_prefix("==")?.strip_suffix("==")?;
    let inner = inner.trim();
    if inner.is_empty() || inner.starts_with('=') || inner.ends_with('=') {
        return None;
    }
    Some(inner)
}

/// Extracts a subsection name from a `= 1.2.3 =` line.
fn subsection_name(line: &str) -> Option<&str> {
    if line.starts_with("==") {
        return None;
    }
    let inner = line.strip_prefix('=')?.strip_suffix('=')?;
    let inner = inner.trim();
    if inner.is_empty() || inner.starts_with('=') || inner.ends_with('=') {
        return None;
    }
    Some(inner)
}

/// Matches a known `Label: value` header line, case-insensitively.
fn header_field(line: &str) -> Option<(&'static str, &str, bool)> {
    let colon = line.find(':')?;
    let label = line[..colon].trim();
    for &(known, key, is_list) in HEADER_FIELDS {
        if label.eq_ignore_ascii_case(known) {
            return Some((key, line[colon + 1..].trim(), is_list));
        }
    }
    None
}

/// Splits the upgrade-notice section into per-version notices.
fn upgrade_notices(sections: &[(String, String)]) -> Vec<(String, String)> {
    let Some((_, body)) = sections
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("upgrade notice"))
    else {
        return Vec::new();
    };

    let mut notices: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(version) = subsection_name(trimmed) {
            if let Some((v, text)) = current.take() {
                notices.push((v, text.trim().to_string()));
            }
            current = Some((version.to_string(), String::new()));
        } else if let Some((_, text)) = current.as_mut() {
            text.push_str(line);
            text.push('\n');
        }
    }

    if let Some((v, text)) = current.take() {
        notices.push((v, text.trim().to_string()));
    }

    notices
}
