//! Parsed view of a readme document.

use std::collections::HashMap;

/// Value of a single parsed field.
///
/// Fields are loosely typed: a scalar header value, a comma-separated list,
/// or a named-section map. Absence is always representable and never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single string value (e.g. `Stable tag: 1.2.0`).
    Scalar(String),
    /// An ordered list of values (e.g. contributors, tags).
    List(Vec<String>),
    /// Named sections in document order, as `(name, body)` pairs.
    Sections(Vec<(String, String)>),
}

/// The structured, parser-produced view of a readme document.
///
/// Rules consume this instead of re-parsing raw text. All accessors are
/// absent-tolerant: a missing field, an empty scalar, or an empty list all
/// read as "absent".
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: HashMap<String, FieldValue>,
}

impl FieldMap {
    /// Creates an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field value, replacing any previous value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.entries.insert(name.into(), value);
    }

    /// Returns a scalar field, treating empty strings as absent.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(FieldValue::Scalar(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns a list field; missing or non-list fields read as empty.
    #[must_use]
    pub fn list(&self, name: &str) -> &[String] {
        match self.entries.get(name) {
            Some(FieldValue::List(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Returns a section-map field; missing or non-section fields read as
    /// empty.
    #[must_use]
    pub fn section_map(&self, name: &str) -> &[(String, String)] {
        match self.entries.get(name) {
            Some(FieldValue::Sections(sections)) => sections.as_slice(),
            _ => &[],
        }
    }

    /// Returns the document's `== Section ==` bodies in parse order.
    #[must_use]
    pub fn sections(&self) -> &[(String, String)] {
        self.section_map("sections")
    }

    /// Returns `true` if the named field is absent or empty.
    #[must_use]
    pub fn is_absent(&self, name: &str) -> bool {
        match self.entries.get(name) {
            None => true,
            Some(FieldValue::Scalar(s)) => s.trim().is_empty(),
            Some(FieldValue::List(items)) => items.is_empty(),
            Some(FieldValue::Sections(sections)) => sections.is_empty(),
        }
    }
}
