//! Rule requiring a configured set of document sections.

use readme_lint_core::{Diagnostic, FieldMap, Rule, Severity};

/// Rule id for required-sections.
pub const ID: &str = "required-sections";

/// Reports an error for each configured section name missing from the
/// document. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct RequiredSections {
    required: Vec<String>,
}

impl Default for RequiredSections {
    fn default() -> Self {
        Self::new(["description", "installation", "changelog"])
    }
}

impl RequiredSections {
    /// Creates a new rule with the given section-name list.
    #[must_use]
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required
                .into_iter()
                .map(|s| s.into().to_lowercase())
                .collect(),
        }
    }
}

impl Rule for RequiredSections {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Required sections must be present"
    }

    fn check(&self, fields: &FieldMap, _raw: &str) -> Vec<Diagnostic> {
        let present: Vec<String> = fields
            .sections()
            .iter()
            .map(|(name, _)| name.to_lowercase())
            .collect();

        self.required
            .iter()
            .filter(|required| !present.contains(required))
            .map(|missing| {
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    format!("Missing required section: {}", capitalize(missing)),
                )
            })
            .collect()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
