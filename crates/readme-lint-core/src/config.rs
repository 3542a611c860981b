//! Configuration types for readme-lint.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Top-level configuration for readme-lint.
///
/// Loaded once per invocation, before any linting occurs, and never
/// mutated afterwards. An unreadable or invalid file is fatal at load
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Severity threshold for a failing exit code (default: "error").
    pub fail_on: Option<String>,

    /// Rule ids whose diagnostics are suppressed entirely.
    pub ignore: Vec<String>,

    /// Section names the required-sections rule checks for.
    pub required_sections: Vec<String>,

    /// Whether a literal "trunk" stable tag is tolerated (downgraded to a
    /// warning instead of an error).
    pub allow_trunk: bool,

    /// Path to the main plugin file, for cross-file consistency checks.
    pub plugin_file: Option<PathBuf>,

    /// Pinned reference WordPress version; when unset, the tested-up-to
    /// rule may look it up best-effort.
    pub wp_version: Option<String>,

    /// Per-rule configurations.
    pub rules: HashMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_on: None,
            ignore: Vec::new(),
            required_sections: default_required_sections(),
            allow_trunk: false,
            plugin_file: None,
            wp_version: None,
            rules: HashMap::new(),
        }
    }
}

fn default_required_sections() -> Vec<String> {
    vec![
        "description".to_string(),
        "installation".to_string(),
        "changelog".to_string(),
    ]
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the effective failure threshold.
    #[must_use]
    pub fn fail_threshold(&self) -> &str {
        self.fail_on.as_deref().unwrap_or("error")
    }

    /// Returns the ignored rule ids as a set.
    #[must_use]
    pub fn ignored_rule_ids(&self) -> HashSet<String> {
        self.ignore.iter().cloned().collect()
    }

    /// Checks whether a rule is enabled, given its catalog default.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str, default_enabled: bool) -> bool {
        self.rules
            .get(rule_id)
            .and_then(|c| c.enabled)
            .unwrap_or(default_enabled)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled; unset means the catalog default.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.fail_threshold(), "error");
        assert!(config.ignore.is_empty());
        assert_eq!(
            config.required_sections,
            vec!["description", "installation", "changelog"]
        );
        assert!(!config.allow_trunk);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
fail_on = "warning"
ignore = ["file-size"]
required_sections = ["description", "faq"]
allow_trunk = true

[rules.license]
enabled = true

[rules.donate-link]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.fail_threshold(), "warning");
        assert!(config.ignored_rule_ids().contains("file-size"));
        assert_eq!(config.required_sections, vec!["description", "faq"]);
        assert!(config.allow_trunk);
        assert!(config.is_rule_enabled("license", false));
        assert!(!config.is_rule_enabled("donate-link", true));
        assert!(config.is_rule_enabled("stable-tag", true));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("fail_on = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn from_file_missing_is_an_io_error() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/readme-lint.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn from_file_reads_toml() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "fail_on = \"info\"\nallow_trunk = true").expect("write");

        let config = Config::from_file(file.path()).expect("load");
        assert_eq!(config.fail_threshold(), "info");
        assert!(config.allow_trunk);
    }
}
