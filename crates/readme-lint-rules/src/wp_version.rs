//! Reference WordPress version lookup.
//!
//! The tested-up-to rule compares against "the current WordPress
//! version", which is inherently external state. It is modeled as an
//! injected provider so the rule stays a pure function of its
//! construction-time inputs: tests pin a version, the CLI wires in the
//! best-effort HTTP lookup. A failed lookup yields no enrichment, never
//! an error.

use std::time::Duration;

/// Supplies the reference WordPress version, if one can be determined.
pub trait WpVersionProvider: Send + Sync {
    /// Returns the current WordPress version, or `None` when unknown.
    fn current_version(&self) -> Option<String>;
}

/// A provider pinned to a fixed version string.
#[derive(Debug, Clone)]
pub struct PinnedVersion(pub String);

impl WpVersionProvider for PinnedVersion {
    fn current_version(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Queries the WordPress.org version-check API, single attempt with a
/// short timeout.
#[derive(Debug, Clone)]
pub struct WpOrgApi {
    timeout: Duration,
}

const VERSION_CHECK_URL: &str = "https://api.wordpress.org/core/version-check/1.7/";

impl Default for WpOrgApi {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}

impl WpOrgApi {
    /// Creates a provider with the default 5 second timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl WpVersionProvider for WpOrgApi {
    fn current_version(&self) -> Option<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("readme-lint/", env!("CARGO_PKG_VERSION")))
            .build()
            .ok()?;

        let response = match client.get(VERSION_CHECK_URL).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("WordPress version lookup failed: {}", e);
                return None;
            }
        };

        let body: serde_json::Value = response.json().ok()?;
        let version = body
            .get("offers")?
            .get(0)?
            .get("version")?
            .as_str()?
            .to_string();

        tracing::debug!("Current WordPress version: {}", version);
        Some(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_provider_returns_its_version() {
        let provider = PinnedVersion("6.4.0".to_string());
        assert_eq!(provider.current_version().as_deref(), Some("6.4.0"));
    }
}
