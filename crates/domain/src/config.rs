//! Client configuration.
//!
//! Timeout, attempt count and expiry buffer are compile-time constants;
//! only the base URL is expected to vary between builds and deployments.

use std::time::Duration;

use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::retry::RetryPolicy;

/// Per-attempt timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// A token counts as expired this long before its real expiry.
pub const EXPIRY_BUFFER: Duration = Duration::from_secs(5 * 60);

/// Fixed storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Configuration shared by the request core and the token store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL prepended to every request path. Empty means relative paths.
    pub base_url: String,
    /// Timeout applied to each attempt independently.
    pub timeout: Duration,
    /// Retry ceiling and backoff.
    pub retry: RetryPolicy,
    /// Pre-expiry window during which a token is treated as expired.
    pub expiry_buffer: Duration,
}

impl ClientConfig {
    /// Creates a configuration with defaults and the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Checks that the base URL is empty or an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBaseUrl` otherwise.
    pub fn validate(&self) -> DomainResult<()> {
        if self.base_url.is_empty() {
            return Ok(());
        }
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {}", self.base_url)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(DomainError::InvalidBaseUrl(format!(
                "unsupported scheme '{other}'"
            ))),
        }
    }

    /// Joins the base URL and a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Per-attempt timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retry: RetryPolicy::default(),
            expiry_buffer: EXPIRY_BUFFER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "");
        assert_eq!(config.timeout_ms(), 30_000);
        assert_eq!(config.retry.max_attempts(), 3);
        assert_eq!(config.expiry_buffer, Duration::from_secs(300));
    }

    #[test]
    fn test_url_for_joins_slashes() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(
            config.url_for("/api/habits"),
            "https://api.example.com/api/habits"
        );
        assert_eq!(
            config.url_for("api/habits"),
            "https://api.example.com/api/habits"
        );
    }

    #[test]
    fn test_empty_base_keeps_path_relative() {
        let config = ClientConfig::default();
        assert_eq!(config.url_for("/api/habits"), "/api/habits");
    }

    #[test]
    fn test_validate() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::new("http://localhost:8080").validate().is_ok());
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("ftp://files.example.com").validate().is_err());
    }
}
