//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the feed
//! source and the listing session. Binaries read environment variables; this module
//! only parses and validates the values they hand over.

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_ENDPOINT, DEFAULT_FETCH_TIMEOUT_SECS};
use crate::{DirectoryError, DirectoryResult};
use std::time::Duration;
use url::Url;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    endpoint: Url,
    fetch_timeout: Duration,
    base_path: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidInput`] if the endpoint is not http(s), the
    /// timeout is zero, or the base path does not start with `/`.
    pub fn new(endpoint: Url, fetch_timeout: Duration, base_path: String) -> DirectoryResult<Self> {
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(DirectoryError::InvalidInput(format!(
                "feed endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        if fetch_timeout.is_zero() {
            return Err(DirectoryError::InvalidInput(
                "fetch timeout must be greater than zero".into(),
            ));
        }

        if !base_path.starts_with('/') || base_path.contains('?') {
            return Err(DirectoryError::InvalidInput(
                "base path must start with '/' and must not contain a query".into(),
            ));
        }

        Ok(Self {
            endpoint,
            fetch_timeout,
            base_path,
        })
    }

    /// Build a configuration from optional raw values, falling back to defaults.
    ///
    /// Blank values count as absent.
    pub fn from_values(
        endpoint: Option<String>,
        fetch_timeout_secs: Option<String>,
        base_path: Option<String>,
    ) -> DirectoryResult<Self> {
        let endpoint = non_blank(endpoint).unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let endpoint = Url::parse(&endpoint)?;
        let fetch_timeout = fetch_timeout_from_value(fetch_timeout_secs)?;
        let base_path = non_blank(base_path).unwrap_or_else(|| DEFAULT_BASE_PATH.into());

        Self::new(endpoint, fetch_timeout, base_path)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

/// Parse the fetch timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn fetch_timeout_from_value(value: Option<String>) -> DirectoryResult<Duration> {
    let Some(value) = non_blank(value) else {
        return Ok(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
    };

    let secs = value.parse::<u64>().map_err(|_| {
        DirectoryError::InvalidInput(format!(
            "fetch timeout must be a whole number of seconds, got '{value}'"
        ))
    })?;

    Ok(Duration::from_secs(secs))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
