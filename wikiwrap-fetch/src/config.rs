//! Retrieval configuration with sensible defaults.
//!
//! [`FetchConfig`] controls which MediaWiki endpoint is queried and how the
//! HTTP client behaves. The defaults target English Wikipedia.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default MediaWiki API endpoint.
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Configuration for article retrieval.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Full URL of the MediaWiki `api.php` endpoint.
    pub api_url: String,
    /// HTTP request timeout in seconds, applied to each upstream call.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, a descriptive default naming
    /// this crate is sent, as Wikimedia's API etiquette asks.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl FetchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `api_url` must be an absolute `http` or `https` URL
    /// - `user_agent`, when set, must not be blank
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.timeout_seconds == 0 {
            return Err(FetchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }

        let url = Url::parse(&self.api_url)
            .map_err(|e| FetchError::Config(format!("api_url is not a valid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::Config(format!(
                "api_url must use http or https, got {}",
                url.scheme()
            )));
        }

        if let Some(ref ua) = self.user_agent {
            if ua.trim().is_empty() {
                return Err(FetchError::Config("user_agent must not be blank".into()));
            }
        }
        Ok(())
    }
}
