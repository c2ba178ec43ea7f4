//! Shared HTTP client for MediaWiki API requests.
//!
//! Provides a configured [`reqwest::Client`] with a descriptive User-Agent
//! and the configured timeout.

use crate::config::FetchConfig;
use crate::error::FetchError;
use std::time::Duration;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "wikiwrap/",
    env!("CARGO_PKG_VERSION"),
    " (article text service; reqwest)"
);

/// Build a [`reqwest::Client`] configured for MediaWiki API calls.
///
/// The client has:
/// - Timeout from config
/// - Custom User-Agent if configured, otherwise [`DEFAULT_USER_AGENT`]
/// - gzip decompression
///
/// # Errors
///
/// Returns [`FetchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &FetchConfig) -> Result<reqwest::Client, FetchError> {
    let ua = config
        .user_agent
        .as_deref()
        .unwrap_or(DEFAULT_USER_AGENT)
        .to_owned();

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| FetchError::Http(format!("failed to build HTTP client: {e}")))
}
