//! Error types for the wikiwrap-fetch crate.
//!
//! Every step of the lookup chain reports failure through [`FetchError`];
//! nothing is swallowed or replaced with a partial result.

/// Errors that can occur while retrieving an article.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The search returned no matching pages.
    #[error("no article found: {0}")]
    NotFound(String),

    /// The HTTP request to the encyclopedia API failed or returned a
    /// non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with an explicit error object.
    #[error("API error {code}: {info}")]
    Api {
        /// Machine-readable MediaWiki error code (e.g. `nosuchpageid`).
        code: String,
        /// Human-readable description supplied by the API.
        info: String,
    },

    /// The API response did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid fetch configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for wikiwrap-fetch results.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = FetchError::NotFound("no results for \"zzzz\"".into());
        assert_eq!(err.to_string(), "no article found: no results for \"zzzz\"");
    }

    #[test]
    fn display_http() {
        let err = FetchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_api() {
        let err = FetchError::Api {
            code: "nosuchpageid".into(),
            info: "There is no page with ID 0.".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error nosuchpageid: There is no page with ID 0."
        );
    }

    #[test]
    fn display_parse() {
        let err = FetchError::Parse("missing query.search".into());
        assert_eq!(err.to_string(), "parse error: missing query.search");
    }

    #[test]
    fn display_config() {
        let err = FetchError::Config("timeout_seconds must be > 0".into());
        assert_eq!(err.to_string(), "config error: timeout_seconds must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
    }
}
