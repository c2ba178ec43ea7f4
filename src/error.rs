//! Error types for the wikiwrap service.
//!
//! [`ServiceError`] classifies every failure a request can hit and maps it
//! to an HTTP status plus a JSON error body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use wikiwrap_fetch::FetchError;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request body was missing, not JSON, or lacked `search_term`.
    #[error("invalid request: {0}")]
    Validation(String),

    /// No article matched the search term.
    #[error("not found: {0}")]
    NotFound(String),

    /// The encyclopedia API could not be reached or rejected the call.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The encyclopedia API answered with an unexpected shape.
    #[error("malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServiceError>;

impl From<FetchError> for ServiceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound(msg) => Self::NotFound(msg),
            FetchError::Http(_) | FetchError::Api { .. } => {
                Self::UpstreamUnavailable(err.to_string())
            }
            FetchError::Parse(msg) => Self::MalformedUpstreamResponse(msg),
            FetchError::Config(msg) => Self::Config(msg),
        }
    }
}

impl ServiceError {
    /// HTTP status code reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UpstreamUnavailable(_) | Self::MalformedUpstreamResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error type.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
            Self::MalformedUpstreamResponse(_) => "malformed_upstream_response",
            Self::Config(_) | Self::Io(_) => "server_error",
        }
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error details.
    pub error: ErrorBody,
}

/// Error details within an [`ErrorResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
    /// Error type (e.g. `"not_found"`, `"validation_error"`).
    #[serde(rename = "type")]
    pub error_type: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                message: self.to_string(),
                error_type: self.error_type().to_owned(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ServiceError::from(FetchError::NotFound("no results".into()));
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "not_found");
    }

    #[test]
    fn http_failure_maps_to_bad_gateway() {
        let err = ServiceError::from(FetchError::Http("connection refused".into()));
        assert!(matches!(err, ServiceError::UpstreamUnavailable(_)));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn api_error_maps_to_upstream_unavailable() {
        let err = ServiceError::from(FetchError::Api {
            code: "maxlag".into(),
            info: "Waiting for a database server".into(),
        });
        assert_eq!(err.error_type(), "upstream_unavailable");
        assert!(err.to_string().contains("maxlag"));
    }

    #[test]
    fn parse_failure_maps_to_malformed() {
        let err = ServiceError::from(FetchError::Parse("missing `query`".into()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_type(), "malformed_upstream_response");
    }

    #[test]
    fn config_failure_maps_to_500() {
        let err = ServiceError::from(FetchError::Config("bad url".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "server_error");
    }

    #[test]
    fn validation_is_400() {
        let err = ServiceError::Validation("missing field `search_term`".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "invalid request: missing field `search_term`"
        );
    }

    #[test]
    fn error_response_uses_type_key() {
        let body = ErrorResponse {
            error: ErrorBody {
                message: "m".into(),
                error_type: "not_found".into(),
            },
        };
        let value = serde_json::to_value(body).expect("serialize");
        assert_eq!(value["error"]["type"], "not_found");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceError>();
    }
}
