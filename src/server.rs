//! HTTP front end for article lookups.
//!
//! ## Endpoints
//!
//! - `GET /` — body `{"search_term": "..."}`, answers `{"title", "text_content"}`
//! - `GET /health` — liveness probe

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;
use wikiwrap_fetch::{ArticleContent, FetchConfig};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of a `GET /` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    /// Free-form search term, passed upstream unchanged.
    pub search_term: String,
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Shared state for axum handlers. Read-only once built.
#[derive(Clone)]
pub struct AppState {
    fetch: Arc<FetchConfig>,
    client: reqwest::Client,
}

impl AppState {
    /// Build state from the wiki section of the service config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client cannot
    /// be built.
    pub fn new(fetch: FetchConfig) -> Result<Self> {
        fetch.validate()?;
        let client = wikiwrap_fetch::http::build_client(&fetch)?;
        Ok(Self {
            fetch: Arc::new(fetch),
            client,
        })
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_content))
        .route("/health", get(handle_health))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// ContentServer
// ---------------------------------------------------------------------------

/// The running HTTP service.
///
/// Serving happens on a background tokio task; dropping the server aborts it.
pub struct ContentServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ContentServer {
    /// Start the server.
    ///
    /// Binds to `{server.host}:{server.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the TCP listener cannot bind.
    pub async fn start(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        let app = router(AppState::new(config.wiki.clone())?);

        let listener = TcpListener::bind(config.bind_addr()).await?;
        let addr = listener.local_addr()?;

        info!("wikiwrap listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ContentServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decode the request body without requiring a JSON `Content-Type`.
fn parse_request(body: &[u8]) -> Result<ContentRequest> {
    if body.is_empty() {
        return Err(ServiceError::Validation(
            "request body must be a JSON object with `search_term`".into(),
        ));
    }
    serde_json::from_slice(body).map_err(|e| ServiceError::Validation(e.to_string()))
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `GET /` — look up and clean the best-matching article.
async fn handle_content(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ArticleContent>> {
    let request = parse_request(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected content request");
    })?;

    let article =
        wikiwrap_fetch::get_content_with_client(&state.client, &state.fetch, &request.search_term)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "content lookup failed");
                ServiceError::from(e)
            })?;

    info!(
        title = %article.title,
        paragraphs = article.text_content.len(),
        "content request served"
    );
    Ok(Json(article))
}

/// `GET /health` — liveness probe.
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn parse_request_reads_search_term() {
        let request = parse_request(br#"{"search_term":"dandelion"}"#).unwrap();
        assert_eq!(request.search_term, "dandelion");
    }

    #[test]
    fn parse_request_ignores_extra_fields() {
        let request = parse_request(br#"{"search_term":"x","lang":"en"}"#).unwrap();
        assert_eq!(request.search_term, "x");
    }

    #[test]
    fn parse_request_missing_field_is_validation_error() {
        let err = parse_request(br#"{"term":"dandelion"}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(err.to_string().contains("search_term"));
    }

    #[test]
    fn parse_request_wrong_type_is_validation_error() {
        let err = parse_request(br#"{"search_term": 42}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn parse_request_empty_body_is_validation_error() {
        let err = parse_request(b"").unwrap_err();
        assert!(err.to_string().contains("search_term"));
    }

    #[test]
    fn parse_request_invalid_json_is_validation_error() {
        assert!(matches!(
            parse_request(b"search_term=dandelion"),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn app_state_rejects_invalid_fetch_config() {
        let fetch = FetchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(matches!(AppState::new(fetch), Err(ServiceError::Config(_))));
    }

    #[tokio::test]
    async fn start_binds_ephemeral_port() {
        let mut config = ServiceConfig::default();
        config.server.port = 0;
        let server = ContentServer::start(&config).await.unwrap();
        assert_ne!(server.port(), 0);
        assert!(server.addr().ip().is_loopback());
        server.shutdown();
    }
}
