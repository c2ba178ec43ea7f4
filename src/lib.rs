//! wikiwrap: Wikipedia article text over HTTP.
//!
//! A thin service in front of [`wikiwrap_fetch`]:
//! request body → search term → article lookup → JSON response.
//!
//! # Architecture
//!
//! - **Config**: TOML file with `[server]` and `[wiki]` sections
//! - **Server**: axum router exposing `GET /` and `GET /health`
//! - **Errors**: every failure maps to a status code and JSON error body;
//!   there are no partial results

pub mod config;
pub mod error;
pub mod server;

pub use config::{ServerConfig, ServiceConfig};
pub use error::{Result, ServiceError};
pub use server::{AppState, ContentRequest, ContentServer, router};
