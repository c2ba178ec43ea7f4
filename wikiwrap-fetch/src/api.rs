//! MediaWiki `api.php` calls: search for the best page, then fetch its HTML.
//!
//! Both calls go to the same endpoint and differ only in their query
//! parameters. Response bodies are decoded into explicit types so that a
//! shape change upstream fails fast with [`FetchError::Parse`].

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::types::PageReference;
use serde::Deserialize;

/// Error object MediaWiki returns (with HTTP 200) for rejected requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    #[serde(default)]
    info: String,
}

impl ApiErrorBody {
    fn into_error(self) -> FetchError {
        FetchError::Api {
            code: self.code,
            info: self.info,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    error: Option<ApiErrorBody>,
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<PageReference>,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    error: Option<ApiErrorBody>,
    parse: Option<ParsedPage>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    text: ParsedText,
}

#[derive(Debug, Deserialize)]
struct ParsedText {
    #[serde(rename = "*")]
    html: String,
}

/// Find the most relevant page for `search_term`.
///
/// Issues `action=query&list=search&srlimit=1` and returns the first hit,
/// relying on the API's own relevance ordering.
///
/// # Errors
///
/// - [`FetchError::NotFound`] if the search has no hits
/// - [`FetchError::Http`] on transport failure or non-2xx status
/// - [`FetchError::Api`] if MediaWiki rejects the request
/// - [`FetchError::Parse`] if the body is not the expected shape
pub async fn resolve_page(
    client: &reqwest::Client,
    config: &FetchConfig,
    search_term: &str,
) -> Result<PageReference> {
    let params = [
        ("action", "query"),
        ("format", "json"),
        ("list", "search"),
        ("srsearch", search_term),
        ("srlimit", "1"),
    ];
    let body = get_body(client, config, &params, "search").await?;
    parse_search_response(&body, search_term)
}

/// Fetch the rendered HTML body of `page`.
///
/// Issues `action=parse&prop=text` for the page's id.
///
/// # Errors
///
/// Same classes as [`resolve_page`], except a missing page is reported by
/// MediaWiki itself and therefore surfaces as [`FetchError::Api`].
pub async fn fetch_html(
    client: &reqwest::Client,
    config: &FetchConfig,
    page: &PageReference,
) -> Result<String> {
    let page_id = page.page_id.to_string();
    let params = [
        ("action", "parse"),
        ("pageid", page_id.as_str()),
        ("format", "json"),
        ("prop", "text"),
    ];
    let body = get_body(client, config, &params, "parse").await?;
    parse_html_response(&body)
}

/// Send a GET to the configured endpoint and return the body text.
async fn get_body(
    client: &reqwest::Client,
    config: &FetchConfig,
    params: &[(&str, &str)],
    label: &str,
) -> Result<String> {
    let response = client
        .get(&config.api_url)
        .query(params)
        .send()
        .await
        .map_err(|e| FetchError::Http(format!("{label} request failed: {e}")))?
        .error_for_status()
        .map_err(|e| FetchError::Http(format!("{label} HTTP error: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Http(format!("{label} response read failed: {e}")))?;

    tracing::trace!(label, bytes = body.len(), "MediaWiki response received");
    Ok(body)
}

/// Decode a search response body into the first hit.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_search_response(body: &str, search_term: &str) -> Result<PageReference> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("invalid search response: {e}")))?;

    if let Some(error) = response.error {
        return Err(error.into_error());
    }

    let query = response
        .query
        .ok_or_else(|| FetchError::Parse("search response missing `query`".into()))?;

    query
        .search
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NotFound(format!("no results for {search_term:?}")))
}

/// Decode a parse response body into its HTML string.
pub(crate) fn parse_html_response(body: &str) -> Result<String> {
    let response: ParseResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("invalid parse response: {e}")))?;

    if let Some(error) = response.error {
        return Err(error.into_error());
    }

    response
        .parse
        .map(|page| page.text.html)
        .ok_or_else(|| FetchError::Parse("parse response missing `parse`".into()))
}
