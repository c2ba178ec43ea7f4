//! # wikiwrap-fetch
//!
//! Looks up the most relevant Wikipedia article for a search term and
//! returns its title plus cleaned paragraph text.
//!
//! ## Design
//!
//! - Two sequential MediaWiki API calls: `list=search` with `srlimit=1`,
//!   then `action=parse` for the winning page id
//! - Paragraph text extracted with CSS selectors on the rendered HTML
//! - Bracketed spans (citation markers) removed, text NFKD-normalised,
//!   whitespace collapsed
//! - No retries, no caching, no partial results: any failing step fails
//!   the whole lookup
//!
//! ## Logging
//!
//! Search terms are logged only at debug level.

pub mod api;
pub mod clean;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod types;

pub use config::FetchConfig;
pub use error::{FetchError, Result};
pub use types::{ArticleContent, PageReference};

/// Retrieve and clean the most relevant article for `search_term`.
///
/// Validates `config`, builds a client, and runs the full lookup.
///
/// # Errors
///
/// Returns [`FetchError::Config`] for an invalid config, and otherwise
/// whatever [`get_content_with_client`] returns.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> wikiwrap_fetch::Result<()> {
/// let config = wikiwrap_fetch::FetchConfig::default();
/// let article = wikiwrap_fetch::get_content("dandelion", &config).await?;
/// println!("{}: {} paragraphs", article.title, article.text_content.len());
/// # Ok(())
/// # }
/// ```
pub async fn get_content(search_term: &str, config: &FetchConfig) -> Result<ArticleContent> {
    config.validate()?;
    let client = http::build_client(config)?;
    get_content_with_client(&client, config, search_term).await
}

/// Retrieve an article with the default configuration.
///
/// # Errors
///
/// Same as [`get_content`].
pub async fn get_content_default(search_term: &str) -> Result<ArticleContent> {
    get_content(search_term, &FetchConfig::default()).await
}

/// Run the lookup with an existing client.
///
/// The search must finish before the content fetch starts, since the
/// second call needs the page id from the first.
///
/// # Errors
///
/// - [`FetchError::NotFound`] if the search has no hits
/// - [`FetchError::Http`] / [`FetchError::Api`] for upstream failures
/// - [`FetchError::Parse`] for malformed upstream responses
pub async fn get_content_with_client(
    client: &reqwest::Client,
    config: &FetchConfig,
    search_term: &str,
) -> Result<ArticleContent> {
    tracing::debug!(search_term, "resolving article");

    let page = api::resolve_page(client, config, search_term).await?;
    tracing::debug!(title = %page.title, page_id = page.page_id, "article resolved");

    let html = api::fetch_html(client, config, &page).await?;
    let paragraphs = content::extract_paragraphs(&html)?;
    let text_content = clean::clean_paragraphs(paragraphs);

    tracing::debug!(
        title = %page.title,
        paragraphs = text_content.len(),
        "article content cleaned"
    );

    Ok(ArticleContent {
        title: page.title,
        text_content,
    })
}
