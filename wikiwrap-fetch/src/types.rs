//! Core types: the page reference resolved by search and the final article.

use serde::{Deserialize, Serialize};

/// The single most relevant page for a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReference {
    /// Page title exactly as the API reports it.
    pub title: String,
    /// Numeric MediaWiki page identifier.
    #[serde(rename = "pageid")]
    pub page_id: u64,
}

/// Cleaned article text returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    /// Title of the resolved page.
    pub title: String,
    /// Cleaned paragraphs in document order. Never contains empty entries.
    pub text_content: Vec<String>,
}
