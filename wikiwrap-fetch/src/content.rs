//! HTML paragraph extraction.
//!
//! Parses the rendered article body and returns the text of every `<p>`
//! element in document order, skipping paragraphs with no visible text.

use crate::error::{FetchError, Result};
use scraper::{Html, Selector};

/// Extract paragraph text from rendered article HTML.
///
/// Text inside nested inline elements (links, citation superscripts,
/// `<b>`, ...) is included verbatim; cleanup happens later in
/// [`crate::clean`]. Paragraphs whose text is empty or whitespace-only
/// are dropped.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the paragraph selector cannot be built.
pub fn extract_paragraphs(html: &str) -> Result<Vec<String>> {
    let selector = Selector::parse("p")
        .map_err(|e| FetchError::Parse(format!("invalid paragraph selector: {e:?}")))?;
    let fragment = Html::parse_fragment(html);

    let paragraphs = fragment
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
        .collect();

    Ok(paragraphs)
}
