// Search link building for the `google` command.

use reqwest::Url;
use thiserror::Error;

pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Could not build search link: {0}")]
    InvalidLink(String),
}

/// Build the search URL for a free-text query.
pub fn search_link(query: &str) -> Result<Url, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    Url::parse_with_params(SEARCH_ENDPOINT, &[("q", query)])
        .map_err(|e| SearchError::InvalidLink(e.to_string()))
}

/// Message text shown above the link button.
pub fn search_caption(query: &str) -> String {
    // Backticks would close the inline code span early.
    format!("Google Result for: `{}`", query.trim().replace('`', "'"))
}
