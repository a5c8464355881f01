//! Article URL validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Accepted article URLs (compiled once)
static ARTICLE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://en\.wikipedia\.org/wiki/.+").unwrap());

/// The entered URL is not an English Wikipedia article link
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a valid Wikipedia URL")]
pub struct InvalidArticleUrl;

/// Check that `url` points at an English Wikipedia article
pub fn validate_article_url(url: &str) -> Result<(), InvalidArticleUrl> {
    if ARTICLE_URL_RE.is_match(url) { Ok(()) } else { Err(InvalidArticleUrl) }
}

/// Page slug used by the summary endpoint: the last `/` segment of the URL
pub fn article_slug(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
