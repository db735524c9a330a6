//! Article retrieval from the MediaWiki API.
//!
//! Turns an article URL into a title and language edition, then asks the API for the
//! plain-text extract of that page. The extract is what [`crate::formats::wikitext`] tokenizes.

use crate::config::Config;
use crate::error::{ExtractError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    query: ApiQuery,
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    /// Keyed by page id, in response order.
    pages: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ApiPage {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    extract: Option<String>,
}

/// Split a Wikipedia article URL into its (percent-decoded) title and language code.
///
/// The host needs at least three labels, one of them `wikipedia`, the first being the
/// language; the path must be exactly `/wiki/<title>`.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidUrl`] for anything else.
pub fn title_and_lang(url: &str) -> Result<(String, String)> {
    let invalid = || ExtractError::InvalidUrl(url.to_string());
    let parsed = url::Url::parse(url).map_err(|_| invalid())?;

    let host = parsed.host_str().ok_or_else(invalid)?;
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 3 || !labels.contains(&"wikipedia") {
        return Err(invalid());
    }
    let lang = labels[0].to_string();

    let path: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    let [wiki, title] = path.as_slice() else {
        return Err(invalid());
    };
    if *wiki != "wiki" {
        return Err(invalid());
    }
    let title = urlencoding::decode(title).map_err(|_| invalid())?.into_owned();

    Ok((title, lang))
}

#[must_use]
/// MediaWiki API endpoint for a language edition.
pub fn api_url(lang: &str) -> String {
    format!("https://{lang}.wikipedia.org/w/api.php")
}

#[must_use]
/// Query parameters requesting the plain-text extract of one page.
pub fn extract_params(title: &str) -> [(&'static str, &str); 6] {
    [
        ("action", "query"),
        ("format", "json"),
        ("titles", title),
        ("prop", "extracts|revisions"),
        ("explaintext", ""),
        ("rvprop", "ids"),
    ]
}

/// Pull the extract of the first page out of an API response body.
///
/// # Errors
///
/// Returns a JSON error for malformed bodies and [`ExtractError::MissingExtract`] when the
/// page has no extract (missing or invalid title).
pub fn parse_extract_response(body: &str, title: &str) -> Result<String> {
    let response: ApiResponse = serde_json::from_str(body)?;
    let Some((_, first)) = response.query.pages.into_iter().next() else {
        return Err(ExtractError::MissingExtract(title.to_string()));
    };
    let page: ApiPage = serde_json::from_value(first)?;
    if let Some(ref resolved) = page.title {
        tracing::debug!(%resolved, "resolved page title");
    }
    page.extract.ok_or_else(|| ExtractError::MissingExtract(title.to_string()))
}

/// Fetch the plain-text extract of an article.
///
/// # Errors
///
/// Returns an error if the request fails or the page has no extract.
pub fn fetch_extract(title: &str, lang: &str, config: &Config) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;

    let url = api_url(lang);
    tracing::info!(%title, %lang, "fetching extract");
    let body = client
        .get(&url)
        .query(&extract_params(title))
        .send()?
        .error_for_status()?
        .text()?;

    parse_extract_response(&body, title)
}

#[cfg(test)]
#[path = "tests/wikipedia.rs"]
mod tests;
