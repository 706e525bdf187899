//! HTTP clients for the two product-search providers.

mod bordershop;
mod systembolaget;

use std::future::Future;
use std::time::Duration;

use abvcheck_core::{SearchResult, Source};
use reqwest::{Client, Response};

use crate::error::ScraperError;

pub use bordershop::BordershopClient;
pub use systembolaget::SystembolagetClient;

/// Number of body characters kept on [`ScraperError::UnexpectedStatus`].
const ERROR_BODY_SNIPPET_CHARS: usize = 200;

/// A provider that turns a search term into normalized results.
///
/// Implemented by [`BordershopClient`] and [`SystembolagetClient`]; the
/// aggregator fans out over any two implementations.
pub trait ProductSource {
    /// Provenance tag stamped on every result this source produces.
    fn source(&self) -> Source;

    /// Runs one search. Items the provider returns but that cannot be
    /// normalized are dropped, not reported as errors.
    fn search(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<SearchResult>, ScraperError>> + Send;
}

/// Builds the shared `reqwest::Client` shape both providers use.
///
/// # Errors
///
/// Returns [`ScraperError::Http`] if the client cannot be constructed.
fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ScraperError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Validates a configured endpoint so misconfiguration surfaces at startup
/// instead of on the first search.
fn parse_base_url(base_url: &str) -> Result<reqwest::Url, ScraperError> {
    reqwest::Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Converts a non-2xx response into [`ScraperError::UnexpectedStatus`],
/// logging the leading part of the body.
async fn unexpected_status(response: Response, provider: &'static str) -> ScraperError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body: String = response
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(ERROR_BODY_SNIPPET_CHARS)
        .collect();

    tracing::warn!(
        source = provider,
        status,
        body = %body,
        "provider returned non-success status"
    );

    ScraperError::UnexpectedStatus { status, url, body }
}
