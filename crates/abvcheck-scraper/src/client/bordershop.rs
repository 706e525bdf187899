use abvcheck_core::{SearchResult, Source};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::{build_http_client, parse_base_url, unexpected_status, ProductSource};
use crate::error::ScraperError;
use crate::normalize::normalize_bordershop;
use crate::types::BordershopResponse;

/// Characters left unescaped in the `term` query value.
const TERM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Client for the Bordershop search endpoint.
///
/// The configured base URL already carries the endpoint's fixed query
/// parameters; the search term is appended as `term=<encoded>`.
pub struct BordershopClient {
    client: Client,
    base_url: String,
}

impl BordershopClient {
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        parse_base_url(base_url)?;
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            base_url: base_url.to_owned(),
        })
    }

    /// Searches Bordershop and returns every product whose name carries a
    /// readable percentage. No retries.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure or timeout.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch(&self, term: &str) -> Result<Vec<SearchResult>, ScraperError> {
        let url = self.search_url(term);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(unexpected_status(response, "bordershop").await);
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<BordershopResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("bordershop search for \"{term}\""),
                source: e,
            }
        })?;

        let received = parsed.products.len();
        let results = normalize_bordershop(parsed.products);
        tracing::debug!(
            source = "bordershop",
            received,
            kept = results.len(),
            "bordershop search complete"
        );

        Ok(results)
    }

    fn search_url(&self, term: &str) -> String {
        let encoded = utf8_percent_encode(term, TERM_VALUE);
        let separator = if self.base_url.ends_with('?') || self.base_url.ends_with('&') {
            ""
        } else if self.base_url.contains('?') {
            "&"
        } else {
            "?"
        };
        format!("{}{separator}term={encoded}", self.base_url)
    }
}

impl ProductSource for BordershopClient {
    fn source(&self) -> Source {
        Source::Bordershop
    }

    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, ScraperError> {
        self.fetch(term).await
    }
}
