use abvcheck_core::{SearchResult, Source};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};

use super::{build_http_client, parse_base_url, unexpected_status, ProductSource};
use crate::error::ScraperError;
use crate::normalize::normalize_systembolaget;
use crate::types::SystembolagetResponse;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for the Systembolaget product search API.
///
/// Requests the first page only; `page_size` is passed through verbatim as
/// the `size` parameter.
pub struct SystembolagetClient {
    client: Client,
    base_url: Url,
    subscription_key: String,
    beer_category: String,
    page_size: String,
}

impl std::fmt::Debug for SystembolagetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystembolagetClient")
            .field("base_url", &self.base_url.as_str())
            .field("subscription_key", &"[redacted]")
            .field("beer_category", &self.beer_category)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl SystembolagetClient {
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        subscription_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
            subscription_key: subscription_key.to_owned(),
            beer_category: "Öl".to_owned(),
            page_size: "30-50".to_owned(),
        })
    }

    /// Overrides the category label products must carry to be kept.
    #[must_use]
    pub fn with_beer_category(mut self, beer_category: &str) -> Self {
        beer_category.clone_into(&mut self.beer_category);
        self
    }

    /// Overrides the `size` query parameter.
    #[must_use]
    pub fn with_page_size(mut self, page_size: &str) -> Self {
        page_size.clone_into(&mut self.page_size);
        self
    }

    /// Searches Systembolaget and returns the beer products on the first page.
    /// No retries.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure or timeout.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status; the body is
    ///   read for diagnostics but never decoded.
    /// - [`ScraperError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch(&self, term: &str) -> Result<Vec<SearchResult>, ScraperError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[
                ("size", self.page_size.as_str()),
                ("page", "1"),
                ("textQuery", term),
            ])
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(unexpected_status(response, "systembolaget").await);
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<SystembolagetResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("systembolaget search for \"{term}\""),
                source: e,
            }
        })?;

        let received = parsed.products.len();
        let doc_count = parsed.metadata.and_then(|m| m.doc_count);
        let results = normalize_systembolaget(parsed.products, &self.beer_category);
        tracing::debug!(
            source = "systembolaget",
            received,
            doc_count,
            kept = results.len(),
            "systembolaget search complete"
        );

        Ok(results)
    }
}

impl ProductSource for SystembolagetClient {
    fn source(&self) -> Source {
        Source::Systembolaget
    }

    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, ScraperError> {
        self.fetch(term).await
    }
}
