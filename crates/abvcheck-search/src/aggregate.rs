//! Fan-out over both providers, then merge, filter and deduplicate.

use std::collections::HashSet;
use std::sync::Arc;

use abvcheck_core::{NameMatch, SearchResult, Source};
use abvcheck_scraper::{ProductSource, ScraperError};

use crate::rate_limit::SearchRateLimiter;
use crate::render::render_report;

pub const THROTTLED_MESSAGE: &str = "Throttled - Please wait before trying again.";
pub const NO_RESULTS_MESSAGE: &str =
    "Sorry, no results found or there was an error searching. Please try again later.";

/// Terminal state of one search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Rejected by the rate limiter before any provider was contacted.
    Throttled,
    /// Providers were queried but nothing survived merging.
    NoResults,
    /// Filtered, deduplicated results in merge order.
    Found(Vec<SearchResult>),
}

impl SearchOutcome {
    /// Text sent back to the requester.
    #[must_use]
    pub fn into_reply(self) -> String {
        match self {
            SearchOutcome::Throttled => THROTTLED_MESSAGE.to_owned(),
            SearchOutcome::NoResults => NO_RESULTS_MESSAGE.to_owned(),
            SearchOutcome::Found(results) => render_report(&results),
        }
    }
}

/// Runs both providers for a term and merges their output.
///
/// `primary` results come first in merge order, so they shadow later
/// `secondary` results with the same dedup key.
pub struct Aggregator<A, B> {
    primary: A,
    secondary: B,
    limiter: Arc<SearchRateLimiter>,
    name_match: NameMatch,
}

impl<A, B> Aggregator<A, B>
where
    A: ProductSource,
    B: ProductSource,
{
    #[must_use]
    pub fn new(primary: A, secondary: B, limiter: Arc<SearchRateLimiter>) -> Self {
        Self {
            primary,
            secondary,
            limiter,
            name_match: NameMatch::default(),
        }
    }

    #[must_use]
    pub fn with_name_match(mut self, name_match: NameMatch) -> Self {
        self.name_match = name_match;
        self
    }

    /// Searches both providers concurrently and waits for both.
    ///
    /// Provider failures are logged and contribute no results; they never
    /// cancel the other provider or surface to the caller.
    pub async fn search(&self, term: &str) -> SearchOutcome {
        if !self.limiter.try_acquire().await {
            tracing::info!(term, "search throttled");
            return SearchOutcome::Throttled;
        }

        let (primary, secondary) =
            tokio::join!(self.primary.search(term), self.secondary.search(term));

        let mut merged = results_or_empty(self.primary.source(), term, primary);
        merged.extend(results_or_empty(self.secondary.source(), term, secondary));

        let results = filter_and_dedup(merged, term, self.name_match);
        tracing::info!(term, count = results.len(), "search complete");

        if results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(results)
        }
    }

    /// [`Self::search`] rendered to the reply text.
    pub async fn search_reply(&self, term: &str) -> String {
        self.search(term).await.into_reply()
    }
}

fn results_or_empty(
    source: Source,
    term: &str,
    outcome: Result<Vec<SearchResult>, ScraperError>,
) -> Vec<SearchResult> {
    match outcome {
        Ok(results) => {
            tracing::debug!(%source, term, count = results.len(), "provider returned results");
            results
        }
        Err(e) => {
            tracing::warn!(%source, term, error = %e, "provider search failed");
            Vec::new()
        }
    }
}

/// Keeps results whose name matches `term`, then drops later duplicates by
/// [`SearchResult::dedup_key`], preserving first-seen order.
#[must_use]
pub fn filter_and_dedup(
    results: Vec<SearchResult>,
    term: &str,
    name_match: NameMatch,
) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    results
        .into_iter()
        .filter(|result| name_match.matches(result.name(), term))
        .filter(|result| seen.insert(result.dedup_key()))
        .collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
