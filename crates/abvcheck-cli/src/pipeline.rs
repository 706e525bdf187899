//! Builds the search pipeline from loaded configuration.

use std::sync::Arc;

use abvcheck_core::AppConfig;
use abvcheck_scraper::{BordershopClient, SystembolagetClient};
use abvcheck_search::{Aggregator, SearchRateLimiter};

pub(crate) type SearchPipeline = Aggregator<BordershopClient, SystembolagetClient>;

/// Constructs both provider clients, the shared rate limiter and the
/// aggregator. Bordershop is the primary source, so its results win dedup ties.
pub(crate) fn build_aggregator(config: &AppConfig) -> anyhow::Result<SearchPipeline> {
    let bordershop = BordershopClient::new(
        &config.bordershop_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let systembolaget = SystembolagetClient::new(
        &config.systembolaget_url,
        &config.systembolaget_subscription_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?
    .with_beer_category(&config.systembolaget_beer_category)
    .with_page_size(&config.systembolaget_page_size);

    let limiter = Arc::new(SearchRateLimiter::new(config.rate_limit_interval()));

    tracing::info!(
        rate_limit_secs = config.rate_limit_interval_secs,
        name_match = %config.name_match,
        "search pipeline ready"
    );

    Ok(Aggregator::new(bordershop, systembolaget, limiter).with_name_match(config.name_match))
}
