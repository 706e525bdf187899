use crate::app_config::{AppConfig, NameMatch};
use crate::ConfigError;

/// Browser-like identifier sent to both providers; their endpoints reject
/// default HTTP client user agents.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.141 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bordershop_url = require("ABVCHECK_BORDERSHOP_URL")?;
    let systembolaget_url = require("ABVCHECK_SYSTEMBOLAGET_URL")?;
    let systembolaget_subscription_key = require("ABVCHECK_SYSTEMBOLAGET_SUBSCRIPTION_KEY")?;

    let systembolaget_beer_category = or_default("ABVCHECK_SYSTEMBOLAGET_BEER_CATEGORY", "Öl");
    let systembolaget_page_size = or_default("ABVCHECK_SYSTEMBOLAGET_PAGE_SIZE", "30-50");

    let request_timeout_secs = parse_u64("ABVCHECK_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("ABVCHECK_USER_AGENT", DEFAULT_USER_AGENT);
    let rate_limit_interval_secs = parse_u64("ABVCHECK_RATE_LIMIT_INTERVAL_SECS", "5")?;
    let name_match = parse_name_match(&or_default("ABVCHECK_NAME_MATCH", "contains"))?;
    let log_level = or_default("ABVCHECK_LOG_LEVEL", "info");

    Ok(AppConfig {
        bordershop_url,
        systembolaget_url,
        systembolaget_subscription_key,
        systembolaget_beer_category,
        systembolaget_page_size,
        request_timeout_secs,
        user_agent,
        rate_limit_interval_secs,
        name_match,
        log_level,
    })
}

/// Parse a string into a `NameMatch` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than `contains` or `prefix`.
fn parse_name_match(s: &str) -> Result<NameMatch, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "contains" => Ok(NameMatch::Contains),
        "prefix" => Ok(NameMatch::Prefix),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ABVCHECK_NAME_MATCH".to_string(),
            reason: format!("expected 'contains' or 'prefix', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
