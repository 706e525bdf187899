use std::time::Duration;

/// How a search term is matched against a product's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatch {
    /// Case-insensitive substring containment.
    #[default]
    Contains,
    /// Case-insensitive prefix.
    Prefix,
}

impl NameMatch {
    /// Returns `true` when `name` matches `term` under this rule.
    #[must_use]
    pub fn matches(self, name: &str, term: &str) -> bool {
        let name = name.to_lowercase();
        let term = term.to_lowercase();
        match self {
            NameMatch::Contains => name.contains(&term),
            NameMatch::Prefix => name.starts_with(&term),
        }
    }
}

impl std::fmt::Display for NameMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameMatch::Contains => write!(f, "contains"),
            NameMatch::Prefix => write!(f, "prefix"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub bordershop_url: String,
    pub systembolaget_url: String,
    pub systembolaget_subscription_key: String,
    pub systembolaget_beer_category: String,
    pub systembolaget_page_size: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub rate_limit_interval_secs: u64,
    pub name_match: NameMatch,
    pub log_level: String,
}

impl AppConfig {
    #[must_use]
    pub fn rate_limit_interval(&self) -> Duration {
        Duration::from_secs(self.rate_limit_interval_secs)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bordershop_url", &self.bordershop_url)
            .field("systembolaget_url", &self.systembolaget_url)
            .field("systembolaget_subscription_key", &"[redacted]")
            .field(
                "systembolaget_beer_category",
                &self.systembolaget_beer_category,
            )
            .field("systembolaget_page_size", &self.systembolaget_page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("rate_limit_interval_secs", &self.rate_limit_interval_secs)
            .field("name_match", &self.name_match)
            .field("log_level", &self.log_level)
            .finish()
    }
}
