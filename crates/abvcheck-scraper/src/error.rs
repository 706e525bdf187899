use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        /// Leading part of the response body, kept for diagnostics.
        body: String,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Reasons a percentage could not be read from a product name. Callers treat
/// both variants the same way: the product is skipped.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("no alcohol percentage found in product name: {name}")]
    NotFound { name: String },

    #[error("failed to parse alcohol percentage '{value}'")]
    MalformedNumber { value: String },
}
