//! Search pipeline: rate limiting, provider fan-out, merging and reporting.

pub mod aggregate;
pub mod commands;
pub mod rate_limit;
pub mod render;

pub use aggregate::{Aggregator, SearchOutcome, NO_RESULTS_MESSAGE, THROTTLED_MESSAGE};
pub use commands::{effective_term, handle_message, Command, Requester, HELP_TEXT};
pub use rate_limit::SearchRateLimiter;
pub use render::render_report;
