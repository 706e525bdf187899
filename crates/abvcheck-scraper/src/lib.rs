pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod types;

pub use client::{BordershopClient, ProductSource, SystembolagetClient};
pub use error::{ExtractError, ScraperError};
pub use parse::extract_percent;
