//! Normalization from provider response types to [`abvcheck_core::SearchResult`].
//!
//! Percentage extraction is delegated to [`crate::parse`]; this module
//! focuses on structural conversion and per-provider filtering.

use abvcheck_core::{SearchResult, Source};

use crate::parse::extract_percent;
use crate::types::{BordershopProduct, SystembolagetProduct};

/// Converts Bordershop products, reading each strength out of the display name.
///
/// Products without a recognizable percentage are skipped: the search also
/// returns non-beer items and multipacks without a strength in the name.
/// Products with no display name at all are skipped the same way.
#[must_use]
pub fn normalize_bordershop(products: Vec<BordershopProduct>) -> Vec<SearchResult> {
    products
        .into_iter()
        .filter_map(|product| {
            let Some(name) = product.display_name else {
                tracing::debug!(source = "bordershop", "skipping product without display name");
                return None;
            };
            match extract_percent(&name) {
                Ok(percent) => Some(SearchResult::new(
                    name,
                    String::new(),
                    percent,
                    Source::Bordershop,
                )),
                Err(e) => {
                    tracing::debug!(
                        source = "bordershop",
                        error = %e,
                        "skipping product without parseable percentage"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Converts Systembolaget products, keeping only those whose top-level
/// category equals `beer_category` (case-insensitive).
///
/// Beer-category products missing a name or a percentage are skipped.
#[must_use]
pub fn normalize_systembolaget(
    products: Vec<SystembolagetProduct>,
    beer_category: &str,
) -> Vec<SearchResult> {
    let wanted = beer_category.to_lowercase();

    products
        .into_iter()
        .filter(|product| {
            product
                .category_level1
                .as_deref()
                .is_some_and(|category| category.to_lowercase() == wanted)
        })
        .filter_map(|product| {
            let (Some(name), Some(percent)) =
                (product.product_name_bold, product.alcohol_percentage)
            else {
                tracing::debug!(
                    source = "systembolaget",
                    "skipping product without name or alcohol percentage"
                );
                return None;
            };
            Some(SearchResult::new(
                name,
                product.product_name_thin.unwrap_or_default(),
                percent,
                Source::Systembolaget,
            ))
        })
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
