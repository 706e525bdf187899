//! Provider response envelopes.
//!
//! Only the fields the pipeline reads are modeled; serde ignores the rest of
//! each (large) payload. Per-product fields are optional so one incomplete
//! item is skipped during normalization instead of failing the whole list.
//!
//! ### Bordershop
//! `products[].displayName` carries brand, strength and pack size in one
//! string, e.g. `"Tuborg Grøn 4,6% 24x33cl"`. There is no structured
//! percentage field and no separate subtitle.
//!
//! ### Systembolaget
//! `products[]` splits the name into `productNameBold` (e.g. `"Tuborg"`) and
//! `productNameThin` (e.g. `"Grøn"`, or `null`). `alcoholPercentage` is a
//! plain number such as `5.2`. `categoryLevel1` is the top-level assortment
//! category; the catalog spans wine, spirits, cider and beer, so results are
//! filtered on it during normalization.

use serde::Deserialize;

/// Top-level response from the Bordershop search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BordershopResponse {
    #[serde(default)]
    pub products: Vec<BordershopProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BordershopProduct {
    /// Full display name, strength included (e.g. `"Tuborg Grøn 5,2%"`).
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Top-level response from the Systembolaget product search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystembolagetResponse {
    #[serde(default)]
    pub metadata: Option<SystembolagetMetadata>,
    #[serde(default)]
    pub products: Vec<SystembolagetProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystembolagetMetadata {
    #[serde(default)]
    pub doc_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystembolagetProduct {
    #[serde(default)]
    pub product_name_bold: Option<String>,
    /// Variant descriptor. `null` and `""` both mean absent.
    #[serde(default)]
    pub product_name_thin: Option<String>,
    /// Top-level category, e.g. `"Öl"` or `"Vin"`. May be `null` for bundles.
    #[serde(default)]
    pub category_level1: Option<String>,
    #[serde(default)]
    pub alcohol_percentage: Option<f64>,
}
