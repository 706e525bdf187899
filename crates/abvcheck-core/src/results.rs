use serde::{Deserialize, Serialize};

/// Alcohol percentage at or above which a beer counts as approved.
pub const APPROVAL_THRESHOLD_PERCENT: f64 = 5.0;

/// Provider a [`SearchResult`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Percentage is embedded in the product's display name (e.g. `"Tuborg Grøn 5,2%"`).
    Bordershop,
    /// Percentage arrives as a structured numeric field.
    Systembolaget,
}

impl Source {
    /// Human-readable label used in rendered reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Source::Bordershop => "Bordershop",
            Source::Systembolaget => "Systembolaget",
        }
    }

    /// `true` when the provider's display name already carries the percentage,
    /// so reports must not print it a second time.
    #[must_use]
    pub fn embeds_percent_in_name(self) -> bool {
        matches!(self, Source::Bordershop)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A beverage found by one provider, normalized for merging across providers.
///
/// Fields are private so approval can only ever be derived from the percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    name: String,
    /// Variant descriptor; empty string means absent.
    subtitle: String,
    alcohol_percent: f64,
    source: Source,
}

impl SearchResult {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        subtitle: impl Into<String>,
        alcohol_percent: f64,
        source: Source,
    ) -> Self {
        Self {
            name: name.into(),
            subtitle: subtitle.into(),
            alcohol_percent,
            source,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the subtitle, or `None` when the provider supplied none.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        Some(self.subtitle.as_str()).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn alcohol_percent(&self) -> f64 {
        self.alcohol_percent
    }

    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }

    /// `true` iff the alcohol percentage reaches [`APPROVAL_THRESHOLD_PERCENT`].
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.alcohol_percent >= APPROVAL_THRESHOLD_PERCENT
    }

    /// Key identifying the same product across providers: name followed by subtitle.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!("{}{}", self.name, self.subtitle)
    }

    /// Name and subtitle joined by a single space, subtitle omitted when absent.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.subtitle() {
            Some(subtitle) => format!("{} {subtitle}", self.name),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_percent(percent: f64) -> SearchResult {
        SearchResult::new("Tuborg", "Grøn", percent, Source::Systembolaget)
    }

    #[test]
    fn approval_boundary_below_threshold() {
        assert!(!with_percent(4.9).is_approved());
    }

    #[test]
    fn approval_boundary_at_threshold() {
        assert!(with_percent(5.0).is_approved());
    }

    #[test]
    fn approval_boundary_above_threshold() {
        assert!(with_percent(5.1).is_approved());
    }

    #[test]
    fn empty_subtitle_is_absent() {
        let result = SearchResult::new("Tuborg Grøn 5,2%", "", 5.2, Source::Bordershop);
        assert!(result.subtitle().is_none());
        assert_eq!(result.display_name(), "Tuborg Grøn 5,2%");
    }

    #[test]
    fn display_name_joins_subtitle_with_space() {
        assert_eq!(with_percent(5.2).display_name(), "Tuborg Grøn");
    }

    #[test]
    fn dedup_key_concatenates_without_separator() {
        assert_eq!(with_percent(5.2).dedup_key(), "TuborgGrøn");
        let bare = SearchResult::new("Tuborg", "", 5.2, Source::Bordershop);
        assert_eq!(bare.dedup_key(), "Tuborg");
    }

    #[test]
    fn only_bordershop_embeds_percent() {
        assert!(Source::Bordershop.embeds_percent_in_name());
        assert!(!Source::Systembolaget.embeds_percent_in_name());
    }

    #[test]
    fn source_serializes_snake_case() {
        let json = serde_json::to_string(&Source::Systembolaget).unwrap();
        assert_eq!(json, "\"systembolaget\"");
    }
}
