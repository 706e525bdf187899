//! Alcohol percentage extraction from free-text product names.
//!
//! Some providers only publish the strength inside the display name, e.g.
//! `"Tuborg Grøn 5,2%"` or `"Carlsberg Export 5.7 %"`. See
//! [`crate::normalize`] for how extraction failures are handled.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

/// Whitespace, then an integer or decimal (comma or dot separator), optional
/// whitespace, then a literal `%`.
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\d+(?:[.,]\d+)?)\s*%").expect("valid percent regex"));

/// Extracts the first alcohol percentage embedded in `name`.
///
/// A decimal comma is normalized to a decimal point before parsing, so
/// `"5,2%"` and `"5.2 %"` both yield `5.2`. The number must be preceded by
/// whitespace; a percentage at the very start of the name is not matched.
///
/// # Errors
///
/// - [`ExtractError::NotFound`] when no substring matches the pattern.
/// - [`ExtractError::MalformedNumber`] when a match does not parse as `f64`.
pub fn extract_percent(name: &str) -> Result<f64, ExtractError> {
    let captures = PERCENT_RE
        .captures(name)
        .ok_or_else(|| ExtractError::NotFound {
            name: name.to_owned(),
        })?;

    // Group 1 is mandatory in the pattern, so a match always carries it.
    let raw = captures.get(1).map_or("", |m| m.as_str());
    let normalized = raw.replacen(',', ".", 1);

    normalized
        .parse::<f64>()
        .map_err(|_| ExtractError::MalformedNumber { value: normalized })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
