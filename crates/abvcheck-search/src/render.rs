//! Plain-text report rendering.

use abvcheck_core::SearchResult;

const APPROVED_MARK: &str = "\u{2705}";
const REJECTED_MARK: &str = "\u{274C}";

/// Renders one line per result, in input order.
///
/// Names from sources that embed the percentage are printed as-is; other
/// sources get the percentage appended with one decimal. An empty slice
/// renders as an empty string.
#[must_use]
pub fn render_report(results: &[SearchResult]) -> String {
    let mut report = String::new();
    for result in results {
        let mark = if result.is_approved() {
            APPROVED_MARK
        } else {
            REJECTED_MARK
        };
        let source = result.source();

        let line = if source.embeds_percent_in_name() {
            format!("{mark} {} (source {source})", result.display_name())
        } else {
            format!(
                "{mark} {} {:.1}% (source {source})",
                result.display_name(),
                result.alcohol_percent()
            )
        };
        report.push_str(&line);
        report.push('\n');
    }
    report
}
