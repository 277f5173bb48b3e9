//! Search result link extraction
//!
//! The selection rule mirrors the search provider's result-page markup:
//! organic result anchors are the ones wrapping an `<h3>` heading, while
//! navigation and ad anchors are not. This is a coupling to the provider's
//! DOM shape, versioned by them, not by us; expect it to need updating when
//! the provider reworks their markup.

use scraper::{Html, Selector};

/// Extracts result hrefs from a search response body, in document order.
///
/// Anchors qualify when they contain a heading element. Hrefs are returned
/// verbatim, exactly as the provider emitted them.
pub fn extract_result_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Both selectors are literals; parsing them cannot fail.
    let (Ok(anchors), Ok(heading)) = (Selector::parse("a[href]"), Selector::parse("h3")) else {
        return Vec::new();
    };

    document
        .select(&anchors)
        .filter(|a| a.select(&heading).next().is_some())
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}
