//! Search query building and result listing
//!
//! Turns a list of terms into the provider's query path, fetches the result
//! page over the regular pipeline, and hands the body to the link extractor.

use crate::html::extract_result_links;
use crate::http::{HttpClient, Transport};
use crate::url::{Location, HTTPS_PORT};
use crate::Result;

/// Default search provider host.
pub const DEFAULT_SEARCH_HOST: &str = "www.google.com";

/// Joins search terms into the provider query path.
///
/// Terms are joined with `+`, the provider's phrase separator:
/// `["go", "lang"]` becomes `/search?q=go+lang`.
pub fn search_path(terms: &[String]) -> String {
    format!("/search?q={}", terms.join("+"))
}

/// Fetches search results for `terms` from `host` and returns the ordered
/// list of result links.
///
/// The provider is always queried over TLS. Failures are those of the fetch
/// pipeline, propagated unchanged.
pub fn search<T: Transport>(
    client: &HttpClient<T>,
    host: &str,
    terms: &[String],
) -> Result<Vec<String>> {
    let target = Location {
        host: host.to_string(),
        path: search_path(terms),
        port: HTTPS_PORT,
    };

    tracing::info!("searching {} for \"{}\"", host, terms.join(" "));
    let response = client.fetch_location(target)?;

    let links = extract_result_links(&response.body);
    tracing::info!("extracted {} result links", links.len());
    Ok(links)
}

/// Resolves a provider href into a fetchable absolute URL.
///
/// Result pages frequently emit host-relative hrefs (`/url?q=...`); those
/// are resolved against the provider over TLS. Absolute hrefs pass through
/// untouched, and anything the URL parser rejects is returned verbatim so
/// the fetch pipeline can report the failure itself.
pub fn absolutize(host: &str, link: &str) -> String {
    if link.contains("://") {
        return link.to_string();
    }

    match url::Url::parse(&format!("https://{host}/")).and_then(|base| base.join(link)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => link.to_string(),
    }
}
