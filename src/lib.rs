//! go2web: a minimal command-line web fetcher
//!
//! This crate implements an HTTP/1.1 GET client directly on top of TCP
//! sockets (with a TLS upgrade for port 443), follows redirects, and turns
//! the resulting HTML into readable terminal output or a numbered list of
//! search result links.

pub mod html;
pub mod http;
pub mod logging;
pub mod search;
pub mod url;

use thiserror::Error;

/// Main error type for go2web operations.
///
/// Every stage of the fetch pipeline surfaces its own kind; nothing is
/// wrapped or translated on the way up, so callers always see the failing
/// stage directly.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS resolution or the TCP handshake failed.
    #[error("failed to connect to {host}:{port}: {source}")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The TLS handshake or certificate validation failed.
    #[error("TLS handshake with {host} failed: {source}")]
    Tls {
        host: String,
        #[source]
        source: native_tls::Error,
    },

    /// A hard I/O error after the connection was established, while sending
    /// the request or draining the response. A read deadline expiring lands
    /// here too; a clean peer close does not.
    #[error("I/O error during exchange with {host}: {source}")]
    Read {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// The response contained no `\r\n\r\n` header/body boundary.
    #[error("malformed response: missing header/body boundary")]
    MalformedResponse,

    /// The redirect chain exceeded the configured hop limit.
    #[error("stopped after {limit} redirects (last location: {location})")]
    TooManyRedirects { limit: usize, location: String },

    /// A Location header pointed back at a location already visited in this
    /// chain.
    #[error("redirect loop detected at {location}")]
    RedirectLoop { location: String },

    /// The external text renderer could not be invoked or failed.
    #[error("failed to render page text: {source}")]
    Render {
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for go2web operations.
pub type Result<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use http::{HttpClient, RawResponse, TcpTransport, Transport};
pub use url::{Location, HTTPS_PORT, HTTP_PORT};
