//! URL decomposition for the fetch pipeline
//!
//! The client speaks to exactly two kinds of endpoints: plain HTTP on port 80
//! and TLS-wrapped HTTP on port 443. Decomposition therefore reduces a URL to
//! the `(host, path, port)` triple the transport needs, with the scheme only
//! deciding which of the two well-known ports to use.

/// Well-known port for plain HTTP.
pub const HTTP_PORT: u16 = 80;

/// Well-known port for TLS-encrypted HTTP.
pub const HTTPS_PORT: u16 = 443;

/// A URL decomposed into the parts the transport layer needs.
///
/// Built fresh for every fetch; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Network host, without any scheme or port suffix.
    pub host: String,
    /// Request path, including any query string. Defaults to `/`.
    pub path: String,
    /// One of [`HTTP_PORT`] or [`HTTPS_PORT`].
    pub port: u16,
}

impl Location {
    /// Decomposes a URL string into host, path, and port.
    ///
    /// Scheme mapping: `http` selects port 80; anything else, including
    /// `https` and *no scheme at all*, selects port 443. Decomposition never
    /// fails: absent components fall back to an empty host and the root
    /// path.
    ///
    /// Redirect `Location` header values are fed through here verbatim, and
    /// servers occasionally send them without a scheme (`example.org/next`).
    /// The redirect resolver relies on such values still producing a usable
    /// triple, so the host is simply everything up to the first `/` when no
    /// `://` marker is present.
    ///
    /// # Example
    ///
    /// ```
    /// use go2web::url::{Location, HTTP_PORT};
    ///
    /// let loc = Location::decompose("http://example.com/a?b=c");
    /// assert_eq!(loc.host, "example.com");
    /// assert_eq!(loc.path, "/a?b=c");
    /// assert_eq!(loc.port, HTTP_PORT);
    /// ```
    pub fn decompose(url: &str) -> Location {
        let (scheme, rest) = match url.find("://") {
            Some(idx) => (Some(&url[..idx]), &url[idx + 3..]),
            // Protocol-relative form (`//host/path`) carries no scheme.
            None => (None, url.strip_prefix("//").unwrap_or(url)),
        };

        let port = match scheme {
            Some(s) if s.eq_ignore_ascii_case("http") => HTTP_PORT,
            _ => HTTPS_PORT,
        };

        let (host, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/"),
        };

        Location {
            host: strip_port_suffix(host).to_string(),
            path: path.to_string(),
            port,
        }
    }

    /// Reassembles the triple into a displayable `host:port/path` form for
    /// log lines and loop detection.
    pub fn display(&self) -> String {
        format!("{}:{}{}", self.host, self.port, self.path)
    }
}

/// Drops an explicit `:port` suffix so the host stays resolvable.
///
/// The effective port is always scheme-derived; this client only ever talks
/// to the two well-known ports. Hosts with more than one colon are IPv6
/// literals and are left untouched: their trailing group can be all digits
/// (`::1`) without being a port.
fn strip_port_suffix(host: &str) -> &str {
    if host.matches(':').count() > 1 {
        return host;
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
