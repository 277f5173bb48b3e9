//! Fetch orchestration: decompose, connect, send, drain, split, redirect
//!
//! Redirects are followed with an explicit loop rather than recursion so the
//! hop count and the set of visited locations stay in one place. Latency is
//! additive across the chain; every hop is a fresh connection.

use crate::http::request::build_request;
use crate::http::response::{read_to_string, redirect_target, split_response, RawResponse};
use crate::http::transport::{TcpTransport, Transport};
use crate::url::Location;
use crate::{FetchError, Result};
use std::collections::HashSet;
use std::io::Write;

/// Default redirect hop limit.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Synchronous HTTP/1.1 GET client.
///
/// Generic over [`Transport`] so tests can script the network; production
/// code uses the [`TcpTransport`] default.
#[derive(Debug)]
pub struct HttpClient<T: Transport = TcpTransport> {
    transport: T,
    max_redirects: usize,
}

impl HttpClient<TcpTransport> {
    /// Creates a client over a real TCP transport.
    pub fn new(transport: TcpTransport) -> Self {
        Self::with_transport(transport)
    }
}

impl<T: Transport> HttpClient<T> {
    /// Creates a client over an arbitrary transport with the default hop
    /// limit.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Overrides the redirect hop limit.
    pub fn max_redirects(mut self, limit: usize) -> Self {
        self.max_redirects = limit;
        self
    }

    /// Fetches `url`, following redirects, and returns the final response.
    ///
    /// # Errors
    ///
    /// Component failures surface unchanged: [`FetchError::Connection`],
    /// [`FetchError::Tls`], [`FetchError::Read`],
    /// [`FetchError::MalformedResponse`], plus [`FetchError::TooManyRedirects`]
    /// and [`FetchError::RedirectLoop`] from the redirect guard.
    pub fn fetch(&self, url: &str) -> Result<RawResponse> {
        tracing::info!("fetching {}", url);
        self.fetch_location(Location::decompose(url))
    }

    /// Runs the pipeline against an already-decomposed location.
    pub fn fetch_location(&self, mut target: Location) -> Result<RawResponse> {
        let mut visited: HashSet<Location> = HashSet::new();
        visited.insert(target.clone());

        loop {
            let response = self.exchange(&target)?;

            let Some(location) = redirect_target(&response.headers) else {
                tracing::info!("got response from {}", target.display());
                return Ok(response);
            };

            tracing::info!("redirected to {}", location);
            let next = Location::decompose(location);

            if !visited.insert(next.clone()) {
                return Err(FetchError::RedirectLoop {
                    location: location.to_string(),
                });
            }
            // The initial location counts as visited, so hops = len - 1.
            if visited.len() - 1 > self.max_redirects {
                return Err(FetchError::TooManyRedirects {
                    limit: self.max_redirects,
                    location: location.to_string(),
                });
            }

            target = next;
        }
    }

    /// One request/response exchange: connect, write the framed request,
    /// drain the stream, split at the blank-line boundary.
    fn exchange(&self, target: &Location) -> Result<RawResponse> {
        tracing::debug!("requesting {}", target.display());

        let mut stream = self.transport.connect(&target.host, target.port)?;

        stream
            .write_all(&build_request(&target.host, &target.path))
            .map_err(|source| FetchError::Read {
                host: target.host.clone(),
                source,
            })?;

        let raw = read_to_string(stream.as_mut(), &target.host)?;
        split_response(&raw)
    }
}
