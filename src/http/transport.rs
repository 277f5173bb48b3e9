//! Connection establishment: TCP with an optional TLS upgrade
//!
//! The transport is the only part of the pipeline that touches the network.
//! It hands back an owned bidirectional stream; dropping the stream closes
//! the socket on every exit path, error paths included.

use crate::url::HTTPS_PORT;
use crate::{FetchError, Result};
use native_tls::{HandshakeError, TlsConnector};
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// A bidirectional byte stream: written to once, read until closure.
pub trait Stream: Read + Write {}

impl<T: Read + Write> Stream for T {}

/// The seam between the fetch pipeline and the network.
///
/// Production code uses [`TcpTransport`]; tests substitute a scripted double
/// to observe connect calls and feed canned responses.
pub trait Transport {
    /// Opens a connection to `(host, port)` and returns the stream.
    fn connect(&self, host: &str, port: u16) -> Result<Box<dyn Stream>>;
}

/// Real transport: blocking TCP, upgraded to TLS when the target port is the
/// well-known encrypted port.
///
/// TLS uses the platform's default certificate trust store and validates the
/// peer certificate against `host`.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    connect_timeout: Duration,
    io_timeout: Option<Duration>,
}

impl TcpTransport {
    /// Creates a transport with the given connect timeout and read/write
    /// deadline. A `None` deadline restores the original unbounded blocking
    /// behavior.
    pub fn new(connect_timeout: Duration, io_timeout: Option<Duration>) -> Self {
        Self {
            connect_timeout,
            io_timeout,
        }
    }

    fn open_tcp(&self, host: &str, port: u16) -> std::io::Result<TcpStream> {
        let addr = (host, port).to_socket_addrs()?.next().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "hostname resolved to no addresses",
            )
        })?;

        let stream = TcpStream::connect_timeout(&addr, self.connect_timeout)?;
        stream.set_read_timeout(self.io_timeout)?;
        stream.set_write_timeout(self.io_timeout)?;
        Ok(stream)
    }
}

impl Transport for TcpTransport {
    fn connect(&self, host: &str, port: u16) -> Result<Box<dyn Stream>> {
        let stream = self
            .open_tcp(host, port)
            .map_err(|source| FetchError::Connection {
                host: host.to_string(),
                port,
                source,
            })?;

        if port != HTTPS_PORT {
            tracing::debug!("connected to {}:{}", host, port);
            return Ok(Box::new(stream));
        }

        let connector = TlsConnector::new().map_err(|source| FetchError::Tls {
            host: host.to_string(),
            source,
        })?;

        let tls = connector
            .connect(host, stream)
            .map_err(|e| match e {
                HandshakeError::Failure(source) => FetchError::Tls {
                    host: host.to_string(),
                    source,
                },
                // The underlying socket is blocking, so a mid-handshake
                // would-block is not expected; surface it as a connect
                // failure rather than panicking.
                HandshakeError::WouldBlock(_) => FetchError::Connection {
                    host: host.to_string(),
                    port,
                    source: std::io::ErrorKind::WouldBlock.into(),
                },
            })?;

        tracing::debug!("TLS session established with {}:{}", host, port);
        Ok(Box::new(tls))
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(10), Some(Duration::from_secs(30)))
    }
}
