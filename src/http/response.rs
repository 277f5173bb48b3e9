//! Response buffering, header/body splitting, and redirect detection
//!
//! The client sends `Connection: close`, so a response is complete exactly
//! when the peer closes the socket. The reader therefore drains the stream
//! to EOF instead of interpreting `Content-Length` or chunked framing.

use crate::http::transport::Stream;
use crate::{FetchError, Result};

/// Read buffer size for draining the socket.
const CHUNK_SIZE: usize = 4096;

/// A complete HTTP response, split at the first blank-line boundary.
///
/// Lives for a single fetch; handed to the caller or consumed by the
/// redirect path, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Status line plus headers, without the trailing blank line.
    pub headers: String,
    /// Everything after the blank-line boundary.
    pub body: String,
}

/// Drains `stream` until the peer closes it and decodes the bytes as UTF-8.
///
/// Undecodable sequences are replaced rather than treated as errors; servers
/// routinely mix encodings in bodies. A zero-length read is the clean end of
/// the response; any hard I/O error (including an expired read deadline)
/// fails with [`FetchError::Read`].
pub fn read_to_string(stream: &mut dyn Stream, host: &str) -> Result<String> {
    let mut bytes = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(FetchError::Read {
                    host: host.to_string(),
                    source,
                })
            }
        }
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Splits a raw response at the first `\r\n\r\n` boundary.
///
/// # Errors
///
/// [`FetchError::MalformedResponse`] when the boundary is absent.
pub fn split_response(raw: &str) -> Result<RawResponse> {
    let (headers, body) = raw
        .split_once("\r\n\r\n")
        .ok_or(FetchError::MalformedResponse)?;

    Ok(RawResponse {
        headers: headers.to_string(),
        body: body.to_string(),
    })
}

/// Returns the redirect target of a response, if it has one.
///
/// A response redirects only when *both* hold: the status line carries a 3xx
/// code, and a `Location` header is present. A 3xx without a `Location` is
/// terminal and is returned to the caller as-is.
pub fn redirect_target(headers: &str) -> Option<&str> {
    let status_line = headers.lines().next()?;
    let code = status_line.split_whitespace().nth(1)?;
    if code.len() != 3 || !code.starts_with('3') {
        return None;
    }

    headers.lines().skip(1).find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("location") {
            Some(value.trim())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_split_separates_headers_and_body() {
        let resp = split_response("HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhi").unwrap();
        assert_eq!(resp.headers, "HTTP/1.1 200 OK\r\nContent-Length: 2");
        assert_eq!(resp.body, "hi");
    }

    #[test]
    fn test_split_uses_first_boundary_only() {
        let resp = split_response("HTTP/1.1 200 OK\r\n\r\nline\r\n\r\nmore").unwrap();
        assert_eq!(resp.headers, "HTTP/1.1 200 OK");
        assert_eq!(resp.body, "line\r\n\r\nmore");
    }

    #[test]
    fn test_split_recovers_joined_pair() {
        let headers = "HTTP/1.1 200 OK\r\nServer: test";
        let body = "<html></html>";
        let resp = split_response(&format!("{headers}\r\n\r\n{body}")).unwrap();
        assert_eq!(resp.headers, headers);
        assert_eq!(resp.body, body);
    }

    #[test]
    fn test_split_without_boundary_is_malformed() {
        let err = split_response("HTTP/1.1 200 OK\r\nContent-Length: 2").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse));
    }

    #[test]
    fn test_redirect_needs_both_status_and_location() {
        let headers = "HTTP/1.1 301 Moved\r\nLocation: http://example.org/x";
        assert_eq!(redirect_target(headers), Some("http://example.org/x"));

        // 3xx without a Location header is terminal.
        assert_eq!(redirect_target("HTTP/1.1 301 Moved\r\nServer: test"), None);

        // Location on a non-3xx status is not a redirect.
        assert_eq!(
            redirect_target("HTTP/1.1 200 OK\r\nLocation: http://example.org/"),
            None
        );
    }

    #[test]
    fn test_redirect_header_name_is_case_insensitive() {
        let headers = "HTTP/1.1 302 Found\r\nlocation: /next";
        assert_eq!(redirect_target(headers), Some("/next"));
    }

    #[test]
    fn test_read_to_string_drains_until_close() {
        let mut stream = std::io::Cursor::new(b"HTTP/1.1 200 OK\r\n\r\nhi".to_vec());
        let raw = read_to_string(&mut stream, "example.com").unwrap();
        assert_eq!(raw, "HTTP/1.1 200 OK\r\n\r\nhi");
    }

    #[test]
    fn test_read_to_string_replaces_undecodable_bytes() {
        let mut stream = std::io::Cursor::new(vec![b'o', b'k', 0xff, 0xfe]);
        let raw = read_to_string(&mut stream, "example.com").unwrap();
        assert!(raw.starts_with("ok"));
        assert!(raw.contains('\u{fffd}'));
    }

    /// Stream that serves a prefix of a response and then fails hard, as a
    /// peer resetting the connection mid-body does.
    struct ResettingStream {
        prefix: std::io::Cursor<Vec<u8>>,
    }

    impl std::io::Read for ResettingStream {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.prefix.read(buf) {
                Ok(0) => Err(std::io::ErrorKind::ConnectionReset.into()),
                other => other,
            }
        }
    }

    impl std::io::Write for ResettingStream {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_hard_read_error_is_distinct_from_clean_close() {
        let mut stream = ResettingStream {
            prefix: std::io::Cursor::new(b"HTTP/1.1 200 OK\r\n\r\npartial".to_vec()),
        };

        let err = read_to_string(&mut stream, "example.com").unwrap_err();
        match err {
            FetchError::Read { host, source } => {
                assert_eq!(host, "example.com");
                assert_eq!(source.kind(), std::io::ErrorKind::ConnectionReset);
            }
            other => panic!("expected a read error, got {other:?}"),
        }
    }
}
