//! Literal HTTP/1.1 request framing

/// User agent sent with every request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:123.0) Gecko/20100101 Firefox/123.0";

/// Builds the raw bytes of an HTTP/1.1 GET request for `path` on `host`.
///
/// `Connection: close` is mandatory: the response reader has no other
/// end-of-message marker and relies on the peer closing the socket once the
/// body is fully sent.
pub fn build_request(host: &str, path: &str) -> Vec<u8> {
    format!(
        "GET {path} HTTP/1.1\r\n\
         Host: {host}\r\n\
         Connection: close\r\n\
         User-Agent: {USER_AGENT}\r\n\
         Accept: */*\r\n\
         \r\n"
    )
    .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let req = build_request("example.com", "/index.html");
        let expected = "GET /index.html HTTP/1.1\r\n\
                        Host: example.com\r\n\
                        Connection: close\r\n\
                        User-Agent: Mozilla/5.0 (X11; Linux x86_64; rv:123.0) Gecko/20100101 Firefox/123.0\r\n\
                        Accept: */*\r\n\
                        \r\n";
        assert_eq!(req, expected.as_bytes());
    }

    #[test]
    fn test_request_ends_with_blank_line() {
        let req = build_request("example.com", "/");
        assert!(req.ends_with(b"\r\n\r\n"));
    }

    #[test]
    fn test_request_carries_query_string() {
        let req = build_request("www.google.com", "/search?q=go+lang");
        assert!(req.starts_with(b"GET /search?q=go+lang HTTP/1.1\r\n"));
    }
}
