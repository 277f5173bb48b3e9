//! Manual HTTP/1.1 client built directly on sockets
//!
//! This module deliberately avoids a library HTTP stack. It frames a literal
//! `GET` request, writes it to a TCP (or TLS-wrapped) stream, drains the
//! socket until the peer closes it, and splits the result at the blank-line
//! boundary. Redirects are followed by re-entering the same pipeline.

mod client;
mod request;
mod response;
mod transport;

pub use client::{HttpClient, DEFAULT_MAX_REDIRECTS};
pub use request::{build_request, USER_AGENT};
pub use response::{read_to_string, redirect_target, split_response, RawResponse};
pub use transport::{Stream, TcpTransport, Transport};
