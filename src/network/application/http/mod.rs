//! HTTP/1.1 single-shot POST exchange.
//!
//! This module implements one request/response round trip over a raw
//! connection without any higher-level HTTP machinery. The pieces are small
//! and can be used on their own:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  RequestEncoder │───▶│ ResponseParser  │───▶│   BodyReader    │
//! │  (write half)   │    │ (LineScanner)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │                       │
//!                                 ▼                       ▼
//!                        ┌─────────────────┐    ┌─────────────────┐
//!                        │   ByteSource    │    │   TextDecoder   │
//!                        │  (read half)    │    │    (UTF-8)      │
//!                        └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Wire format
//!
//! The request is always
//!
//! ```text
//! POST <path> HTTP/1.1\r\n
//! Host: <host>\r\n
//! Content-Length: <n>\r\n
//! \r\n
//! <n raw body bytes>
//! ```
//!
//! Only the `Content-Length` response header is interpreted. There is no
//! chunked transfer-encoding, keep-alive or TLS.
//!
//! # Usage
//!
//! ```rust
//! use libpost::network::application::http::{ByteSource, LineScanner, LineEnding, parse_headers, read_body, decode};
//!
//! let response: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello";
//! let mut source = ByteSource::new(response);
//! let meta = {
//!     let mut scanner = LineScanner::new(&mut source, LineEnding::Lenient);
//!     parse_headers(&mut scanner).unwrap()
//! };
//! let body = read_body(&mut source, meta.declared_body_length).unwrap();
//! assert_eq!(decode(&body).unwrap(), "hello");
//! ```

/// Single-octet reader over the inbound half of a connection.
pub mod source;

/// CR/LF header line tokenizer.
pub mod scanner;

/// Request framing and transmission.
pub mod request;

/// Header section parsing.
pub mod response;

/// Length-bounded body extraction.
pub mod body;

/// UTF-8 decoding of the completed body.
pub mod decode;

/// Exchange driver tying the pieces to a connection.
pub mod client;

pub use body::{ResponseBody, read_body};
pub use client::{Client, Endpoint, Options, post};
pub use decode::decode;
pub use request::{MAX_REQUEST_HEAD_LEN, OutgoingRequest, send};
pub use response::{CONTENT_LENGTH_PREFIX, ResponseMetadata, parse_headers};
pub use scanner::{HeaderLine, LineEnding, LineScanner, MAX_HEADER_LINE_LEN, ScannedLine};
pub use source::ByteSource;
