//! # Application Layer Network Protocols
//!
//! This module contains the application layer (OSI Layer 7) protocol built on
//! top of the core network traits.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: single-shot HTTP/1.1 POST exchange
//!
//! ## Design Principles
//!
//! - **Connection Agnostic**: Work with any type implementing [`Connection`](crate::network::Connection)
//! - **No-std Compatible**: Only the body buffer and decoded text allocate
//! - **Byte Exact**: What is advertised on the wire is what is sent
//!
//! ## Usage Pattern
//!
//! 1. Create a connection using your transport layer
//! 2. Wrap it with the protocol client
//! 3. Run the exchange; the client consumes and closes the connection
//!
//! ```rust,no_run
//! use libpost::network::application::http::{Client, Endpoint};
//! # use libpost::network::Connection;
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl libpost::network::Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl libpost::network::Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl libpost::network::Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//!
//! # fn main() -> Result<(), libpost::network::error::Error> {
//! // 1. Create connection (implementation-specific)
//! let connection = MockConnection;
//!
//! // 2. Wrap with protocol client
//! let client = Client::new(connection, Endpoint::DEFAULT);
//!
//! // 3. Run the exchange
//! let text = client.exchange(b"payload")?;
//! assert!(text.is_empty());
//! # Ok(())
//! # }
//! ```

/// HTTP client implementation.
///
/// Provides the request encoder, the byte-level response parser and the
/// client that ties them to a connection.
pub mod http;
