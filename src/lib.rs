//! # libpost - single-shot HTTP POST over a raw transport
//!
//! A small Rust library that sends one binary payload to an HTTP/1.1 endpoint
//! and returns the response body as text. It never relies on a higher-level
//! HTTP stack: the request is framed byte-exactly, the response headers are
//! scanned one octet at a time and the body is read up to the advertised
//! `Content-Length`.
//!
//! ## Features
//!
//! - **Transport Agnostic**: works over any type implementing
//!   [`Connection`](network::Connection) (TCP socket, modem, mock)
//! - **Binary-Safe Bodies**: the payload bypasses any text encoding so the
//!   advertised length always matches the bytes on the wire
//! - **Byte-Level Parsing**: CR/LF header scanning with explicit
//!   end-of-stream handling
//! - **`no_std` Friendly**: needs only `alloc` for the body buffer
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libpost = "0.1.0"
//! ```
//!
//! ### Basic Exchange
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
//! let connection = MockConnection;
//! let client = Client::new(connection, Endpoint::DEFAULT);
//!
//! let text = client.exchange(b"F10 R90 F10")?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the TCP transport adapter
//! - `log`: Emit diagnostics through the `log` facade
//! - `defmt`: Enable defmt formatting for embedded debugging

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

mod log;

/// Network abstraction layer: transport traits, errors and the HTTP exchange.
///
/// The HTTP logic lives in [`network::application::http`] and works with any
/// connection implementing the traits defined here.
pub mod network;
