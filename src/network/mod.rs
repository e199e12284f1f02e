//! A transport abstraction layer for the HTTP exchange
//!
//! This module provides the small set of traits the exchange needs from an
//! underlying connection: octet reads, octet writes with flush, and an
//! explicit close. Any byte stream (a TCP socket, a serial modem, an
//! in-memory test double) can carry the exchange by implementing them.
//!

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// Application layer protocols
pub mod application;

/// TCP transport backed by `std::net`
#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection. `Ok(0)` signals end of stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `remote`, given as `host:port`
    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error>;
}

impl<R: Read + ?Sized> Read for &mut R {
    type Error = R::Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

impl<W: Write + ?Sized> Write for &mut W {
    type Error = W::Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        (**self).write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Reading from a byte slice consumes it, as `std::io::Read` does.
impl Read for &[u8] {
    type Error = core::convert::Infallible;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(self.len());
        let (head, tail) = self.split_at(len);
        buf[..len].copy_from_slice(head);
        *self = tail;
        Ok(len)
    }
}
