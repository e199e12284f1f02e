//! Common error types for network operations

use core::fmt;

/// A common error type for the exchange.
///
/// This enum covers every way a single request/response exchange can fail.
/// It is designed to be simple and portable for `no_std` environments:
/// transport-specific errors are folded into one of these variants at the
/// trait boundary.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A connection attempt was refused or could not be established.
    ConnectionRefused,
    /// An invalid address was provided to a connector.
    InvalidAddress,
    /// An error occurred during a read operation.
    ReadError,
    /// An error occurred during a write operation, or the transport
    /// stopped accepting bytes.
    WriteError,
    /// The connection could not be closed cleanly.
    CloseError,
    /// The request path or host contains bytes that cannot appear in a
    /// header line.
    InvalidHeaderValue,
    /// A `Content-Length` header carried a value that is not a decimal
    /// byte count.
    InvalidContentLength,
    /// The declared body length could not be allocated.
    BodyTooLarge,
    /// A CR was followed by something other than LF (strict line endings only).
    MalformedLineEnding,
    /// The response body is not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix of the body.
        valid_up_to: usize,
    },
}

impl Error {
    /// Returns `true` for failures of the underlying transport, as opposed
    /// to malformed request or response content.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Error::ConnectionRefused
                | Error::InvalidAddress
                | Error::ReadError
                | Error::WriteError
                | Error::CloseError
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConnectionRefused => write!(f, "connection refused"),
            Error::InvalidAddress => write!(f, "invalid address"),
            Error::ReadError => write!(f, "read from connection failed"),
            Error::WriteError => write!(f, "write to connection failed"),
            Error::CloseError => write!(f, "closing connection failed"),
            Error::InvalidHeaderValue => write!(f, "request header value is not printable ASCII"),
            Error::InvalidContentLength => write!(f, "invalid Content-Length value"),
            Error::BodyTooLarge => write!(f, "declared response body too large"),
            Error::MalformedLineEnding => write!(f, "CR not followed by LF"),
            Error::InvalidUtf8 { valid_up_to } => {
                write!(f, "response body is not valid UTF-8 after byte {valid_up_to}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::CloseError => defmt::write!(f, "CloseError"),
            Error::InvalidHeaderValue => defmt::write!(f, "InvalidHeaderValue"),
            Error::InvalidContentLength => defmt::write!(f, "InvalidContentLength"),
            Error::BodyTooLarge => defmt::write!(f, "BodyTooLarge"),
            Error::MalformedLineEnding => defmt::write!(f, "MalformedLineEnding"),
            Error::InvalidUtf8 { valid_up_to } => {
                defmt::write!(f, "InvalidUtf8({})", valid_up_to)
            }
        }
    }
}
