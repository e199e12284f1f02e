use crate::log::{debug, error};
use crate::network::Write;
use crate::network::error::Error;
use core::fmt::Write as _;

/// Capacity of the rendered request line and headers, in bytes.
pub const MAX_REQUEST_HEAD_LEN: usize = 1024;

/// The request about to be sent. The method is always `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutgoingRequest<'a> {
    /// Request target, e.g. `/s.hunt/Turtle.php`.
    pub path: &'a str,
    /// Value of the `Host` header.
    pub host: &'a str,
    /// Raw body, sent unmodified.
    pub body: &'a [u8],
}

impl<'a> OutgoingRequest<'a> {
    /// The only method this client speaks.
    pub const METHOD: &'static str = "POST";

    /// Value advertised in the `Content-Length` header.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Renders the request line, headers and blank line.
    ///
    /// Fails with [`Error::InvalidHeaderValue`] if the path or host is empty,
    /// contains anything but printable ASCII, or does not fit the header
    /// buffer.
    pub fn head(&self) -> Result<heapless::String<MAX_REQUEST_HEAD_LEN>, Error> {
        if !is_header_safe(self.path) || !is_header_safe(self.host) {
            return Err(Error::InvalidHeaderValue);
        }

        let mut head = heapless::String::new();
        write!(
            head,
            "{} {} HTTP/1.1\r\nHost: {}\r\nContent-Length: {}\r\n\r\n",
            Self::METHOD,
            self.path,
            self.host,
            self.content_length()
        )
        .map_err(|_| Error::InvalidHeaderValue)?;
        Ok(head)
    }
}

/// Printable 7-bit ASCII without spaces, so neither the request line nor a
/// header line can be split or terminated early.
fn is_header_safe(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_graphic())
}

/// Sends `request` over `writer`.
///
/// The header section goes out first and is flushed. The body follows on
/// the same byte path without any transformation, so exactly
/// `request.content_length()` body bytes are transmitted whatever their
/// values, and the writer is flushed again.
pub fn send<W: Write>(request: &OutgoingRequest<'_>, writer: &mut W) -> Result<(), Error> {
    let head = request.head()?;

    write_all(writer, head.as_bytes())?;
    flush(writer)?;
    debug!("sent request head ({} bytes)", head.len());

    write_all(writer, request.body)?;
    flush(writer)?;
    debug!("sent request body ({} bytes)", request.body.len());

    Ok(())
}

/// Writes every byte of `buf`, retrying short writes.
fn write_all<W: Write>(writer: &mut W, mut buf: &[u8]) -> Result<(), Error> {
    while !buf.is_empty() {
        match writer.write(buf) {
            Ok(0) => {
                error!("transport accepted no bytes, {} left unsent", buf.len());
                return Err(Error::WriteError);
            }
            Ok(n) => buf = &buf[n..],
            Err(_e) => {
                error!("transport write failed: {:?}", _e);
                return Err(Error::WriteError);
            }
        }
    }
    Ok(())
}

fn flush<W: Write>(writer: &mut W) -> Result<(), Error> {
    writer.flush().map_err(|_e| {
        error!("transport flush failed: {:?}", _e);
        Error::WriteError
    })
}
