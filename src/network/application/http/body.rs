use super::source::ByteSource;
use crate::log::{debug, error, warning};
use crate::network::Read;
use crate::network::error::Error;
use alloc::vec::Vec;

/// The response body, sized to the declared length.
///
/// # Short reads
///
/// If the connection closes before the declared number of bytes arrives,
/// the buffer keeps its declared length and the positions that were never
/// filled stay zero. This is not an error. [`received`](Self::received)
/// tells how many bytes really came off the wire, so callers that need a
/// complete body can check [`is_complete`](Self::is_complete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBody {
    bytes: Vec<u8>,
    received: usize,
}

impl ResponseBody {
    /// The whole buffer, including any zero padding after a short read.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The declared length, which is always the buffer length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when the declared length is zero.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of bytes actually read from the connection.
    pub fn received(&self) -> usize {
        self.received
    }

    /// `true` unless the stream ended early.
    pub fn is_complete(&self) -> bool {
        self.received == self.bytes.len()
    }

    /// Consumes the body and returns the buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reads up to `length` bytes from `source` into a zeroed buffer of exactly
/// `length` bytes, stopping early only at end of stream.
///
/// The buffer is reserved up front; a length the allocator refuses fails
/// with [`Error::BodyTooLarge`] before anything is read.
pub fn read_body<R: Read>(source: &mut ByteSource<R>, length: usize) -> Result<ResponseBody, Error> {
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(length).map_err(|_e| {
        error!("cannot allocate {} body bytes: {:?}", length, _e);
        Error::BodyTooLarge
    })?;

    while bytes.len() < length {
        match source.next_byte()? {
            Some(byte) => bytes.push(byte),
            None => break,
        }
    }

    let received = bytes.len();
    bytes.resize(length, 0);

    if received < length {
        warning!(
            "short body: received {} of {} declared bytes, rest left zeroed",
            received,
            length
        );
    } else {
        debug!("read body ({} bytes)", received);
    }

    Ok(ResponseBody { bytes, received })
}
