use crate::log::error;
use crate::network::Read;
use crate::network::error::Error;
use core::fmt;

/// Size of the read-ahead buffer between the transport and the byte reader.
const SOURCE_BUFFER_LEN: usize = 256;

/// Single-octet reader over the inbound half of a connection.
///
/// Each call to [`next_byte`](ByteSource::next_byte) yields one byte or
/// `None` once the transport reports end of stream. End of stream is sticky:
/// after the first `None` the transport is never read again and every later
/// call returns `None` as well.
///
/// Bytes are pulled from the transport in chunks of up to 256 bytes and
/// handed out one at a time. Because the exchange is single-shot, any bytes
/// read ahead past the body are simply discarded with the connection.
pub struct ByteSource<R> {
    reader: R,
    buf: [u8; SOURCE_BUFFER_LEN],
    pos: usize,
    filled: usize,
    eof: bool,
}

impl<R: Read> ByteSource<R> {
    /// Wraps `reader`. Pass `&mut connection` to keep using the connection
    /// afterwards.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: [0; SOURCE_BUFFER_LEN],
            pos: 0,
            filled: 0,
            eof: false,
        }
    }

    /// Returns the next byte, or `Ok(None)` at end of stream.
    ///
    /// Blocks for as long as the transport blocks. A transport error is
    /// reported as [`Error::ReadError`].
    pub fn next_byte(&mut self) -> Result<Option<u8>, Error> {
        if self.pos == self.filled {
            if self.eof {
                return Ok(None);
            }
            let n = self.reader.read(&mut self.buf).map_err(|_e| {
                error!("transport read failed: {:?}", _e);
                Error::ReadError
            })?;
            if n == 0 {
                self.eof = true;
                return Ok(None);
            }
            self.pos = 0;
            self.filled = n.min(SOURCE_BUFFER_LEN);
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }

    /// `true` once the transport has signalled end of stream and every
    /// buffered byte has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.eof && self.pos == self.filled
    }

    /// Releases the underlying reader. Buffered bytes not yet returned are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> fmt::Debug for ByteSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteSource")
            .field("buffered", &(self.filled - self.pos))
            .field("eof", &self.eof)
            .finish()
    }
}
