//! In-memory connection for exercising the exchange without a socket

use libpost::network::error::Error;
use libpost::network::{Close, Connect, Connection, Read, Write};
use std::cell::RefCell;
use std::rc::Rc;

/// What the test can still inspect after the client has consumed the
/// connection.
#[derive(Debug, Default)]
pub struct Wire {
    /// Every byte the client wrote, in order.
    pub written: Vec<u8>,
    /// Number of flush calls.
    pub flushes: usize,
    /// Set once `close` has run.
    pub closed: bool,
}

/// Mock connection serving scripted response bytes.
#[derive(Debug)]
pub struct MockConnection {
    response: Vec<u8>,
    read_pos: usize,
    /// Largest chunk handed out per `read` call.
    read_chunk: usize,
    /// Largest chunk accepted per `write` call.
    write_chunk: usize,
    fail_read_at: Option<usize>,
    fail_write: bool,
    fail_close: bool,
    wire: Rc<RefCell<Wire>>,
}

impl MockConnection {
    /// Creates a connection that answers with `response` and returns the
    /// shared record of what the client did.
    pub fn new(response: &[u8]) -> (Self, Rc<RefCell<Wire>>) {
        let wire = Rc::new(RefCell::new(Wire::default()));
        let conn = Self {
            response: response.to_vec(),
            read_pos: 0,
            read_chunk: usize::MAX,
            write_chunk: usize::MAX,
            fail_read_at: None,
            fail_write: false,
            fail_close: false,
            wire: Rc::clone(&wire),
        };
        (conn, wire)
    }

    /// Deliver the response at most `n` bytes per read.
    pub fn read_chunk(mut self, n: usize) -> Self {
        self.read_chunk = n;
        self
    }

    /// Accept at most `n` bytes per write.
    pub fn write_chunk(mut self, n: usize) -> Self {
        self.write_chunk = n;
        self
    }

    /// Fail the read that would start at response offset `offset`.
    pub fn fail_read_at(mut self, offset: usize) -> Self {
        self.fail_read_at = Some(offset);
        self
    }

    pub fn fail_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn fail_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_read_at.is_some_and(|at| self.read_pos >= at) {
            return Err(Error::ReadError);
        }
        let mut end = self.response.len().min(self.read_pos + buf.len().min(self.read_chunk));
        if let Some(at) = self.fail_read_at {
            end = end.min(at);
        }
        let n = end - self.read_pos;
        buf[..n].copy_from_slice(&self.response[self.read_pos..end]);
        self.read_pos = end;
        Ok(n)
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_write {
            return Err(Error::WriteError);
        }
        let n = buf.len().min(self.write_chunk);
        self.wire.borrow_mut().written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().flushes += 1;
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().closed = true;
        if self.fail_close {
            return Err(Error::CloseError);
        }
        Ok(())
    }
}

impl Connection for MockConnection {}

/// Connector handing out one prepared connection.
#[derive(Debug)]
pub struct MockNetwork {
    pub connection: Option<MockConnection>,
    pub remotes: Vec<String>,
}

impl MockNetwork {
    pub fn new(connection: MockConnection) -> Self {
        Self {
            connection: Some(connection),
            remotes: Vec::new(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            connection: None,
            remotes: Vec::new(),
        }
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        self.remotes.push(remote.to_string());
        self.connection.take().ok_or(Error::ConnectionRefused)
    }
}

/// Splits what the client sent into the header section and the body.
pub fn split_request(written: &[u8]) -> (&str, &[u8]) {
    let end = written
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("request has no blank line")
        + 4;
    let head = std::str::from_utf8(&written[..end]).expect("request head is not ASCII");
    (head, &written[end..])
}

/// Value of the `Content-Length` header the client sent.
pub fn sent_content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .expect("no Content-Length header")
        .parse()
        .expect("Content-Length is not a number")
}
