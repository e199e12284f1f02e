//! Blocking TCP transport over `std::net`.
//!
//! Sockets are put in fully blocking mode with no read or write timeout, so
//! an exchange waits for the peer indefinitely.

use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};
use crate::log::{debug, error};
use std::io::{self, ErrorKind, Read as _, Write as _};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

/// An open TCP connection.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Takes ownership of `stream` and clears its timeouts.
    pub fn new(stream: TcpStream) -> io::Result<Self> {
        stream.set_read_timeout(None)?;
        stream.set_write_timeout(None)?;
        Ok(Self { stream })
    }

    /// Address of the remote end.
    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.stream.peer_addr()
    }
}

impl Read for TcpConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_e) => {
                    error!("tcp read failed: {}", _e);
                    return Err(Error::ReadError);
                }
            }
        }
    }
}

impl Write for TcpConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.write(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_e) => {
                    error!("tcp write failed: {}", _e);
                    return Err(Error::WriteError);
                }
            }
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The peer got there first.
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            Err(_e) => {
                error!("tcp shutdown failed: {}", _e);
                Err(Error::CloseError)
            }
        }
    }
}

impl Connection for TcpConnection {}

/// Opens [`TcpConnection`]s to `host:port` addresses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        let addrs: Vec<SocketAddr> = remote
            .to_socket_addrs()
            .map_err(|_e| {
                error!("cannot resolve {}: {}", remote, _e);
                Error::InvalidAddress
            })?
            .collect();
        if addrs.is_empty() {
            return Err(Error::InvalidAddress);
        }

        let stream = TcpStream::connect(&addrs[..]).map_err(|_e| {
            error!("cannot connect to {}: {}", remote, _e);
            Error::ConnectionRefused
        })?;
        debug!("tcp connected to {:?}", stream.peer_addr());
        TcpConnection::new(stream).map_err(|_| Error::ConnectionRefused)
    }
}
