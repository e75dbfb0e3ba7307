//! Blocking TCP transport for hosted targets.

use core::time::Duration;
use std::io::{Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Instant;

use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};

/// Opens [`TcpConnection`]s with `std::net`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl TcpConnector {
    /// Creates a new connector.
    pub fn new() -> Self {
        Self
    }
}

/// A TCP stream with read and write timeouts applied.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(
        &mut self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error> {
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(|_| Error::InvalidAddress)?;

        // Every resolved address is tried until the one deadline expires.
        let deadline = Instant::now() + timeout;
        let mut last_err = Error::InvalidAddress;
        for addr in addrs {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                last_err = Error::Timeout;
                break;
            }
            match TcpStream::connect_timeout(&addr, remaining) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(timeout))?;
                    stream.set_write_timeout(Some(timeout))?;
                    return Ok(TcpConnection { stream });
                }
                Err(e) => last_err = e.into(),
            }
        }
        Err(last_err)
    }
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream.read(buf).map_err(Error::from)
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|e| match Error::from(e) {
            Error::ReadError => Error::WriteError,
            other => other,
        })
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
            // The peer already tore the connection down.
            Err(e) if e.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Connection for TcpConnection {}
