//! Connection lifecycle for a single request.

use core::time::Duration;

use heapless::Vec;

use super::error::Error;
use crate::network::error::{Error as NetworkError, NetworkError as _};
use crate::network::{Connect, Connection};

/// Size of each read from the connection.
pub const RECV_CHUNK_SIZE: usize = 1024;
/// Capacity of the buffer a whole response is accumulated into.
pub const MAX_RESPONSE_LEN: usize = 4096;

/// The raw bytes of one response, as received.
pub type ResponseBuffer = Vec<u8, MAX_RESPONSE_LEN>;

/// Owns the stream connection of one request.
///
/// The connection is closed by [`close`](Transport::close), which may be
/// called any number of times, or when the transport is dropped.
#[derive(Debug)]
pub struct Transport<C: Connection> {
    connection: Option<C>,
}

impl<C: Connection> Transport<C> {
    /// Opens a connection to `host:port` through `connector`.
    pub fn open<N>(
        connector: &mut N,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self, Error>
    where
        N: Connect<Connection = C>,
    {
        let connection = connector
            .connect(host, port, timeout)
            .map_err(|e| Error::Connection(e.kind()))?;
        debug!("http: connected to {}:{}", host, port);
        Ok(Self::new(connection))
    }

    /// Takes ownership of an already open connection.
    pub fn new(connection: C) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    /// Returns `true` until the connection has been closed.
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Writes the whole request in a single write.
    ///
    /// A write that accepts fewer bytes than given is a transport error.
    pub fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let connection = self.connection_mut()?;
        let written = connection
            .write(bytes)
            .map_err(|e| Error::Transport(e.kind()))?;
        if written != bytes.len() {
            warn!("http: short write, {} of {} bytes", written, bytes.len());
            return Err(Error::Transport(NetworkError::WriteError));
        }
        connection.flush().map_err(|e| Error::Transport(e.kind()))?;
        trace!("http: sent {} bytes", written);
        Ok(())
    }

    /// Reads until the peer closes the connection.
    ///
    /// There is no early exit on `Content-Length`: the server must close the
    /// connection after its response, otherwise this blocks until the read
    /// timeout expires.
    pub fn receive_all(&mut self) -> Result<ResponseBuffer, Error> {
        let connection = self.connection_mut()?;
        let mut buffer = ResponseBuffer::new();
        let mut chunk = [0u8; RECV_CHUNK_SIZE];

        loop {
            let n = connection
                .read(&mut chunk)
                .map_err(|e| Error::Transport(e.kind()))?;
            if n == 0 {
                break;
            }
            buffer
                .extend_from_slice(&chunk[..n])
                .map_err(|_| Error::BufferOverflow)?;
        }

        trace!("http: received {} bytes", buffer.len());
        Ok(buffer)
    }

    /// Closes the connection. Later calls do nothing.
    pub fn close(&mut self) -> Result<(), Error> {
        match self.connection.take() {
            Some(connection) => connection.close().map_err(|e| Error::Transport(e.kind())),
            None => Ok(()),
        }
    }

    fn connection_mut(&mut self) -> Result<&mut C, Error> {
        self.connection
            .as_mut()
            .ok_or(Error::Transport(NetworkError::NotOpen))
    }
}

impl<C: Connection> Drop for Transport<C> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("http: close on drop failed: {}", e);
        }
    }
}
