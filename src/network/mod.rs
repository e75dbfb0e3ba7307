//! A network abstraction layer for embedded systems
//!
//! This module provides the traits a transport must implement to carry the
//! protocol clients of this crate. A transport only needs to move bytes over a
//! single blocking stream connection; everything above that lives in
//! [`application`].
//!
//! With the `std` feature enabled, [`tcp`] provides an implementation on top
//! of `std::net::TcpStream`.

#![allow(missing_docs)]
#![deny(unsafe_code)]

use core::time::Duration;

use error::NetworkError;

/// Common error types for network operations
pub mod error;

/// Application layer protocol implementations
pub mod application;

/// TCP transport backed by the standard library
#[cfg(feature = "std")]
pub mod tcp;

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: NetworkError;
    /// Read data from the connection.
    ///
    /// Returns `Ok(0)` once the peer has closed its side of the connection.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: NetworkError;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: NetworkError;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
///
/// Each call to [`connect`](Connect::connect) opens a fresh stream connection
/// to `host:port`. The `timeout` bounds the connect itself and every
/// subsequent read and write on the returned connection.
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: NetworkError;
    /// Open a connection
    fn connect(
        &mut self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error>;
}

impl<T: Connect + ?Sized> Connect for &mut T {
    type Connection = T::Connection;
    type Error = T::Error;

    fn connect(
        &mut self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error> {
        (**self).connect(host, port, timeout)
    }
}
