//! Common error types for network operations

use core::fmt;

/// A common error type for network operations.
///
/// This enum defines a set of common errors that can occur when working with
/// network devices. It is designed to be simple and portable for `no_std`
/// environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed.
    ConnectionClosed,
    /// An invalid address was provided.
    InvalidAddress,
    /// A protocol-specific error occurred.
    ProtocolError,
}

/// Classifies a transport-specific error into a common [`Error`] kind.
///
/// Every error type produced by a [`Read`](super::Read), [`Write`](super::Write),
/// [`Close`](super::Close) or [`Connect`](super::Connect) implementation must
/// implement this trait so that protocol clients can tell a timeout apart from
/// a refused connection without knowing the concrete transport.
pub trait NetworkError: fmt::Debug {
    /// Returns the common kind of this error.
    fn kind(&self) -> Error;
}

impl NetworkError for Error {
    fn kind(&self) -> Error {
        *self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::NotOpen => "connection is not open",
            Error::WriteError => "write failed",
            Error::ReadError => "read failed",
            Error::ConnectionRefused => "connection refused",
            Error::Timeout => "operation timed out",
            Error::ConnectionClosed => "connection closed",
            Error::InvalidAddress => "invalid address",
            Error::ProtocolError => "protocol error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match err.kind() {
            ErrorKind::TimedOut | ErrorKind::WouldBlock => Error::Timeout,
            ErrorKind::ConnectionRefused => Error::ConnectionRefused,
            ErrorKind::NotConnected => Error::NotOpen,
            ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
            | ErrorKind::UnexpectedEof => Error::ConnectionClosed,
            ErrorKind::AddrNotAvailable | ErrorKind::InvalidInput => Error::InvalidAddress,
            ErrorKind::WriteZero => Error::WriteError,
            _ => Error::ReadError,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
        }
    }
}
