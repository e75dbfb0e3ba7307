//! Error types for the HTTP client.

use core::fmt;

use crate::network::error::Error as NetworkError;

/// Reasons a raw response buffer could not be parsed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    /// No CRLF was found, so there is no status line.
    MissingStatusLine,
    /// No CRLF-CRLF sequence separates the headers from the body.
    MissingBoundary,
    /// The status line does not start with an `HTTP/` version or lacks a status code.
    InvalidStatusLine,
    /// The status code is not a number.
    InvalidStatusCode,
    /// A header line has no `:` separator.
    InvalidHeader,
    /// The response is not valid UTF-8 text.
    InvalidEncoding,
}

/// Errors returned by the HTTP [`Client`](super::Client).
///
/// Every failed call returns exactly one of these and no partial response.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The URL does not use the `http` scheme or has an unparsable authority.
    InvalidUrl,
    /// The connection could not be opened (refused, unreachable, timed out).
    Connection(NetworkError),
    /// The connection failed while sending the request or receiving the response.
    Transport(NetworkError),
    /// The response could not be parsed.
    Parse(ParseError),
    /// A request or response exceeded one of the fixed buffer capacities.
    BufferOverflow,
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::MissingStatusLine => "missing status line",
            ParseError::MissingBoundary => "missing header/body boundary",
            ParseError::InvalidStatusLine => "malformed status line",
            ParseError::InvalidStatusCode => "non-numeric status code",
            ParseError::InvalidHeader => "malformed header line",
            ParseError::InvalidEncoding => "response is not valid UTF-8",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl => f.write_str("invalid URL"),
            Error::Connection(e) => write!(f, "connection error: {e}"),
            Error::Transport(e) => write!(f, "transport error: {e}"),
            Error::Parse(e) => write!(f, "parse error: {e}"),
            Error::BufferOverflow => f.write_str("buffer capacity exceeded"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ParseError::MissingStatusLine => defmt::write!(f, "MissingStatusLine"),
            ParseError::MissingBoundary => defmt::write!(f, "MissingBoundary"),
            ParseError::InvalidStatusLine => defmt::write!(f, "InvalidStatusLine"),
            ParseError::InvalidStatusCode => defmt::write!(f, "InvalidStatusCode"),
            ParseError::InvalidHeader => defmt::write!(f, "InvalidHeader"),
            ParseError::InvalidEncoding => defmt::write!(f, "InvalidEncoding"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::InvalidUrl => defmt::write!(f, "InvalidUrl"),
            Error::Connection(e) => defmt::write!(f, "Connection({})", e),
            Error::Transport(e) => defmt::write!(f, "Transport({})", e),
            Error::Parse(e) => defmt::write!(f, "Parse({})", e),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}
