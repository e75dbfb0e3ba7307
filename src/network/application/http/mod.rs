//! HTTP/1.1 subset client for embedded systems.
//!
//! This module implements just enough of HTTP/1.1 to talk to a simple web
//! collector from a device without a general-purpose network stack:
//!
//! - [`url`]: parses `http://host[:port]/path` URLs
//! - [`request`]: serializes GET and POST requests (JSON or form-encoded bodies)
//! - [`transport`]: owns the connection of one request, reads until the server closes it
//! - [`response`]: splits the received bytes into status line, headers and body
//! - [`client`]: ties the above together
//!
//! # Limitations
//!
//! - One connection per request; the server must close the connection after
//!   responding. Keep-alive servers make the read block until the timeout.
//! - No TLS, chunked transfer encoding, redirects, authentication or compression.
//! - Form data is not percent-encoded.
//! - All buffers have fixed capacities; exceeding one fails the request with
//!   [`Error::BufferOverflow`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use wxnode::network::application::http::{Client, DEFAULT_TIMEOUT};
//! # use core::time::Duration;
//! # use wxnode::network::error::Error;
//! # use wxnode::network::{Close, Connect, Connection, Read, Write};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = Error;
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = Error;
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = Error;
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = Error;
//! #     fn connect(&mut self, _: &str, _: u16, _: Duration) -> Result<MockConnection, Error> {
//! #         Ok(MockConnection)
//! #     }
//! # }
//!
//! #[derive(serde::Serialize)]
//! struct Sample {
//!     temperature: f32,
//! }
//!
//! let mut client = Client::new(MockNetwork);
//! let url = "http://192.168.1.10/data";
//! let sample = Sample { temperature: 21.5 };
//! let response = client.post(url, &[], Some(&sample), &[], DEFAULT_TIMEOUT);
//! if let Ok(response) = response {
//!     let _status = response.status_code();
//!     let _body = response.text();
//! }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;
pub mod url;

pub use client::Client;
pub use error::{Error, ParseError};
pub use request::{DEFAULT_TIMEOUT, Method, Request};
pub use response::{HeaderMap, Response};
pub use transport::Transport;
pub use url::Url;

#[cfg(feature = "std")]
use crate::network::tcp::TcpConnector;
#[cfg(feature = "std")]
use core::time::Duration;
#[cfg(feature = "std")]
use serde::Serialize;

/// Sends a GET request over a fresh TCP connection.
#[cfg(feature = "std")]
pub fn get(
    url: &str,
    data: &[(&str, &str)],
    headers: &[(&str, &str)],
    timeout: Duration,
) -> Result<Response, Error> {
    Client::new(TcpConnector::new()).get(url, data, headers, timeout)
}

/// Sends a POST request over a fresh TCP connection.
#[cfg(feature = "std")]
pub fn post<J: Serialize>(
    url: &str,
    data: &[(&str, &str)],
    json: Option<&J>,
    headers: &[(&str, &str)],
    timeout: Duration,
) -> Result<Response, Error> {
    Client::new(TcpConnector::new()).post(url, data, json, headers, timeout)
}
