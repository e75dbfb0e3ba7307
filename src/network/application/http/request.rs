//! Request construction and wire serialization.

use core::fmt::Write as _;
use core::time::Duration;

use heapless::{String, Vec};
use serde::Serialize;

use super::error::Error;
use super::url::Url;

/// Capacity of a serialized request, headers and body included.
pub const MAX_REQUEST_LEN: usize = 2048;
/// Capacity of a serialized request body.
pub const MAX_BODY_LEN: usize = 1024;
/// Timeout applied when the caller does not choose one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

const HTTP_VERSION: &[u8] = b"HTTP/1.1";
const CRLF: &[u8] = b"\r\n";

/// A serialized request ready to be written to a connection.
pub type RequestBuffer = Vec<u8, MAX_REQUEST_LEN>;

/// The request methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`: form data travels in the query string, no body is sent.
    Get,
    /// `POST`: a JSON or form-encoded body is sent with its `Content-Length`.
    Post,
}

impl Method {
    /// The method token as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single outgoing request.
///
/// `data` and `headers` are ordered key/value slices. Form data is written as
/// `key=value` pairs joined by `&` **without percent-encoding**, so keys and
/// values must already be safe to place on the wire. Caller headers are sent
/// after `Host` (and `Content-Length` for POST) in the given order; duplicates
/// are sent as-is.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a, J = ()> {
    method: Method,
    target: Url<'a>,
    data: &'a [(&'a str, &'a str)],
    json: Option<&'a J>,
    headers: &'a [(&'a str, &'a str)],
    timeout: Duration,
}

impl<'a> Request<'a> {
    /// Creates a GET request. Non-empty `data` becomes the query string.
    pub fn get(
        target: Url<'a>,
        data: &'a [(&'a str, &'a str)],
        headers: &'a [(&'a str, &'a str)],
        timeout: Duration,
    ) -> Self {
        Self {
            method: Method::Get,
            target,
            data,
            json: None,
            headers,
            timeout,
        }
    }
}

impl<'a, J: Serialize> Request<'a, J> {
    /// Creates a POST request.
    ///
    /// The body is `json` serialized as compact JSON when given, otherwise the
    /// form-encoded `data`.
    pub fn post(
        target: Url<'a>,
        data: &'a [(&'a str, &'a str)],
        json: Option<&'a J>,
        headers: &'a [(&'a str, &'a str)],
        timeout: Duration,
    ) -> Self {
        Self {
            method: Method::Post,
            target,
            data,
            json,
            headers,
            timeout,
        }
    }

    /// The request method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The parsed destination.
    pub fn target(&self) -> &Url<'a> {
        &self.target
    }

    /// The timeout for connecting and for each read and write.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Serializes the request into its wire format.
    pub fn build(&self) -> Result<RequestBuffer, Error> {
        let mut buf = RequestBuffer::new();

        // Request line
        extend(&mut buf, self.method.as_str().as_bytes())?;
        extend(&mut buf, b" ")?;
        extend(&mut buf, self.target.path().as_bytes())?;
        if self.method == Method::Get && self.json.is_none() && !self.data.is_empty() {
            extend(&mut buf, b"?")?;
            write_form(&mut buf, self.data)?;
        }
        extend(&mut buf, b" ")?;
        extend(&mut buf, HTTP_VERSION)?;
        extend(&mut buf, CRLF)?;

        // Mandatory headers
        write_header(&mut buf, "Host", self.target.host())?;

        let body = match self.method {
            Method::Post => {
                let body = self.body()?;
                let mut len: String<20> = String::new();
                write!(len, "{}", body.len()).map_err(|_| Error::BufferOverflow)?;
                write_header(&mut buf, "Content-Length", &len)?;
                Some(body)
            }
            Method::Get => None,
        };

        for (name, value) in self.headers {
            write_header(&mut buf, name, value)?;
        }
        extend(&mut buf, CRLF)?;

        if let Some(body) = body {
            extend(&mut buf, &body)?;
        }

        Ok(buf)
    }

    fn body(&self) -> Result<Vec<u8, MAX_BODY_LEN>, Error> {
        let mut body = Vec::new();
        match self.json {
            Some(json) => {
                let mut scratch = [0u8; MAX_BODY_LEN];
                let len = serde_json_core::to_slice(json, &mut scratch)
                    .map_err(|_| Error::BufferOverflow)?;
                extend(&mut body, &scratch[..len])?;
            }
            None => write_form(&mut body, self.data)?,
        }
        Ok(body)
    }
}

fn write_form<const N: usize>(buf: &mut Vec<u8, N>, data: &[(&str, &str)]) -> Result<(), Error> {
    for (i, (key, value)) in data.iter().enumerate() {
        if i > 0 {
            extend(buf, b"&")?;
        }
        extend(buf, key.as_bytes())?;
        extend(buf, b"=")?;
        extend(buf, value.as_bytes())?;
    }
    Ok(())
}

fn write_header<const N: usize>(
    buf: &mut Vec<u8, N>,
    name: &str,
    value: &str,
) -> Result<(), Error> {
    extend(buf, name.as_bytes())?;
    extend(buf, b": ")?;
    extend(buf, value.as_bytes())?;
    extend(buf, CRLF)
}

fn extend<const N: usize>(buf: &mut Vec<u8, N>, bytes: &[u8]) -> Result<(), Error> {
    buf.extend_from_slice(bytes).map_err(|_| Error::BufferOverflow)
}
