use core::time::Duration;

use serde::Serialize;

use super::error::Error;
use super::request::Request;
use super::response::Response;
use super::transport::{ResponseBuffer, Transport};
use super::url::Url;
use crate::network::{Connect, Connection};

/// HTTP/1.1 client that opens one connection per request.
///
/// Every call parses the URL, serializes the request, connects, sends,
/// reads until the server closes the connection and parses the response.
/// The connection is closed on every path, whether the call succeeds or not.
/// The client keeps no state between calls apart from its connector.
#[derive(Debug)]
pub struct Client<N: Connect> {
    connector: N,
}

impl<N: Connect> Client<N> {
    /// Creates a client that opens its connections through `connector`.
    pub fn new(connector: N) -> Self {
        Self { connector }
    }

    /// Sends a GET request. Non-empty `data` is sent as the query string.
    pub fn get(
        &mut self,
        url: &str,
        data: &[(&str, &str)],
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Response, Error> {
        let target = Url::parse(url)?;
        self.send(&Request::get(target, data, headers, timeout))
    }

    /// Sends a POST request with `json` as the body, or the form-encoded
    /// `data` when `json` is `None`.
    pub fn post<J: Serialize>(
        &mut self,
        url: &str,
        data: &[(&str, &str)],
        json: Option<&J>,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Response, Error> {
        let target = Url::parse(url)?;
        self.send(&Request::post(target, data, json, headers, timeout))
    }

    /// Sends a POST request with a form-encoded body.
    pub fn post_form(
        &mut self,
        url: &str,
        data: &[(&str, &str)],
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Response, Error> {
        self.post::<()>(url, data, None, headers, timeout)
    }

    /// Performs a prepared request.
    pub fn send<J: Serialize>(&mut self, request: &Request<'_, J>) -> Result<Response, Error> {
        let bytes = request.build()?;
        let target = request.target();

        let mut transport = Transport::open(
            &mut self.connector,
            target.host(),
            target.port(),
            request.timeout(),
        )?;
        let received = exchange(&mut transport, &bytes);
        if let Err(e) = transport.close() {
            // Only logged: an earlier failure or a complete response takes precedence.
            warn!("http: close failed: {}", e);
        }

        let buffer = received?;
        let response = Response::parse(&buffer)?;
        debug!(
            "http: {} {} -> {}",
            request.method().as_str(),
            target.path(),
            response.status_code()
        );
        Ok(response)
    }
}

fn exchange<C: Connection>(
    transport: &mut Transport<C>,
    bytes: &[u8],
) -> Result<ResponseBuffer, Error> {
    transport.send(bytes)?;
    transport.receive_all()
}
