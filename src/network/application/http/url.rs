//! Absolute `http://` URL parsing.

use core::fmt;

use super::error::Error;

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

const SCHEME: &str = "http";
const SCHEME_SEPARATOR: &str = "://";

/// The components of an absolute `http://host[:port]/path` URL.
///
/// All parts borrow from the parsed string. The path is the remainder after
/// the authority, starting with `/`, or `"/"` when the URL has no path at all.
///
/// ```rust
/// use wxnode::network::application::http::Url;
///
/// let url = Url::parse("http://10.0.0.1:9000/data").unwrap();
/// assert_eq!(url.host(), "10.0.0.1");
/// assert_eq!(url.port(), 9000);
/// assert_eq!(url.path(), "/data");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url<'a> {
    scheme: &'a str,
    host: &'a str,
    port: u16,
    path: &'a str,
}

impl<'a> Url<'a> {
    /// Parses an absolute URL.
    ///
    /// Fails with [`Error::InvalidUrl`] when the scheme is not `http`, the host
    /// is empty, or the port is not an unsigned 16-bit number.
    pub fn parse(url: &'a str) -> Result<Self, Error> {
        let (scheme, rest) = url.split_once(SCHEME_SEPARATOR).ok_or(Error::InvalidUrl)?;
        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return Err(Error::InvalidUrl);
        }

        let (authority, path) = match rest.find('/') {
            Some(idx) => rest.split_at(idx),
            None => (rest, "/"),
        };

        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => (host, parse_port(port)?),
            None => (authority, DEFAULT_PORT),
        };
        if host.is_empty() {
            return Err(Error::InvalidUrl);
        }

        Ok(Self {
            scheme,
            host,
            port,
            path,
        })
    }

    /// The scheme as written in the URL, without the `://` separator.
    pub fn scheme(&self) -> &'a str {
        self.scheme
    }

    /// The host name or address.
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// The explicit port, or [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The request path, always starting with `/`.
    pub fn path(&self) -> &'a str {
        self.path
    }
}

impl<'a> TryFrom<&'a str> for Url<'a> {
    type Error = Error;

    fn try_from(url: &'a str) -> Result<Self, Self::Error> {
        Url::parse(url)
    }
}

impl fmt::Display for Url<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)?;
        f.write_str(self.path)
    }
}

fn parse_port(port: &str) -> Result<u16, Error> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidUrl);
    }
    port.parse().map_err(|_| Error::InvalidUrl)
}
