//! Response parsing.
//!
//! The parser works on the complete byte stream of one response. The header
//! block ends at the first CRLF-CRLF sequence; everything after it is the body.
//! Two behaviours differ from a general-purpose parser:
//!
//! - only the first word of the reason phrase is kept (`"404 Not Found"`
//!   yields `"Not"`);
//! - every whitespace character is removed from header names and values,
//!   including inside the value (`"Content-Type: text/plain; charset=utf-8"`
//!   yields `"text/plain;charset=utf-8"`).

use heapless::{FnvIndexMap, String};

use super::error::{Error, ParseError};

/// Maximum number of distinct response headers.
pub const MAX_HEADERS: usize = 16;
/// Maximum length of a header name.
pub const MAX_HEADER_NAME_LEN: usize = 64;
/// Maximum length of a header value.
pub const MAX_HEADER_VALUE_LEN: usize = 256;
/// Maximum length of the reason phrase.
pub const MAX_REASON_LEN: usize = 32;
/// Maximum length of the response body.
pub const MAX_TEXT_LEN: usize = 2048;

const CRLF: &[u8] = b"\r\n";
const BOUNDARY: &[u8] = b"\r\n\r\n";

/// Response headers in arrival order. A repeated name keeps its first
/// position and its last value.
pub type HeaderMap =
    FnvIndexMap<String<MAX_HEADER_NAME_LEN>, String<MAX_HEADER_VALUE_LEN>, MAX_HEADERS>;

/// A fully parsed HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status_code: u16,
    reason_phrase: String<MAX_REASON_LEN>,
    headers: HeaderMap,
    text: String<MAX_TEXT_LEN>,
}

impl Response {
    /// Parses a complete response.
    pub fn parse(buffer: &[u8]) -> Result<Self, Error> {
        let status_end = find_slice(buffer, CRLF).ok_or(ParseError::MissingStatusLine)?;
        let boundary = find_slice(buffer, BOUNDARY).ok_or(ParseError::MissingBoundary)?;

        let (status_code, reason) = parse_status_line(utf8(&buffer[..status_end])?)?;

        // With no headers the boundary starts at the status line's CRLF.
        let header_start = status_end + CRLF.len();
        let header_block = if boundary > header_start {
            utf8(&buffer[header_start..boundary])?
        } else {
            ""
        };
        let headers = parse_headers(header_block)?;

        let text = String::try_from(utf8(&buffer[boundary + BOUNDARY.len()..])?)
            .map_err(|_| Error::BufferOverflow)?;

        Ok(Self {
            status_code,
            reason_phrase: String::try_from(reason).map_err(|_| Error::BufferOverflow)?,
            headers,
            text,
        })
    }

    /// The numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The first word of the reason phrase, empty if the server sent none.
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// All headers with whitespace removed from names and values.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Looks up a header by its exact (case-sensitive) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// The body decoded as text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn parse_status_line(line: &str) -> Result<(u16, &str), ParseError> {
    let mut tokens = line.split_whitespace();

    let version = tokens.next().ok_or(ParseError::InvalidStatusLine)?;
    if !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidStatusLine);
    }

    let code = tokens.next().ok_or(ParseError::InvalidStatusLine)?;
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidStatusCode);
    }
    let status_code = code.parse().map_err(|_| ParseError::InvalidStatusCode)?;

    Ok((status_code, tokens.next().unwrap_or("")))
}

fn parse_headers(block: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    if block.is_empty() {
        return Ok(headers);
    }

    for line in block.split("\r\n") {
        let (name, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        headers
            .insert(strip_whitespace(name)?, strip_whitespace(value)?)
            .map_err(|_| Error::BufferOverflow)?;
    }
    Ok(headers)
}

fn strip_whitespace<const N: usize>(s: &str) -> Result<String<N>, Error> {
    let mut out = String::new();
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        out.push(c).map_err(|_| Error::BufferOverflow)?;
    }
    Ok(out)
}

fn utf8(bytes: &[u8]) -> Result<&str, ParseError> {
    core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidEncoding)
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
