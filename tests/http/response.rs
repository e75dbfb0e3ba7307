use wxnode::network::application::http::response::MAX_TEXT_LEN;
use wxnode::network::application::http::{Error, ParseError, Response};

#[test]
fn test_parse_simple_response() {
    let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nHello";
    let response = Response::parse(raw).unwrap();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.reason_phrase(), "OK");
    assert_eq!(response.headers().len(), 1);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.text(), "Hello");
}

#[test]
fn test_header_lookup_is_case_sensitive() {
    let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\n";
    let response = Response::parse(raw).unwrap();
    assert_eq!(response.header("content-type"), None);
}

#[test]
fn test_missing_boundary() {
    let result = Response::parse(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n");
    assert_eq!(
        result.unwrap_err(),
        Error::Parse(ParseError::MissingBoundary)
    );
}

#[test]
fn test_missing_status_line() {
    let result = Response::parse(b"HTTP/1.1 200 OK");
    assert_eq!(
        result.unwrap_err(),
        Error::Parse(ParseError::MissingStatusLine)
    );
    assert_eq!(
        Response::parse(b"").unwrap_err(),
        Error::Parse(ParseError::MissingStatusLine)
    );
}

#[test]
fn test_non_numeric_status_code() {
    let result = Response::parse(b"HTTP/1.1 OK 200\r\n\r\n");
    assert_eq!(
        result.unwrap_err(),
        Error::Parse(ParseError::InvalidStatusCode)
    );
}

#[test]
fn test_response_without_headers() {
    let response = Response::parse(b"HTTP/1.1 204 No Content\r\n\r\n").unwrap();
    assert_eq!(response.status_code(), 204);
    assert_eq!(response.reason_phrase(), "No");
    assert!(response.headers().is_empty());
    assert_eq!(response.text(), "");
}

#[test]
fn test_body_starts_after_first_boundary() {
    let response = Response::parse(b"HTTP/1.0 200 OK\r\nA: 1\r\n\r\nline1\r\n\r\nline2").unwrap();
    assert_eq!(response.text(), "line1\r\n\r\nline2");
    assert_eq!(response.header("A"), Some("1"));
}

#[test]
fn test_header_values_lose_inner_whitespace() {
    let raw = concat!(
        "HTTP/1.1 200 OK\r\n",
        "Content-Type: text/plain; charset=utf-8\r\n",
        "Server:  tiny  collector \r\n",
        "\r\n"
    );
    let response = Response::parse(raw.as_bytes()).unwrap();
    let content_type = response.header("Content-Type");
    assert_eq!(content_type, Some("text/plain;charset=utf-8"));
    assert_eq!(response.header("Server"), Some("tinycollector"));
}

#[test]
fn test_header_order_is_preserved() {
    let raw = b"HTTP/1.1 200 OK\r\nB: 2\r\nA: 1\r\nC: 3\r\n\r\n";
    let response = Response::parse(raw).unwrap();
    let names: Vec<&str> = response.headers().keys().map(|k| k.as_str()).collect();
    assert_eq!(names, ["B", "A", "C"]);
}

#[test]
fn test_invalid_utf8_body() {
    let result = Response::parse(b"HTTP/1.1 200 OK\r\n\r\n\xff\xfe");
    assert_eq!(
        result.unwrap_err(),
        Error::Parse(ParseError::InvalidEncoding)
    );
}

#[test]
fn test_body_larger_than_text_capacity() {
    let mut raw = b"HTTP/1.1 200 OK\r\n\r\n".to_vec();
    raw.extend(std::iter::repeat_n(b'a', MAX_TEXT_LEN + 1));
    assert_eq!(Response::parse(&raw).unwrap_err(), Error::BufferOverflow);
}

#[test]
fn test_body_at_text_capacity() {
    let mut raw = b"HTTP/1.1 200 OK\r\n\r\n".to_vec();
    raw.extend(std::iter::repeat_n(b'a', MAX_TEXT_LEN));
    assert_eq!(Response::parse(&raw).unwrap().text().len(), MAX_TEXT_LEN);
}
