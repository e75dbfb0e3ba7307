//! Tests against real sockets. Require the `std` feature.
#![cfg(feature = "std")]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use dotenvy::dotenv;
use serde::Serialize;
use wxnode::network::application::http::{self, Error};
use wxnode::network::error::Error as NetworkError;

#[derive(Serialize)]
struct Hello<'a> {
    hello: &'a str,
}

/// Accepts one connection, captures the request head, answers and closes.
fn serve_once(response: &'static [u8]) -> (u16, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 512];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response).unwrap();
        String::from_utf8(request).unwrap()
    });
    (port, handle)
}

#[test]
fn test_get_over_tcp() {
    let (port, server) = serve_once(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\npong");
    let url = format!("http://127.0.0.1:{port}/ping");

    let response = http::get(&url, &[("n", "1")], &[], Duration::from_secs(2)).unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "pong");
    let request = server.join().unwrap();
    let head = "GET /ping?n=1 HTTP/1.1\r\nHost: 127.0.0.1\r\n";
    assert!(request.starts_with(head));
}

#[test]
fn test_refused_connection() {
    // Bind and drop to find a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let url = format!("http://127.0.0.1:{port}/");

    let result = http::get(&url, &[], &[], Duration::from_millis(500));

    assert!(matches!(result, Err(Error::Connection(_))));
}

#[test]
fn test_exhausted_connect_deadline_is_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let url = format!("http://127.0.0.1:{port}/");

    let result = http::get(&url, &[], &[], Duration::ZERO);

    let expected = Error::Connection(NetworkError::Timeout);
    assert_eq!(result.unwrap_err(), expected);
}

#[test]
fn test_server_that_keeps_connection_open_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok")
            .unwrap();
        thread::sleep(Duration::from_millis(800));
    });
    let url = format!("http://127.0.0.1:{port}/");

    let result = http::get(&url, &[], &[], Duration::from_millis(200));

    assert_eq!(result.unwrap_err(), Error::Transport(NetworkError::Timeout));
    server.join().unwrap();
}

#[test]
#[ignore = "needs network access to TEST_HTTP_ADDRESS"]
fn test_http_post_live() {
    dotenv().ok();
    let address = std::env::var("TEST_HTTP_ADDRESS").unwrap_or("httpbin.org".to_string());
    let url = format!("http://{address}/post");
    let headers = [
        ("Content-Type", "application/json"),
        ("Connection", "close"),
    ];

    let response = http::post(
        &url,
        &[],
        Some(&Hello { hello: "world" }),
        &headers,
        Duration::from_secs(5),
    )
    .unwrap();

    assert_eq!(response.status_code(), 200);
}
