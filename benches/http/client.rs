use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, Throughput};
use wxnode::network::application::http::{Client, DEFAULT_TIMEOUT, Request, Response, Url};
use wxnode::network::error::Error;
use wxnode::network::{Close, Connect, Connection, Read, Write};
use wxnode::station::Reading;

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Type: application/json\r\n\
Content-Length: 17\r\n\
Server: collector\r\n\
\r\n\
{\"status\":\"ok\"}\n";

/// Connection that swallows writes and replays a canned response.
struct Loopback {
    pos: usize,
}

impl Read for Loopback {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = (RESPONSE.len() - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&RESPONSE[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for Loopback {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for Loopback {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for Loopback {}

struct LoopbackNetwork;

impl Connect for LoopbackNetwork {
    type Connection = Loopback;
    type Error = Error;

    fn connect(&mut self, _host: &str, _port: u16, _timeout: Duration) -> Result<Loopback, Error> {
        Ok(Loopback { pos: 0 })
    }
}

fn reading() -> Reading {
    Reading::from_samples(21.5, 40.0, 1013.25, 312, -87)
}

pub fn bench_build_request(c: &mut Criterion) {
    let url = Url::parse("http://collector.local:5000/weather").unwrap();
    let reading = reading();
    let headers = [
        ("Content-Type", "application/json"),
        ("Connection", "close"),
    ];

    c.bench_function("http_build_json_post", |b| {
        b.iter(|| {
            let request = Request::post(url, &[], Some(&reading), &headers, DEFAULT_TIMEOUT);
            black_box(request.build().unwrap());
        })
    });
}

pub fn bench_parse_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("http_parse_response");
    group.throughput(Throughput::Bytes(RESPONSE.len() as u64));
    group.bench_function("small_json", |b| {
        b.iter(|| black_box(Response::parse(black_box(RESPONSE)).unwrap()))
    });
    group.finish();
}

pub fn bench_round_trip(c: &mut Criterion) {
    let mut client = Client::new(LoopbackNetwork);
    let reading = reading();

    c.bench_function("http_post_round_trip", |b| {
        b.iter(|| {
            let response = client
                .post(
                    "http://collector.local:5000/weather",
                    &[],
                    Some(&reading),
                    &[],
                    DEFAULT_TIMEOUT,
                )
                .unwrap();
            black_box(response.status_code());
        })
    });
}
