//! # wxnode - weather station firmware library
//!
//! A Rust library for embedded weather stations that measure the environment
//! and report their readings to a remote collector over plain HTTP. The device
//! has no general-purpose network stack, so the crate carries its own minimal
//! HTTP/1.1 client that runs over any blocking stream transport.
//!
//! ## Features
//!
//! ### Network
//! - **Transport traits**: [`Connect`](network::Connect) and
//!   [`Connection`](network::Connection) for any blocking stream socket
//! - **HTTP Client**: GET and POST with JSON or form-encoded bodies,
//!   fixed-size buffers, one connection per request
//!
//! ### Station
//! - Measure, report, deep-sleep loop with retry on failure
//! - Hardware reached through the [`Sensor`](station::Sensor),
//!   [`Wlan`](station::Wlan) and [`Sleep`](station::Sleep) traits
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wxnode = "0.1.0"
//! ```
//!
//! ### Basic HTTP Client Example
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
//! let mut client = Client::new(MockNetwork);
//! let response = client.get("http://example.com/status", &[("id", "7")], &[], DEFAULT_TIMEOUT);
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, Xtensa)
//! - Linux-based devices through the `std` feature
//!
//! ## Optional Features
//!
//! - `std`: TCP transport over `std::net` and the [`get`](network::application::http::get) /
//!   [`post`](network::application::http::post) helpers
//! - `defmt`: `defmt` logging and `defmt::Format` for all error types

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

// Must come first so the logging macros are visible to every module.
mod fmt;

/// Network abstraction layer and protocol implementations.
///
/// Transport traits, their common error type and the HTTP client built on
/// top of them.
pub mod network;

/// The weather station measure-and-report loop.
pub mod station;
