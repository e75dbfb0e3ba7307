//! # Application Layer Network Protocols
//!
//! Protocol clients that run on top of any transport implementing
//! [`Connect`](crate::network::Connect).
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 subset client (GET and POST) for reporting to web collectors
//!
//! ## Design Principles
//!
//! - **Connection Agnostic**: Work with any [`Connection`](crate::network::Connection)
//! - **No-std Compatible**: Designed for embedded systems without heap allocation
//! - **Resource Conscious**: Use fixed-size buffers and minimal memory
//! - **Error Handling**: Typed errors for every stage, no panics on bad input

/// HTTP client implementation.
///
/// Provides a minimal HTTP/1.1 client suitable for embedded systems,
/// supporting GET and POST with JSON or form-encoded bodies.
pub mod http;
