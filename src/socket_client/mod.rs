//! Blocking stream client used by the carriers.
//!
//! This module defines [`SocketClient`], a protocol-agnostic byte pipe over
//! a single TCP or TLS-over-TCP connection. The connection is opened lazily
//! on first use, carries explicit connect and I/O timeouts, and is shut down
//! when the client is closed or dropped. The client knows nothing about
//! GELF or HTTP; carriers frame their own payloads.

mod client;
mod config;
mod connection;
mod error;

#[cfg(test)]
mod tests;

pub use client::SocketClient;
pub use config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_IO_TIMEOUT, Endpoint, Scheme, SocketClientConfig, TlsOptions,
};
pub use connection::ActiveConnection;
pub use error::SocketError;
