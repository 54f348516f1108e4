//! Errors raised by [`SocketClient`](super::SocketClient).

use std::io;

use thiserror::Error;

use super::config::Endpoint;

/// Failure talking to a remote endpoint.
#[derive(Debug, Error)]
pub enum SocketError {
    /// The connection (or TLS handshake) could not be established.
    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: Endpoint,
        #[source]
        source: io::Error,
    },
    /// A read or write on an established connection failed.
    #[error("i/o error on {endpoint}: {source}")]
    Io {
        endpoint: Endpoint,
        #[source]
        source: io::Error,
    },
    /// The peer stopped accepting bytes before the buffer was written.
    #[error("short write to {endpoint}: wrote {written} of {expected} bytes")]
    ShortWrite {
        endpoint: Endpoint,
        written: usize,
        expected: usize,
    },
    /// A read was attempted before any connection existed.
    #[error("no open connection to {endpoint}")]
    NotConnected { endpoint: Endpoint },
}

impl SocketError {
    pub fn endpoint(&self) -> &Endpoint {
        match self {
            Self::Connect { endpoint, .. }
            | Self::Io { endpoint, .. }
            | Self::ShortWrite { endpoint, .. }
            | Self::NotConnected { endpoint } => endpoint,
        }
    }
}
