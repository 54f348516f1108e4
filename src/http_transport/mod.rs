//! GELF over HTTP.
//!
//! This module defines [`HttpTransport`], a carrier that encodes a message,
//! frames it as an HTTP/1.1 `POST`, and writes it through a
//! [`SocketClient`](crate::socket_client::SocketClient) over plain TCP or
//! TLS. Every send uses a fresh connection (`Connection: Close`).
//!
//! # Response handling
//!
//! - **Fire-and-forget** (default): success means the request was written.
//! - **Strict**: the status line of the response must be
//!   `HTTP/1.1 202 Accepted`; anything else is a
//!   [`TransportError::Protocol`](crate::transport::TransportError::Protocol).
//!
//! # TLS
//!
//! [`SslMode`] is a bitmask. Only [`SslMode::ENABLE`] switches the scheme to
//! TLS; the verification flags merely relax checks once TLS is on.

mod builder;
mod config;
mod request;
mod response;
mod transport;


pub use builder::HttpTransportBuilder;
pub use config::{
    AuthConfig, DEFAULT_HOST, DEFAULT_MAX_RESPONSE_HEAD, DEFAULT_PATH, DEFAULT_PORT,
    HttpTransportConfig, ResponseMode, SslMode,
};
pub use request::HttpRequest;
pub use response::{EXPECTED_STATUS_LINE, MIN_RESPONSE_HEAD};
pub use transport::HttpTransport;
