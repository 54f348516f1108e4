//! Blocking carriers for GELF log records.
//!
//! A carrier takes a [`Message`], asks its [`MessageEncoder`] for bytes,
//! frames them for the wire, and writes them through a [`SocketClient`]
//! over plain TCP or TLS. Delivery is synchronous: [`Transport::send`]
//! returns once the frame is written (and, for a strict
//! [`HttpTransport`], once the collector's status line has been checked).
//!
//! ```no_run
//! use gelf_transport::{GelfLevel, GelfMessage, HttpTransportBuilder, Transport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut transport = HttpTransportBuilder::new()
//!     .with_host("graylog.internal")
//!     .with_port(12202)
//!     .build()?;
//! let message = GelfMessage::new("web-01", "disk full").with_level(GelfLevel::Error);
//! transport.send(&message)?;
//! # Ok(())
//! # }
//! ```

pub mod encoder;
pub mod http_transport;
pub mod level;
pub mod message;
pub mod socket_client;
pub mod tcp_transport;
pub mod transport;

pub use encoder::MessageEncoder;
pub use http_transport::{
    AuthConfig, HttpRequest, HttpTransport, HttpTransportBuilder, HttpTransportConfig,
    ResponseMode, SslMode,
};
pub use level::GelfLevel;
pub use message::{FieldMap, GelfMessage, Message};
pub use socket_client::{Scheme, SocketClient, SocketClientConfig, SocketError, TlsOptions};
pub use tcp_transport::{TcpTransport, TcpTransportConfig};
pub use transport::{ConfigError, EncoderSlot, Publisher, Transport, TransportError};
