//! GELF over TCP.
//!
//! Each message is written as its JSON text followed by a single NUL byte,
//! the framing GELF TCP inputs expect. Unlike the HTTP carrier the
//! connection stays open between sends; it is discarded after any I/O error
//! and re-established by the next send. GELF TCP has no way to declare
//! compression, so the compressed encoder is refused.

mod transport;


pub use transport::{DEFAULT_TCP_PORT, TcpTransport, TcpTransportConfig};
