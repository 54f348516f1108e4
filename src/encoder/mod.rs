//! Encoding strategies that turn a [`Message`](crate::message::Message) into
//! a transmissible payload.
//!
//! Two strategies exist:
//!
//! - **JSON** (default): the message's field map as compact JSON text.
//! - **Compressed JSON**: the same text wrapped in a gzip stream. Carriers
//!   that speak HTTP announce it with `Content-Encoding: gzip`.
//!
//! Carriers decide wire metadata by asking the active [`MessageEncoder`]
//! whether it compresses, never by inspecting the payload.

mod gzip;
mod json;

use std::io;

use crate::message::Message;

pub use gzip::DEFAULT_COMPRESSION_LEVEL;

/// Encoding strategy attached to a carrier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageEncoder {
    /// Plain JSON text.
    #[default]
    Json,
    /// Gzip-compressed JSON text at the given level (0-9).
    CompressedJson { level: u32 },
}

impl MessageEncoder {
    /// Gzip-compressed JSON at [`DEFAULT_COMPRESSION_LEVEL`].
    pub fn compressed() -> Self {
        Self::CompressedJson {
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Serialise `message` into bytes ready for the wire.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying serialiser or compressor
    /// fails, which does not happen for in-memory buffers in practice.
    pub fn encode(&self, message: &dyn Message) -> io::Result<Vec<u8>> {
        let json = json::encode_json(message)?;
        match self {
            Self::Json => Ok(json),
            Self::CompressedJson { level } => gzip::compress(&json, *level),
        }
    }

    /// Whether payloads produced by this encoder are compressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::CompressedJson { .. })
    }

    /// Value for the HTTP `Content-Encoding` header, if one is required.
    pub fn content_encoding(&self) -> Option<&'static str> {
        match self {
            Self::Json => None,
            Self::CompressedJson { .. } => Some("gzip"),
        }
    }
}
