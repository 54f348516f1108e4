//! JSON serialisation of message field maps.

use std::io;

use crate::message::Message;

/// Serialise the message's field map as compact JSON text.
pub(super) fn encode_json(message: &dyn Message) -> io::Result<Vec<u8>> {
    serde_json::to_vec(&message.to_fields()).map_err(io::Error::other)
}
