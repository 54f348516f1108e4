//! Gzip wrapping for compressed payloads.

use std::io::{self, Write};

use flate2::{Compression, write::GzEncoder};

/// Balanced speed/ratio level used by [`MessageEncoder::compressed`](super::MessageEncoder::compressed).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Gzip `payload` at `level`, clamped to the 0-9 range flate2 accepts.
pub(super) fn compress(payload: &[u8], level: u32) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(
        Vec::with_capacity(payload.len() / 2 + 32),
        Compression::new(level.min(9)),
    );
    encoder.write_all(payload)?;
    encoder.finish()
}
