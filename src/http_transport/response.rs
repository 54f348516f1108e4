//! Status-line validation for strict mode.

use crate::{socket_client::SocketClient, transport::TransportError};

/// Status line a collector sends after accepting a message.
pub const EXPECTED_STATUS_LINE: &str = "HTTP/1.1 202 Accepted";

/// Smallest read bound that still fits the expected status line and its CRLF.
pub const MIN_RESPONSE_HEAD: usize = EXPECTED_STATUS_LINE.len() + 2;

/// Longest excerpt of an unexpected response quoted in errors.
const MAX_QUOTED: usize = 120;

const READ_CHUNK: usize = 512;

/// Read until the end of the status line, EOF, or `limit` bytes.
pub(super) fn read_status_line(
    client: &mut SocketClient,
    limit: usize,
) -> Result<Vec<u8>, TransportError> {
    let mut head = Vec::new();
    while head.len() < limit && !contains_crlf(&head) {
        let want = READ_CHUNK.min(limit - head.len());
        let chunk = client.read(want)?;
        if chunk.is_empty() {
            break;
        }
        head.extend(chunk);
    }
    Ok(head)
}

/// Fail unless `head` begins with [`EXPECTED_STATUS_LINE`].
pub(super) fn check_status_line(head: &[u8]) -> Result<(), TransportError> {
    if head.starts_with(EXPECTED_STATUS_LINE.as_bytes()) {
        return Ok(());
    }
    Err(TransportError::Protocol {
        expected: EXPECTED_STATUS_LINE.to_owned(),
        actual: excerpt(head),
    })
}

fn contains_crlf(buf: &[u8]) -> bool {
    buf.windows(2).any(|pair| pair == b"\r\n")
}

/// First line of `head`, trimmed and cut to [`MAX_QUOTED`] characters.
fn excerpt(head: &[u8]) -> String {
    let text = String::from_utf8_lossy(head);
    let line = text.lines().next().unwrap_or_default().trim();
    if line.chars().count() <= MAX_QUOTED {
        return line.to_owned();
    }
    let mut cut: String = line.chars().take(MAX_QUOTED).collect();
    cut.push_str("...");
    cut
}
