//! HTTP/1.1 request framing.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};

use crate::encoder::MessageEncoder;

use super::config::{AuthConfig, HttpTransportConfig};

const CRLF: &str = "\r\n";

/// A single `POST` carrying one encoded message.
///
/// Built fresh for every send and discarded once written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    path: String,
    headers: Vec<(&'static str, String)>,
    body: Vec<u8>,
}

impl HttpRequest {
    /// Frame `body` for the collector described by `config`.
    ///
    /// `Content-Encoding` is only present when `encoder` compresses.
    pub fn post(config: &HttpTransportConfig, encoder: &MessageEncoder, body: Vec<u8>) -> Self {
        let mut headers = vec![
            ("Host", host_header(&config.host, config.port)),
            ("Content-Type", "application/json".to_owned()),
            ("Content-Length", body.len().to_string()),
            ("Connection", "Close".to_owned()),
            ("Accept", "*/*".to_owned()),
        ];
        if let Some(value) = authorization(&config.auth) {
            headers.push(("Authorization", value));
        }
        if let Some(encoding) = encoder.content_encoding() {
            headers.push(("Content-Encoding", encoding.to_owned()));
        }
        Self {
            path: config.path.clone(),
            headers,
            body,
        }
    }

    pub fn request_line(&self) -> String {
        format!("POST {} HTTP/1.1", self.path)
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Serialise to wire bytes: CRLF-terminated request line and headers,
    /// a blank line, then the body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = self.request_line();
        head.push_str(CRLF);
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str(CRLF);
        }
        head.push_str(CRLF);

        let mut bytes = Vec::with_capacity(head.len() + self.body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// `host:port`, with IPv6 literals bracketed.
fn host_header(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

fn authorization(auth: &AuthConfig) -> Option<String> {
    match auth {
        AuthConfig::None => None,
        AuthConfig::Basic { username, password } => {
            let credentials = format!("{username}:{password}");
            Some(format!("Basic {}", BASE64_STANDARD.encode(credentials)))
        }
        AuthConfig::Bearer { token } => Some(format!("Bearer {token}")),
    }
}
