//! Configuration consumed by [`HttpTransport`](super::HttpTransport).
//!
//! [`HttpTransportBuilder`](super::HttpTransportBuilder) assembles these
//! values; [`HttpTransportConfig::validate`] enforces the invariants both
//! construction paths share.

use std::{fmt, ops, time::Duration};

use crate::{
    socket_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_IO_TIMEOUT, SocketClientConfig, TlsOptions},
    transport::{
        ConfigError,
        validate::{ensure_positive, validate_host, validate_path, validate_port},
    },
};

use super::response::MIN_RESPONSE_HEAD;

/// Default collector host.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default GELF HTTP input port.
pub const DEFAULT_PORT: u16 = 12202;
/// Default request path.
pub const DEFAULT_PATH: &str = "/gelf";
/// Upper bound on bytes read while looking for the response status line.
pub const DEFAULT_MAX_RESPONSE_HEAD: usize = 8 * 1024;

/// TLS usage and verification flags.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SslMode(u8);

impl SslMode {
    /// Plain TCP.
    pub const NONE: Self = Self(0);
    /// Wrap the connection in TLS.
    pub const ENABLE: Self = Self(1);
    /// Skip certificate chain and hostname verification.
    pub const DISABLE_PEER_VERIFICATION: Self = Self(1 << 1);
    /// Accept certificates that do not chain to a trusted root.
    pub const ALLOW_SELF_SIGNED: Self = Self(1 << 2);

    const ALL: u8 = 0b111;

    /// Build a mode from raw bits, ignoring unknown flags.
    pub fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_tls(self) -> bool {
        self.contains(Self::ENABLE)
    }

    /// TLS options for `host`, or `None` when TLS is not enabled.
    pub fn tls_options(self, host: &str) -> Option<TlsOptions> {
        self.is_tls().then(|| TlsOptions {
            domain: host.to_owned(),
            verify_peer: !self.contains(Self::DISABLE_PEER_VERIFICATION),
            allow_self_signed: self.contains(Self::ALLOW_SELF_SIGNED),
        })
    }
}

impl ops::BitOr for SslMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for SslMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SslMode, &str); 3] = [
            (SslMode::ENABLE, "ENABLE"),
            (SslMode::DISABLE_PEER_VERIFICATION, "DISABLE_PEER_VERIFICATION"),
            (SslMode::ALLOW_SELF_SIGNED, "ALLOW_SELF_SIGNED"),
        ];
        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if set.is_empty() {
            f.write_str("SslMode(NONE)")
        } else {
            write!(f, "SslMode({})", set.join(" | "))
        }
    }
}

/// Whether a send waits for and checks the collector's response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// Succeed once the request is written.
    #[default]
    FireAndForget,
    /// Require an `HTTP/1.1 202 Accepted` status line.
    Strict,
}

/// Authentication attached to each request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthConfig {
    #[default]
    None,
    /// HTTP Basic authentication.
    Basic { username: String, password: String },
    /// Bearer token authentication.
    Bearer { token: String },
}

/// Validated configuration of an [`HttpTransport`](super::HttpTransport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransportConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub ssl_mode: SslMode,
    pub response_mode: ResponseMode,
    pub auth: AuthConfig,
    pub connect_timeout: Duration,
    pub io_timeout: Duration,
    /// Bytes read at most while looking for the status line in strict mode.
    pub max_response_head: usize,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.into(),
            ssl_mode: SslMode::NONE,
            response_mode: ResponseMode::default(),
            auth: AuthConfig::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            io_timeout: DEFAULT_IO_TIMEOUT,
            max_response_head: DEFAULT_MAX_RESPONSE_HEAD,
        }
    }
}

impl HttpTransportConfig {
    /// Check the invariants every transport relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_host(&self.host)?;
        validate_port(u32::from(self.port))?;
        validate_path(&self.path)?;
        ensure_positive(self.connect_timeout, "connect_timeout")?;
        ensure_positive(self.io_timeout, "io_timeout")?;
        validate_response_head(self.max_response_head)?;
        Ok(())
    }

    /// Socket parameters derived from this configuration.
    pub fn socket_config(&self) -> SocketClientConfig {
        SocketClientConfig::tcp(self.host.clone(), self.port)
            .with_tls(self.ssl_mode.tls_options(&self.host))
            .with_timeouts(self.connect_timeout, self.io_timeout)
    }
}

/// Reject read bounds too small to hold the expected status line.
pub(super) fn validate_response_head(limit: usize) -> Result<usize, ConfigError> {
    if limit < MIN_RESPONSE_HEAD {
        return Err(ConfigError::TooSmall {
            field: "max_response_head",
            min: MIN_RESPONSE_HEAD,
        });
    }
    Ok(limit)
}
