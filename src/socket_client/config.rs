//! Connection parameters for [`SocketClient`](super::SocketClient).

use std::{fmt, io, time::Duration};

use native_tls::TlsConnector;

/// Default timeout applied when establishing connections.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default timeout applied to individual reads and writes.
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Stream scheme used to reach the remote endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    #[default]
    Tcp,
    Tls,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Tls => "tls",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheme, host, and port of a remote endpoint.
///
/// Attached to every [`SocketError`](super::SocketError) so failures name
/// the endpoint they concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// TLS verification options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TlsOptions {
    /// Domain name presented during the TLS handshake.
    pub domain: String,
    /// Validate the peer's certificate chain and hostname.
    pub verify_peer: bool,
    /// Accept certificates that do not chain to a trusted root.
    pub allow_self_signed: bool,
}

impl TlsOptions {
    /// Options for `domain` with full verification.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            verify_peer: true,
            allow_self_signed: false,
        }
    }

    pub(super) fn connector(&self) -> io::Result<TlsConnector> {
        let mut builder = TlsConnector::builder();
        if !self.verify_peer {
            builder.danger_accept_invalid_certs(true);
            builder.danger_accept_invalid_hostnames(true);
        } else if self.allow_self_signed {
            builder.danger_accept_invalid_certs(true);
        }
        builder.build().map_err(io::Error::other)
    }
}

/// Everything a [`SocketClient`](super::SocketClient) needs to connect.
#[derive(Clone, Debug)]
pub struct SocketClientConfig {
    pub host: String,
    pub port: u16,
    /// Present iff the scheme is [`Scheme::Tls`].
    pub tls: Option<TlsOptions>,
    pub connect_timeout: Duration,
    pub io_timeout: Duration,
}

impl SocketClientConfig {
    /// Plain TCP to `host:port` with default timeouts.
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            tls: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }

    /// TLS to `host:port` using `options`.
    pub fn tls(host: impl Into<String>, port: u16, options: TlsOptions) -> Self {
        Self {
            tls: Some(options),
            ..Self::tcp(host, port)
        }
    }

    /// Replace the TLS options; `None` selects plain TCP.
    pub fn with_tls(mut self, tls: Option<TlsOptions>) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, io_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.io_timeout = io_timeout;
        self
    }

    pub fn scheme(&self) -> Scheme {
        if self.tls.is_some() {
            Scheme::Tls
        } else {
            Scheme::Tcp
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            scheme: self.scheme(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}
