//! The TCP carrier and its configuration.

use std::time::Duration;

use log::debug;

use crate::{
    encoder::MessageEncoder,
    http_transport::{DEFAULT_HOST, SslMode},
    message::Message,
    socket_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_IO_TIMEOUT, SocketClient, SocketClientConfig},
    transport::{
        ConfigError, EncoderSlot, Transport, TransportError,
        validate::{ensure_positive, validate_host, validate_port},
    },
};

/// Default GELF TCP input port.
pub const DEFAULT_TCP_PORT: u16 = 12201;

const FRAME_TERMINATOR: u8 = 0;

/// Configuration of a [`TcpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TcpTransportConfig {
    pub host: String,
    pub port: u16,
    pub ssl_mode: SslMode,
    pub connect_timeout: Duration,
    pub io_timeout: Duration,
}

impl Default for TcpTransportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_TCP_PORT,
            ssl_mode: SslMode::NONE,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }
}

impl TcpTransportConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
        self.ssl_mode = ssl_mode;
        self
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, io_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.io_timeout = io_timeout;
        self
    }

    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_host(&self.host)?;
        validate_port(u32::from(self.port))?;
        ensure_positive(self.connect_timeout, "connect_timeout")?;
        ensure_positive(self.io_timeout, "io_timeout")
    }

    fn socket_config(&self) -> SocketClientConfig {
        SocketClientConfig::tcp(self.host.clone(), self.port)
            .with_tls(self.ssl_mode.tls_options(&self.host))
            .with_timeouts(self.connect_timeout, self.io_timeout)
    }
}

/// Delivers NUL-terminated GELF JSON over a persistent TCP or TLS stream.
#[derive(Debug)]
pub struct TcpTransport {
    encoder: EncoderSlot,
    client: SocketClient,
}

impl TcpTransport {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: TcpTransportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            encoder: EncoderSlot::default(),
            client: SocketClient::new(config.socket_config()),
        })
    }

    pub fn socket_client(&self) -> &SocketClient {
        &self.client
    }

    /// Close the current connection; the next send reconnects.
    pub fn disconnect(&mut self) {
        self.client.close();
    }
}

impl Transport for TcpTransport {
    fn set_message_encoder(&mut self, encoder: MessageEncoder) -> Result<(), TransportError> {
        if encoder.is_compressed() {
            return Err(ConfigError::CompressionUnsupported {
                transport: "TcpTransport",
            }
            .into());
        }
        self.encoder.set(encoder);
        Ok(())
    }

    fn message_encoder(&mut self) -> &MessageEncoder {
        self.encoder.get_or_default()
    }

    fn send(&mut self, message: &dyn Message) -> Result<usize, TransportError> {
        let mut frame = self
            .encoder
            .get_or_default()
            .encode(message)
            .map_err(TransportError::Encode)?;
        frame.push(FRAME_TERMINATOR);
        let written = self.client.write(&frame)?;
        debug!("TcpTransport sent {written} bytes to {}", self.client.endpoint());
        Ok(written)
    }
}
