//! The HTTP carrier.

use log::{debug, warn};

use crate::{
    encoder::MessageEncoder,
    message::Message,
    socket_client::SocketClient,
    transport::{ConfigError, EncoderSlot, Transport, TransportError},
};

use super::{
    config::{HttpTransportConfig, ResponseMode},
    request::HttpRequest,
    response::{check_status_line, read_status_line},
};

/// Delivers GELF messages to an HTTP collector.
///
/// The socket client is built on the first send and kept for the lifetime
/// of the transport; its connection is closed after every send.
#[derive(Debug)]
pub struct HttpTransport {
    config: HttpTransportConfig,
    encoder: EncoderSlot,
    client: Option<SocketClient>,
}

impl HttpTransport {
    /// Construct a transport from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid. Nothing
    /// touches the network here.
    pub fn new(config: HttpTransportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            encoder: EncoderSlot::default(),
            client: None,
        })
    }

    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// The socket client, if a send has created it.
    pub fn socket_client(&self) -> Option<&SocketClient> {
        self.client.as_ref()
    }

    /// Frame `message` exactly as [`send`](Transport::send) would write it.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Encode`] if the encoder fails.
    pub fn build_request(&mut self, message: &dyn Message) -> Result<HttpRequest, TransportError> {
        let encoder = *self.encoder.get_or_default();
        let body = encoder.encode(message).map_err(TransportError::Encode)?;
        Ok(HttpRequest::post(&self.config, &encoder, body))
    }

    fn client(&mut self) -> &mut SocketClient {
        let config = &self.config;
        self.client
            .get_or_insert_with(|| SocketClient::new(config.socket_config()))
    }

    fn exchange(&mut self, request: &[u8]) -> Result<usize, TransportError> {
        let response_mode = self.config.response_mode;
        let limit = self.config.max_response_head;
        let client = self.client();
        let written = client.write(request)?;
        if response_mode == ResponseMode::Strict {
            let head = read_status_line(client, limit)?;
            check_status_line(&head).inspect_err(|err| {
                warn!("HttpTransport rejected by {}: {err}", client.endpoint());
            })?;
        }
        Ok(written)
    }
}

impl Transport for HttpTransport {
    fn set_message_encoder(&mut self, encoder: MessageEncoder) -> Result<(), TransportError> {
        self.encoder.set(encoder);
        Ok(())
    }

    fn message_encoder(&mut self) -> &MessageEncoder {
        self.encoder.get_or_default()
    }

    fn send(&mut self, message: &dyn Message) -> Result<usize, TransportError> {
        let request = self.build_request(message)?.to_bytes();
        let result = self.exchange(&request);
        // `Connection: Close` means the collector hangs up after answering.
        if let Some(client) = self.client.as_mut() {
            client.close();
        }
        let written = result?;
        debug!(
            "HttpTransport sent {written} bytes to {}{}",
            self.config.host, self.config.path
        );
        Ok(written)
    }
}
