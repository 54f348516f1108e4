//! Builder for [`HttpTransport`](super::HttpTransport).
//!
//! Every field is optional; unset fields take the documented defaults from
//! [`HttpTransportConfig::default`]. Values are validated in [`build`]
//! before any socket exists.
//!
//! [`build`]: HttpTransportBuilder::build

use std::time::Duration;

use crate::transport::{
    ConfigError,
    validate::{validate_host, validate_path, validate_port},
};

use super::{
    config::{AuthConfig, HttpTransportConfig, ResponseMode, SslMode, validate_response_head},
    transport::HttpTransport,
};

macro_rules! option_setter {
    ($(#[$meta:meta])* $fn_name:ident, $field:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $fn_name(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

macro_rules! ensure_positive {
    ($value:expr, $field:expr) => {{
        if $value == 0 {
            Err(ConfigError::NonPositive($field))
        } else {
            Ok($value)
        }
    }};
}

/// Builder for constructing [`HttpTransport`] instances.
#[derive(Clone, Debug, Default)]
pub struct HttpTransportBuilder {
    host: Option<String>,
    port: Option<u32>,
    path: Option<String>,
    ssl_mode: Option<SslMode>,
    response_mode: Option<ResponseMode>,
    auth: Option<AuthConfig>,
    connect_timeout_ms: Option<u64>,
    io_timeout_ms: Option<u64>,
    max_response_head: Option<usize>,
}

impl HttpTransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collector host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the request path; must start with `/`.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Use HTTP Basic authentication.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(AuthConfig::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Use bearer token authentication.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthConfig::Bearer {
            token: token.into(),
        });
        self
    }

    option_setter!(
        #[doc = "Set the collector port (1-65535)."]
        with_port,
        port,
        u32
    );
    option_setter!(
        #[doc = "Set the TLS flags."]
        with_ssl_mode,
        ssl_mode,
        SslMode
    );
    option_setter!(
        #[doc = "Choose whether responses are checked."]
        with_response_mode,
        response_mode,
        ResponseMode
    );
    option_setter!(with_connect_timeout_ms, connect_timeout_ms, u64);
    option_setter!(with_io_timeout_ms, io_timeout_ms, u64);
    option_setter!(with_max_response_head, max_response_head, usize);

    /// Validate the collected fields and assemble a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid field.
    pub fn build_config(&self) -> Result<HttpTransportConfig, ConfigError> {
        let mut config = HttpTransportConfig::default();
        if let Some(host) = &self.host {
            validate_host(host)?;
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = validate_port(port)?;
        }
        if let Some(path) = &self.path {
            validate_path(path)?;
            config.path = path.clone();
        }
        if let Some(ssl_mode) = self.ssl_mode {
            config.ssl_mode = ssl_mode;
        }
        if let Some(response_mode) = self.response_mode {
            config.response_mode = response_mode;
        }
        if let Some(auth) = &self.auth {
            config.auth = auth.clone();
        }
        if let Some(timeout) = self.connect_timeout_ms {
            let timeout = ensure_positive!(timeout, "connect_timeout_ms")?;
            config.connect_timeout = Duration::from_millis(timeout);
        }
        if let Some(timeout) = self.io_timeout_ms {
            let timeout = ensure_positive!(timeout, "io_timeout_ms")?;
            config.io_timeout = Duration::from_millis(timeout);
        }
        if let Some(limit) = self.max_response_head {
            config.max_response_head = validate_response_head(limit)?;
        }
        Ok(config)
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid field; no
    /// connection is attempted either way.
    pub fn build(&self) -> Result<HttpTransport, ConfigError> {
        HttpTransport::new(self.build_config()?)
    }
}
