//! Error taxonomy for carriers.

use std::io;

use thiserror::Error;

use crate::socket_client::SocketError;

/// Invalid carrier configuration, detected before any socket is opened.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("host must not be empty")]
    EmptyHost,
    #[error("port {0} is outside the range 1-65535")]
    PortOutOfRange(u32),
    #[error("path must not be empty")]
    EmptyPath,
    #[error("path {0:?} must start with '/'")]
    RelativePath(String),
    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),
    #[error("{field} must be at least {min}")]
    TooSmall { field: &'static str, min: usize },
    #[error("{transport} cannot carry compressed payloads")]
    CompressionUnsupported { transport: &'static str },
}

/// Failure delivering a message.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Connection(#[from] SocketError),
    /// The collector answered with something other than the expected status.
    #[error("collector didn't answer properly, expected '{expected}' got '{actual}'")]
    Protocol { expected: String, actual: String },
    #[error("failed to encode message: {0}")]
    Encode(#[source] io::Error),
}
