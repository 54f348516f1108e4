//! The carrier contract shared by every transport.
//!
//! A [`Transport`] owns an encoding strategy and delivers messages
//! end to end. [`Publisher`] is the narrower "accepts messages" capability;
//! every transport is a publisher through the blanket implementation, where
//! `publish` is `send`.

mod error;
pub(crate) mod validate;

pub use error::{ConfigError, TransportError};

use crate::{encoder::MessageEncoder, message::Message};

/// A delivery mechanism for encoded messages.
pub trait Transport {
    /// Attach the encoding strategy used by subsequent sends.
    ///
    /// # Errors
    ///
    /// Carriers that cannot represent a strategy on the wire reject it with
    /// [`TransportError::Config`].
    fn set_message_encoder(&mut self, encoder: MessageEncoder) -> Result<(), TransportError>;

    /// Active encoding strategy, defaulting to [`MessageEncoder::Json`] when
    /// none was ever set.
    fn message_encoder(&mut self) -> &MessageEncoder;

    /// Deliver `message`, returning the number of bytes transmitted.
    ///
    /// # Errors
    ///
    /// Every failure is reported; nothing is retried or swallowed.
    fn send(&mut self, message: &dyn Message) -> Result<usize, TransportError>;
}

/// Anything that can accept a message for delivery.
pub trait Publisher {
    fn publish(&mut self, message: &dyn Message) -> Result<usize, TransportError>;
}

impl<T: Transport + ?Sized> Publisher for T {
    fn publish(&mut self, message: &dyn Message) -> Result<usize, TransportError> {
        self.send(message)
    }
}

/// Encoder storage with an explicit "never set" state.
///
/// The default strategy is only materialised on first read.
#[derive(Clone, Debug, Default)]
pub struct EncoderSlot {
    encoder: Option<MessageEncoder>,
}

impl EncoderSlot {
    pub fn set(&mut self, encoder: MessageEncoder) {
        self.encoder = Some(encoder);
    }

    pub fn get_or_default(&mut self) -> &MessageEncoder {
        self.encoder.get_or_insert_with(MessageEncoder::default)
    }

    pub fn is_set(&self) -> bool {
        self.encoder.is_some()
    }
}
