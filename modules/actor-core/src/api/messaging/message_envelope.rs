use crate::api::messaging::{AnyMessage, AnyMessageValue, SystemMessage};


/// Element type of the mailbox queues: either a user payload or a system
/// signal.
///
/// Envelopes are owned by whichever queue holds them; popping transfers
/// ownership to the drain, which clones the envelope (sharing the payload)
/// while staging it on the actor context.
#[derive(Debug, Clone)]
pub enum MessageEnvelope {
  /// A user message payload.
  User(AnyMessage),
  /// A system signal.
  System(SystemMessage),
}

impl MessageEnvelope {
  /// Wraps a user payload.
  #[must_use]
  pub fn user<M>(message: M) -> Self
  where
    M: AnyMessageValue, {
    MessageEnvelope::User(AnyMessage::new(message))
  }

  /// Wraps a system signal.
  #[must_use]
  pub const fn system(message: SystemMessage) -> Self {
    MessageEnvelope::System(message)
  }

  /// Returns the system signal, when this is one.
  #[must_use]
  pub const fn system_message(&self) -> Option<SystemMessage> {
    match self {
      | MessageEnvelope::System(message) => Some(*message),
      | MessageEnvelope::User(_) => None,
    }
  }

  /// Returns true for system signals.
  #[must_use]
  pub const fn is_system(&self) -> bool {
    matches!(self, MessageEnvelope::System(_))
  }

  /// Borrows the user payload, when this is one.
  #[must_use]
  pub const fn user_message(&self) -> Option<&AnyMessage> {
    match self {
      | MessageEnvelope::User(message) => Some(message),
      | MessageEnvelope::System(_) => None,
    }
  }

  /// Borrows the user payload as `M`, when it is one.
  #[must_use]
  pub fn downcast_ref<M>(&self) -> Option<&M>
  where
    M: AnyMessageValue, {
    match self {
      | MessageEnvelope::User(message) => message.downcast_ref::<M>(),
      | MessageEnvelope::System(_) => None,
    }
  }
}
