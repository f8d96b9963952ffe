use core::fmt;
use std::borrow::Cow;

/// Failure raised by user actor code and carried to the escalation sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorFailure {
  message: Cow<'static, str>,
}

impl ActorFailure {
  /// Creates a failure from a message.
  #[must_use]
  pub fn from_message(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into() }
  }

  /// Creates a failure from any error implementing [`fmt::Display`].
  #[must_use]
  pub fn from_error<E>(error: E) -> Self
  where
    E: fmt::Display, {
    Self { message: Cow::Owned(error.to_string()) }
  }

  /// Human-readable description, intended for logs.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for ActorFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

impl std::error::Error for ActorFailure {}
