use axon_utils_core_rs::ArcShared;

use crate::api::actor::{ActorFailure, Context};

/// User-defined message-handling behavior.
///
/// `receive` is invoked once per delivered message, strictly serialized per
/// actor: the mailbox never runs two invocations of the same actor
/// concurrently. The staged message is read through
/// [`Context::message`](crate::api::actor::Context::message).
pub trait Actor: Send {
  /// Handles the message staged on the context.
  ///
  /// # Errors
  ///
  /// Returns a failure to have the mailbox escalate it; delivery of later
  /// messages continues either way.
  fn receive(&mut self, context: &dyn Context) -> Result<(), ActorFailure>;
}

/// Factory that incarnates a fresh actor behavior per context.
pub type ActorProducer = ArcShared<dyn Fn() -> Box<dyn Actor> + Send + Sync>;
