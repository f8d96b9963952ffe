//! Pluggable contracts of the mailbox engine.

use axon_utils_core_rs::{ArcShared, QueueRw};

use crate::api::actor::ActorFailure;
use crate::api::dispatch::DispatcherHandle;
use crate::api::messaging::MessageEnvelope;

/// Queue of envelopes feeding one mailbox lane.
///
/// Multiple producers may push concurrently; the mailbox drain is the sole
/// consumer. `has_messages` is advisory: it may false-negative while a
/// concurrent push is in flight, but never false-positives once the pushing
/// thread has observed its own push complete.
pub trait MailboxQueue: QueueRw<MessageEnvelope> + Send + Sync {
  /// Advisory non-empty check.
  fn has_messages(&self) -> bool {
    !self.is_empty()
  }
}

impl<Q> MailboxQueue for Q where Q: QueueRw<MessageEnvelope> + Send + Sync {}

/// Callback target bound to a mailbox; invokes actor code per envelope.
///
/// An `Err` return is the failure path the drain catches: the mailbox
/// forwards the failure and the in-flight envelope to `escalate_failure`
/// and ends the current pass.
pub trait MessageInvoker: Send + Sync {
  /// Interprets a system signal.
  ///
  /// # Errors
  ///
  /// Returns the failure raised by user code reached through the signal.
  fn invoke_system_message(&self, message: &MessageEnvelope) -> Result<(), ActorFailure>;

  /// Runs the user receive behavior for one envelope.
  ///
  /// # Errors
  ///
  /// Returns the failure raised by the user receive.
  fn invoke_user_message(&self, message: &MessageEnvelope) -> Result<(), ActorFailure>;

  /// Reports a failure raised while invoking; the envelope is the message
  /// that was in flight, when one was.
  fn escalate_failure(&self, reason: ActorFailure, message: Option<&MessageEnvelope>);
}

/// Shared handle to a [`MessageInvoker`].
pub type MessageInvokerHandle = ArcShared<dyn MessageInvoker>;

/// Observer of mailbox lifecycle events.
///
/// Observers are invoked synchronously during post, receive, and
/// empty-transition; they must be fast and must not panic. Heavy reporting
/// belongs in a separate collector fed from an observer.
pub trait MailboxStatistics: Send + Sync {
  /// The mailbox finished registration and is accepting work.
  fn mailbox_started(&self);

  /// An envelope was posted to either lane.
  fn message_posted(&self, message: &MessageEnvelope);

  /// An envelope was delivered to the invoker.
  fn message_received(&self, message: &MessageEnvelope);

  /// A drain pass ended with both lanes empty.
  fn mailbox_empty(&self);
}

/// Shared handle to a [`MailboxStatistics`] observer.
pub type MailboxStatisticsHandle = ArcShared<dyn MailboxStatistics>;

/// The queueing and scheduling substrate serializing delivery to one actor.
pub trait Mailbox: Send + Sync {
  /// Pushes to the user lane and schedules the mailbox.
  fn post_user_message(&self, message: MessageEnvelope);

  /// Pushes to the system lane and schedules the mailbox.
  fn post_system_message(&self, message: MessageEnvelope);

  /// Binds the invoker and dispatcher. Must happen before the first post;
  /// re-binding is not defined.
  fn register_handlers(&self, invoker: MessageInvokerHandle, dispatcher: DispatcherHandle);

  /// Notifies statistics observers that the mailbox started.
  fn start(&self);
}

/// Shared handle to a [`Mailbox`].
pub type MailboxHandle = ArcShared<dyn Mailbox>;
