use crate::api::messaging::MessageEnvelope;
use crate::api::process::Pid;

/// Capability exposed to user code while a message is being received.
pub trait Context: Send + Sync {
  /// The envelope currently staged for this invocation. Non-empty only for
  /// the duration of a receive.
  fn message(&self) -> Option<MessageEnvelope>;

  /// PID of the spawning parent, when one was recorded. A value
  /// back-reference: resolve it on demand, it holds no process pointer.
  fn parent(&self) -> Option<&Pid>;
}
