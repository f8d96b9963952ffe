use std::sync::Arc;

use axon_utils_core_rs::ArcShared;
use spin::Lazy;

use crate::api::messaging::MessageEnvelope;
use crate::api::process::{Pid, Process, ProcessHandle, ProcessRegistry};


/// Why a message could not be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadLetterReason {
  /// No process is registered under the PID's id.
  UnregisteredProcess,
  /// The process was registered but has been stopped.
  ProcessStopped,
}

/// A message that could not be delivered, kept for observers.
#[derive(Debug, Clone)]
pub struct DeadLetter {
  /// PID originally targeted by the message.
  pub pid:     Pid,
  /// The undeliverable envelope.
  pub message: MessageEnvelope,
  /// Recorded reason.
  pub reason:  DeadLetterReason,
}

impl DeadLetter {
  /// Creates a dead letter entry.
  #[must_use]
  pub const fn new(pid: Pid, message: MessageEnvelope, reason: DeadLetterReason) -> Self {
    Self { pid, message, reason }
  }
}

/// Listener invoked synchronously when a dead letter is published.
pub type DeadLetterListener = dyn Fn(&DeadLetter) + Send + Sync;

/// Fan-out of dead letters to interested observers.
pub struct DeadLetterHub {
  listeners: Vec<ArcShared<DeadLetterListener>>,
}

impl DeadLetterHub {
  /// Creates an empty hub.
  #[must_use]
  pub const fn new() -> Self {
    Self { listeners: Vec::new() }
  }

  /// Subscribes a listener to future dead letters.
  pub fn subscribe(&mut self, listener: ArcShared<DeadLetterListener>) {
    self.listeners.push(listener);
  }

  /// Publishes a dead letter to every listener.
  pub fn publish(&self, dead_letter: &DeadLetter) {
    for listener in &self.listeners {
      listener(dead_letter);
    }
  }

  /// Returns true when at least one listener is subscribed.
  #[must_use]
  pub fn has_listeners(&self) -> bool {
    !self.listeners.is_empty()
  }
}

impl Default for DeadLetterHub {
  fn default() -> Self {
    Self::new()
  }
}

static DEAD_LETTER_PROCESS: Lazy<ProcessHandle> = Lazy::new(|| ArcShared::from_arc(Arc::new(DeadLetterProcess)));

/// The sink for messages sent to unknown or stopped processes.
///
/// A process-wide singleton. Both message kinds are dropped after being
/// published to the registry's dead-letter hub; `stop` is ignored.
pub struct DeadLetterProcess;

impl DeadLetterProcess {
  /// The process-wide singleton handle.
  #[must_use]
  pub fn global() -> ProcessHandle {
    DEAD_LETTER_PROCESS.clone()
  }

  /// Publishes an undeliverable envelope to the hub and drops it.
  pub fn publish(pid: &Pid, message: MessageEnvelope, reason: DeadLetterReason) {
    tracing::debug!(pid = %pid, reason = ?reason, message = ?message, "message routed to dead letters");
    ProcessRegistry::global().publish_dead_letter(&DeadLetter::new(pid.clone(), message, reason));
  }
}

impl Process for DeadLetterProcess {
  fn send_user_message(&self, pid: &Pid, message: MessageEnvelope) {
    Self::publish(pid, message, DeadLetterReason::UnregisteredProcess);
  }

  fn send_system_message(&self, pid: &Pid, message: MessageEnvelope) {
    Self::publish(pid, message, DeadLetterReason::UnregisteredProcess);
  }

  fn stop(&self, _pid: &Pid) {}
}
