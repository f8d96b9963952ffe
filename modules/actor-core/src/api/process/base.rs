use axon_utils_core_rs::ArcShared;

use crate::api::messaging::{MessageEnvelope, SystemMessage};
use crate::api::process::Pid;

/// Addressable endpoint a PID resolves to.
pub trait Process: Send + Sync {
  /// Posts a user envelope toward the process.
  fn send_user_message(&self, pid: &Pid, message: MessageEnvelope);

  /// Posts a system envelope toward the process.
  fn send_system_message(&self, pid: &Pid, message: MessageEnvelope);

  /// Requests a cooperative stop by posting the `Stop` signal.
  fn stop(&self, pid: &Pid) {
    self.send_system_message(pid, MessageEnvelope::system(SystemMessage::Stop));
  }

  /// Returns true once the process no longer accepts delivery. PIDs use
  /// this to invalidate their cached resolution.
  fn is_dead(&self) -> bool {
    false
  }
}

/// Shared handle to a [`Process`].
pub type ProcessHandle = ArcShared<dyn Process>;
