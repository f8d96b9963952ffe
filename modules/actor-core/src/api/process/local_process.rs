use core::sync::atomic::{AtomicBool, Ordering};

use crate::api::mailbox::{Mailbox, MailboxHandle};
use crate::api::messaging::{MessageEnvelope, SystemMessage};
use crate::api::process::{Pid, Process};


/// Process endpoint forwarding to a local mailbox.
///
/// `stop` posts the `Stop` signal and then marks the process dead; from
/// that point registry lookups resolve the PID to dead letters.
pub struct LocalProcess {
  mailbox: MailboxHandle,
  dead:    AtomicBool,
}

impl LocalProcess {
  /// Wraps a mailbox handle.
  #[must_use]
  pub fn new(mailbox: MailboxHandle) -> Self {
    Self { mailbox, dead: AtomicBool::new(false) }
  }

  /// The mailbox this process forwards to.
  #[must_use]
  pub fn mailbox(&self) -> &MailboxHandle {
    &self.mailbox
  }
}

impl Process for LocalProcess {
  fn send_user_message(&self, _pid: &Pid, message: MessageEnvelope) {
    self.mailbox.post_user_message(message);
  }

  fn send_system_message(&self, _pid: &Pid, message: MessageEnvelope) {
    self.mailbox.post_system_message(message);
  }

  fn stop(&self, pid: &Pid) {
    self.send_system_message(pid, MessageEnvelope::system(SystemMessage::Stop));
    self.dead.store(true, Ordering::Release);
  }

  fn is_dead(&self) -> bool {
    self.dead.load(Ordering::Acquire)
  }
}
