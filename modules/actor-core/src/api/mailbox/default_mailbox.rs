use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use axon_utils_core_rs::{ArcShared, QueueRw};
use spin::RwLock;

use crate::api::dispatch::{Dispatcher, DispatcherHandle};
use crate::api::mailbox::traits::{
  Mailbox, MailboxHandle, MailboxQueue, MailboxStatistics, MailboxStatisticsHandle, MessageInvoker,
  MessageInvokerHandle,
};
use crate::api::mailbox::UnboundedMailboxQueue;
use crate::api::messaging::{MessageEnvelope, SystemMessage};

#[cfg(test)]
mod tests;

/// Scheduling state of a mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailboxStatus {
  /// No drain pass is running or enqueued.
  Idle,
  /// Exactly one drain pass is running or enqueued on the dispatcher.
  Busy,
}

const STATUS_IDLE: u8 = 0;
const STATUS_BUSY: u8 = 1;

/// Two-queue mailbox with an atomic idle/busy latch.
///
/// A clonable handle over shared state. System envelopes preempt user
/// envelopes at the granularity of one drain iteration; a drain pass
/// delivers at most `dispatcher.throughput()` envelopes and yields by
/// rescheduling when work remains. The Idle→Busy compare-and-swap is the
/// sole admission gate, so at most one drain runnable exists per mailbox at
/// any time.
#[derive(Clone)]
pub struct DefaultMailbox {
  core: ArcShared<MailboxCore>,
}

struct MailboxCore {
  system_messages: Box<dyn MailboxQueue>,
  user_messages:   Box<dyn MailboxQueue>,
  handlers:        RwLock<Option<MailboxHandlers>>,
  status:          AtomicU8,
  // Written only from within the drain pass; external suspension goes
  // through the system queue.
  suspended:       AtomicBool,
  statistics:      Vec<MailboxStatisticsHandle>,
}

#[derive(Clone)]
struct MailboxHandlers {
  invoker:    MessageInvokerHandle,
  dispatcher: DispatcherHandle,
}

impl DefaultMailbox {
  /// Creates a mailbox over the provided lanes and statistics observers.
  #[must_use]
  pub fn new(
    system_messages: Box<dyn MailboxQueue>,
    user_messages: Box<dyn MailboxQueue>,
    statistics: Vec<MailboxStatisticsHandle>,
  ) -> Self {
    Self {
      core: ArcShared::new(MailboxCore {
        system_messages,
        user_messages,
        handlers: RwLock::new(None),
        status: AtomicU8::new(STATUS_IDLE),
        suspended: AtomicBool::new(false),
        statistics,
      }),
    }
  }

  /// Creates a mailbox with two unbounded lanes and no observers.
  #[must_use]
  pub fn unbounded() -> Self {
    Self::unbounded_with_statistics(Vec::new())
  }

  /// Creates a mailbox with two unbounded lanes and the given observers.
  #[must_use]
  pub fn unbounded_with_statistics(statistics: Vec<MailboxStatisticsHandle>) -> Self {
    Self::new(Box::new(UnboundedMailboxQueue::new()), Box::new(UnboundedMailboxQueue::new()), statistics)
  }

  /// Wraps the mailbox in a shared handle.
  #[must_use]
  pub fn into_handle(self) -> MailboxHandle {
    ArcShared::from_arc(Arc::new(self))
  }

  /// Current scheduling state.
  #[must_use]
  pub fn status(&self) -> MailboxStatus {
    if self.core.status.load(Ordering::Acquire) == STATUS_BUSY {
      MailboxStatus::Busy
    } else {
      MailboxStatus::Idle
    }
  }

  /// Returns true while user message processing is suspended.
  #[must_use]
  pub fn is_suspended(&self) -> bool {
    self.core.suspended.load(Ordering::Acquire)
  }

  fn handlers(&self) -> Option<MailboxHandlers> {
    (*self.core.handlers.read()).clone()
  }

  fn set_suspended(&self, suspended: bool) {
    self.core.suspended.store(suspended, Ordering::Release);
  }

  fn post_to(&self, queue: &dyn MailboxQueue, envelope: MessageEnvelope) {
    for statistics in &self.core.statistics {
      statistics.message_posted(&envelope);
    }
    if let Err(error) = queue.offer(envelope) {
      tracing::error!(error = %error, "dropping message posted to a closed mailbox queue");
      return;
    }
    self.schedule();
  }

  /// The sole admission gate: flip Idle→Busy, then hand the drain to the
  /// dispatcher. Posters that observe Busy push freely without scheduling;
  /// the running drain picks their envelopes up, or the post-drain re-check
  /// does.
  fn schedule(&self) {
    let Some(handlers) = self.handlers() else {
      return;
    };
    if self.core.status.compare_exchange(STATUS_IDLE, STATUS_BUSY, Ordering::AcqRel, Ordering::Acquire).is_ok() {
      let mailbox = self.clone();
      handlers.dispatcher.schedule(Box::new(move || mailbox.run()));
    }
  }

  fn run(&self) {
    self.process_messages();
    self.core.status.store(STATUS_IDLE, Ordering::Release);
    // Closes the race against a poster that saw Busy and skipped the
    // schedule: any envelope that landed before the store above is seen
    // here; any envelope that lands after it finds the latch Idle.
    if self.core.system_messages.has_messages() || (!self.is_suspended() && self.core.user_messages.has_messages()) {
      self.schedule();
    } else {
      for statistics in &self.core.statistics {
        statistics.mailbox_empty();
      }
    }
  }

  fn process_messages(&self) {
    let Some(handlers) = self.handlers() else {
      return;
    };
    let throughput = handlers.dispatcher.throughput().max(1);
    for _ in 0..throughput {
      if let Some(envelope) = self.pop_from(&*self.core.system_messages) {
        match envelope.system_message() {
          | Some(SystemMessage::Suspend) => self.set_suspended(true),
          | Some(SystemMessage::Resume) => self.set_suspended(false),
          | _ => {},
        }
        if let Err(failure) = handlers.invoker.invoke_system_message(&envelope) {
          handlers.invoker.escalate_failure(failure, Some(&envelope));
          return;
        }
        self.notify_received(&envelope);
        continue;
      }
      if self.is_suspended() {
        break;
      }
      match self.pop_from(&*self.core.user_messages) {
        | Some(envelope) => {
          if let Err(failure) = handlers.invoker.invoke_user_message(&envelope) {
            handlers.invoker.escalate_failure(failure, Some(&envelope));
            return;
          }
          self.notify_received(&envelope);
        },
        | None => break,
      }
    }
  }

  fn pop_from(&self, queue: &dyn MailboxQueue) -> Option<MessageEnvelope> {
    match queue.poll() {
      | Ok(envelope) => envelope,
      | Err(error) => {
        tracing::error!(error = %error, "mailbox queue poll failed");
        None
      },
    }
  }

  fn notify_received(&self, envelope: &MessageEnvelope) {
    for statistics in &self.core.statistics {
      statistics.message_received(envelope);
    }
  }
}

impl Mailbox for DefaultMailbox {
  fn post_user_message(&self, message: MessageEnvelope) {
    self.post_to(&*self.core.user_messages, message);
  }

  fn post_system_message(&self, message: MessageEnvelope) {
    self.post_to(&*self.core.system_messages, message);
  }

  fn register_handlers(&self, invoker: MessageInvokerHandle, dispatcher: DispatcherHandle) {
    *self.core.handlers.write() = Some(MailboxHandlers { invoker, dispatcher });
  }

  fn start(&self) {
    for statistics in &self.core.statistics {
      statistics.mailbox_started();
    }
  }
}
