use axon_utils_core_rs::{MpscUnboundedQueue, QueueBase, QueueError, QueueRw, QueueSize};

use crate::api::messaging::MessageEnvelope;


/// Unbounded mailbox lane over the lock-free MPSC queue.
#[derive(Debug, Clone, Default)]
pub struct UnboundedMailboxQueue {
  queue: MpscUnboundedQueue<MessageEnvelope>,
}

impl UnboundedMailboxQueue {
  /// Creates an empty lane.
  #[must_use]
  pub fn new() -> Self {
    Self { queue: MpscUnboundedQueue::new() }
  }
}

impl QueueBase<MessageEnvelope> for UnboundedMailboxQueue {
  fn len(&self) -> QueueSize {
    self.queue.len()
  }

  fn capacity(&self) -> QueueSize {
    self.queue.capacity()
  }
}

impl QueueRw<MessageEnvelope> for UnboundedMailboxQueue {
  fn offer(&self, element: MessageEnvelope) -> Result<(), QueueError<MessageEnvelope>> {
    self.queue.offer(element)
  }

  fn poll(&self) -> Result<Option<MessageEnvelope>, QueueError<MessageEnvelope>> {
    self.queue.poll()
  }

  fn clean_up(&self) {
    self.queue.clean_up();
  }
}
