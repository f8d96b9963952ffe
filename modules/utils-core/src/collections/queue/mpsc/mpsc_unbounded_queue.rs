use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use crossbeam_queue::SegQueue;

use crate::collections::queue::{QueueBase, QueueError, QueueRw, QueueSize};
use crate::collections::Element;
use crate::sync::ArcShared;


/// Unbounded multi-producer, single-consumer FIFO queue.
///
/// A clonable handle over a lock-free segment queue. Any number of
/// producers may [`offer`](QueueRw::offer) concurrently; the underlying
/// queue is MPMC, so the single-consumer discipline is a convention imposed
/// by whoever calls [`poll`](QueueRw::poll).
///
/// Once [`clean_up`](QueueRw::clean_up) has run, offers are rejected with
/// [`QueueError::Closed`] and polls report [`QueueError::Disconnected`].
pub struct MpscUnboundedQueue<E> {
  inner: ArcShared<MpscUnboundedCore<E>>,
}

struct MpscUnboundedCore<E> {
  queue:  SegQueue<E>,
  closed: AtomicBool,
}

impl<E> MpscUnboundedQueue<E>
where
  E: Element,
{
  /// Creates an empty queue.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: ArcShared::new(MpscUnboundedCore { queue: SegQueue::new(), closed: AtomicBool::new(false) }) }
  }

  /// Returns true once the queue has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.inner.closed.load(Ordering::Acquire)
  }
}

impl<E> Clone for MpscUnboundedQueue<E> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<E> fmt::Debug for MpscUnboundedQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MpscUnboundedQueue").field("len", &self.inner.queue.len()).finish()
  }
}

impl<E> Default for MpscUnboundedQueue<E>
where
  E: Element,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> QueueBase<E> for MpscUnboundedQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.inner.queue.len())
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E: Element> QueueRw<E> for MpscUnboundedQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    if self.is_closed() {
      return Err(QueueError::Closed(element));
    }
    self.inner.queue.push(element);
    Ok(())
  }

  fn poll(&self) -> Result<Option<E>, QueueError<E>> {
    match self.inner.queue.pop() {
      | Some(element) => Ok(Some(element)),
      | None if self.is_closed() => Err(QueueError::Disconnected),
      | None => Ok(None),
    }
  }

  fn clean_up(&self) {
    self.inner.closed.store(true, Ordering::Release);
    while self.inner.queue.pop().is_some() {}
  }
}
