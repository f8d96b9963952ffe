use core::fmt;

/// Errors that may arise while operating on a queue.
///
/// The write-side variants give the rejected element back to the caller so
/// that ownership is never silently lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<E> {
  /// The queue is at capacity and cannot accept the element.
  Full(E),
  /// The queue has been closed and rejects the element.
  Closed(E),
  /// The queue has been closed and fully drained; no further elements will
  /// ever be produced.
  Disconnected,
}

impl<E> QueueError<E> {
  /// Recovers the rejected element, when the error carries one.
  pub fn into_inner(self) -> Option<E> {
    match self {
      | QueueError::Full(element) | QueueError::Closed(element) => Some(element),
      | QueueError::Disconnected => None,
    }
  }
}

impl<E> fmt::Display for QueueError<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueError::Full(_) => f.write_str("queue is full"),
      | QueueError::Closed(_) => f.write_str("queue is closed"),
      | QueueError::Disconnected => f.write_str("queue is disconnected"),
    }
  }
}

impl<E: fmt::Debug> std::error::Error for QueueError<E> {}
