use crate::collections::queue::{QueueBase, QueueError};

/// Read/write operations performed through a shared reference.
///
/// Implementations are free to be called from multiple threads; any
/// single-consumer discipline is imposed by the caller, not by this trait.
pub trait QueueRw<E>: QueueBase<E> {
  /// Adds an element to the tail of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] or [`QueueError::Closed`] with the
  /// rejected element.
  fn offer(&self, element: E) -> Result<(), QueueError<E>>;

  /// Removes the oldest element, if any.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Disconnected`] once a closed queue has been
  /// fully drained.
  fn poll(&self) -> Result<Option<E>, QueueError<E>>;

  /// Closes the queue and discards the remaining elements.
  fn clean_up(&self);
}
