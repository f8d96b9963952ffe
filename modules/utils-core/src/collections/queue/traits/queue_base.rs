use crate::collections::queue::QueueSize;

/// Size inspection shared by every queue capability.
pub trait QueueBase<E> {
  /// Returns the number of elements currently queued.
  fn len(&self) -> QueueSize;

  /// Returns the capacity of the queue.
  fn capacity(&self) -> QueueSize;

  /// Returns true when no element is queued.
  fn is_empty(&self) -> bool {
    self.len().to_usize() == 0
  }
}
