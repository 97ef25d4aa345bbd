use crate::collections::queue::queue_size::QueueSize;

/// Common trait defining basic queue operations.
pub trait QueueBase<E> {
  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Returns the number of elements the queue can hold at once.
  fn capacity(&self) -> QueueSize;

  /// Checks if the queue is empty.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Checks if the queue cannot accept another element.
  #[must_use]
  fn is_full(&self) -> bool {
    self.capacity().is_exhausted_by(self.len())
  }
}
