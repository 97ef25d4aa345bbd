use crate::collections::queue::{queue_error::QueueError, traits::queue_base::QueueBase};

/// Trait providing read operations from the queue.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes the next element from the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to remove.
  fn dequeue(&mut self) -> Result<E, QueueError<E>>;

  /// Returns the next element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to inspect.
  fn peek(&self) -> Result<&E, QueueError<E>>;
}
