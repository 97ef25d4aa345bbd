use crate::collections::queue::{queue_error::QueueError, traits::queue_base::QueueBase};

/// Trait providing write operations to the queue.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Adds an element, treating a full queue as a programming error.
  ///
  /// Implementations with a bounded capacity panic when no slot is free; unbounded ones never do.
  fn enqueue(&mut self, element: E);

  /// Adds an element, handing it back when the queue has no room for it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying `element` when the queue is at capacity.
  fn try_enqueue(&mut self, element: E) -> Result<(), QueueError<E>>;

  /// Adds every element of `elements` in iteration order via [`QueueWriter::enqueue`].
  fn enqueue_all<I>(&mut self, elements: I)
  where
    I: IntoIterator<Item = E>,
    Self: Sized, {
    for element in elements {
      self.enqueue(element);
    }
  }

  /// Adds elements in iteration order via [`QueueWriter::try_enqueue`], stopping at the first
  /// rejection.
  ///
  /// Elements accepted before the rejection stay queued. Elements after it are not pulled from the
  /// iterator.
  ///
  /// # Errors
  ///
  /// Returns the first [`QueueError::Full`] encountered, carrying the rejected element.
  fn try_enqueue_all<I>(&mut self, elements: I) -> Result<(), QueueError<E>>
  where
    I: IntoIterator<Item = E>,
    Self: Sized, {
    for element in elements {
      self.try_enqueue(element)?;
    }
    Ok(())
  }
}
