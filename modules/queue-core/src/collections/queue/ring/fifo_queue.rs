use alloc::{boxed::Box, vec::Vec};

use super::{CapacityError, DEFAULT_CAPACITY};
use crate::collections::queue::{
  queue_error::QueueError,
  queue_size::QueueSize,
  traits::{QueueBase, QueueReader, QueueWriter},
};


/// Fixed-capacity first-in-first-out queue backed by a ring buffer.
///
/// The slot array is sized to the smallest power of two at least as large as the requested
/// minimum, so index wraparound is a bit mask instead of a modulo. One slot always stays free to
/// tell "full" apart from "empty": a queue with `slots()` slots holds at most `slots() - 1`
/// elements. The slot array is allocated once and never resized.
#[derive(Debug, Clone)]
pub struct FifoQueue<E> {
  buffer: Box<[Option<E>]>,
  head:   usize,
  tail:   usize,
}

impl<E> FifoQueue<E> {
  /// Creates a queue able to hold at least `min_capacity - 1` elements.
  ///
  /// # Panics
  ///
  /// Panics when no power of two representable in `usize` is at least `min_capacity`, or when the
  /// slot array cannot be allocated. Use [`FifoQueue::try_new`] to handle these as errors.
  #[must_use]
  #[allow(clippy::panic)]
  pub fn new(min_capacity: usize) -> Self {
    match Self::try_new(min_capacity) {
      | Ok(queue) => queue,
      | Err(error) => panic!("{error}"),
    }
  }

  /// Creates a queue, reporting an unreachable or unallocatable size as an error.
  ///
  /// # Errors
  ///
  /// Returns [`CapacityError::Overflow`] when no power of two representable in `usize` is at least
  /// `min_capacity`, and [`CapacityError::AllocFailed`] when the allocator refuses the slot array.
  pub fn try_new(min_capacity: usize) -> Result<Self, CapacityError> {
    let slots =
      min_capacity.checked_next_power_of_two().ok_or(CapacityError::Overflow { requested: min_capacity })?;

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(slots).map_err(|_| CapacityError::AllocFailed { slots })?;
    buffer.resize_with(slots, || None);

    tracing::debug!(requested = min_capacity, slots, "fifo queue allocated");
    Ok(Self { buffer: buffer.into_boxed_slice(), head: 0, tail: 0 })
  }

  /// Returns the allocated slot count, always a power of two.
  #[must_use]
  pub fn slots(&self) -> usize {
    self.buffer.len()
  }

  /// Drops every stored element and rewinds both cursors. The slot array is kept.
  pub fn clear(&mut self) {
    self.buffer.iter_mut().for_each(|slot| *slot = None);
    self.head = 0;
    self.tail = 0;
  }

  fn mask(&self) -> usize {
    self.buffer.len() - 1
  }

  fn next_index(&self, index: usize) -> usize {
    (index + 1) & self.mask()
  }

  fn push(&mut self, element: E) -> Result<(), E> {
    let next = self.next_index(self.head);
    if next == self.tail {
      return Err(element);
    }
    self.buffer[self.head] = Some(element);
    self.head = next;
    Ok(())
  }
}

impl<E> Default for FifoQueue<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl<E> QueueBase<E> for FifoQueue<E> {
  fn len(&self) -> usize {
    if self.head >= self.tail {
      self.head - self.tail
    } else {
      self.buffer.len() - self.tail + self.head
    }
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limited(self.mask())
  }

  fn is_empty(&self) -> bool {
    self.head == self.tail
  }

  fn is_full(&self) -> bool {
    self.next_index(self.head) == self.tail
  }
}

impl<E> QueueWriter<E> for FifoQueue<E> {
  /// Adds an element at the back of the queue.
  ///
  /// # Panics
  ///
  /// Panics with "no space left in queue" when every usable slot is taken.
  #[allow(clippy::panic)]
  fn enqueue(&mut self, element: E) {
    if self.push(element).is_err() {
      tracing::error!(slots = self.slots(), "enqueue on a full fifo queue");
      panic!("{}", QueueError::Full(()));
    }
  }

  fn try_enqueue(&mut self, element: E) -> Result<(), QueueError<E>> {
    self.push(element).map_err(|rejected| {
      tracing::warn!(slots = self.slots(), "fifo queue full, element rejected");
      QueueError::Full(rejected)
    })
  }
}

impl<E> QueueReader<E> for FifoQueue<E> {
  fn dequeue(&mut self) -> Result<E, QueueError<E>> {
    if self.head == self.tail {
      return Err(QueueError::Empty);
    }
    let item = self.buffer[self.tail].take().ok_or(QueueError::Empty)?;
    self.tail = self.next_index(self.tail);
    Ok(item)
  }

  fn peek(&self) -> Result<&E, QueueError<E>> {
    if self.head == self.tail {
      return Err(QueueError::Empty);
    }
    self.buffer[self.tail].as_ref().ok_or(QueueError::Empty)
  }
}
