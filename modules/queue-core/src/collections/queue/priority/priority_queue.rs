use alloc::vec::Vec;
use core::fmt;

use super::heap_index::{left, parent, right};
use crate::collections::queue::{
  queue_error::QueueError,
  queue_size::QueueSize,
  traits::{QueueBase, QueueReader, QueueWriter},
};


/// Comparator type used by [`PriorityQueue::max_first`] and [`PriorityQueue::min_first`].
pub type OrdComparator<E> = fn(&E, &E) -> bool;

/// Unbounded priority queue backed by an array-based binary heap.
///
/// Ordering comes from a comparator `compare(a, b)` that returns `true` when `a` has strictly
/// higher priority than `b`. The element with the highest priority is always dequeued first.
/// Elements of equal priority leave in no particular order.
///
/// Storage grows as elements are added and is kept when they are removed, so a queue that
/// oscillates around a working size stops reallocating.
///
/// # Type Parameters
///
/// * `E` - Type of elements stored in the queue
/// * `C` - Comparator, `Fn(&E, &E) -> bool`
#[derive(Clone)]
pub struct PriorityQueue<E, C = OrdComparator<E>> {
  elements: Vec<E>,
  compare:  C,
}

impl<E, C> PriorityQueue<E, C>
where
  C: Fn(&E, &E) -> bool,
{
  /// Creates an empty queue without allocating.
  #[must_use]
  pub fn new(compare: C) -> Self {
    Self::with_capacity(0, compare)
  }

  /// Creates an empty queue with room for `capacity` elements before reallocating.
  #[must_use]
  pub fn with_capacity(capacity: usize, compare: C) -> Self {
    tracing::debug!(capacity, "priority queue created");
    Self { elements: Vec::with_capacity(capacity), compare }
  }

  /// Returns the comparator this queue orders by.
  #[must_use]
  pub const fn comparator(&self) -> &C {
    &self.compare
  }

  /// Returns how many elements fit in the retained storage before it has to grow.
  #[must_use]
  pub fn storage_capacity(&self) -> usize {
    self.elements.capacity()
  }

  /// Drops every element while keeping the storage.
  pub fn clear(&mut self) {
    self.elements.clear();
  }

  fn outranks(&self, a: usize, b: usize) -> bool {
    (self.compare)(&self.elements[a], &self.elements[b])
  }

  fn sift_up(&mut self, mut index: usize) {
    while index != 0 {
      let up = parent(index);
      if !self.outranks(index, up) {
        break;
      }
      self.elements.swap(index, up);
      index = up;
    }
  }

  fn sift_down(&mut self, mut index: usize) {
    let len = self.elements.len();
    loop {
      let (l, r) = (left(index), right(index));
      let mut top = index;
      if l < len && self.outranks(l, top) {
        top = l;
      }
      if r < len && self.outranks(r, top) {
        top = r;
      }
      if top == index {
        return;
      }
      self.elements.swap(index, top);
      index = top;
    }
  }
}

impl<E: Ord> PriorityQueue<E> {
  /// Creates a queue that dequeues the greatest element first.
  #[must_use]
  pub fn max_first() -> Self {
    Self::new(greater)
  }

  /// Creates a queue that dequeues the least element first.
  #[must_use]
  pub fn min_first() -> Self {
    Self::new(less)
  }
}

fn greater<E: Ord>(a: &E, b: &E) -> bool {
  a > b
}

fn less<E: Ord>(a: &E, b: &E) -> bool {
  a < b
}

impl<E: fmt::Debug, C> fmt::Debug for PriorityQueue<E, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PriorityQueue").field("elements", &self.elements).finish_non_exhaustive()
  }
}

impl<E, C> QueueBase<E> for PriorityQueue<E, C>
where
  C: Fn(&E, &E) -> bool,
{
  fn len(&self) -> usize {
    self.elements.len()
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E, C> QueueWriter<E> for PriorityQueue<E, C>
where
  C: Fn(&E, &E) -> bool,
{
  fn enqueue(&mut self, element: E) {
    self.elements.push(element);
    self.sift_up(self.elements.len() - 1);
  }

  /// Same as [`QueueWriter::enqueue`]; an unbounded queue never rejects an element.
  fn try_enqueue(&mut self, element: E) -> Result<(), QueueError<E>> {
    self.enqueue(element);
    Ok(())
  }
}

impl<E, C> QueueReader<E> for PriorityQueue<E, C>
where
  C: Fn(&E, &E) -> bool,
{
  fn dequeue(&mut self) -> Result<E, QueueError<E>> {
    match self.elements.len() {
      | 0 | 1 => self.elements.pop().ok_or(QueueError::Empty),
      | _ => {
        let top = self.elements.swap_remove(0);
        self.sift_down(0);
        Ok(top)
      },
    }
  }

  fn peek(&self) -> Result<&E, QueueError<E>> {
    self.elements.first().ok_or(QueueError::Empty)
  }
}

impl<E, C> Extend<E> for PriorityQueue<E, C>
where
  C: Fn(&E, &E) -> bool,
{
  fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
    let iter = iter.into_iter();
    self.elements.reserve(iter.size_hint().0);
    for element in iter {
      self.enqueue(element);
    }
  }
}
