//! Index arithmetic for an array-backed binary heap.


pub(super) const fn left(index: usize) -> usize {
  2 * index + 1
}

pub(super) const fn right(index: usize) -> usize {
  2 * index + 2
}

/// Parent of a non-root node.
pub(super) const fn parent(index: usize) -> usize {
  (index - 1) >> 1
}
