use core::fmt;


/// Errors that occur during queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue has no free slot. Contains the element that was attempted to be added.
  Full(T),
  /// The queue has no elements to consume.
  Empty,
}

impl<T> QueueError<T> {
  /// Extracts the element carried by [`QueueError::Full`].
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Empty => None,
    }
  }

  /// Returns `true` for [`QueueError::Full`].
  #[must_use]
  pub const fn is_full(&self) -> bool {
    matches!(self, Self::Full(_))
  }

  /// Returns `true` for [`QueueError::Empty`].
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.write_str("no space left in queue"),
      | Self::Empty => f.write_str("queue is empty"),
    }
  }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for QueueError<T> {}
