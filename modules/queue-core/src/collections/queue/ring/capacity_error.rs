use core::fmt;


/// Errors raised while allocating the slot array of a [`super::FifoQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
  /// No power of two representable in `usize` is at least `requested`.
  Overflow {
    /// Minimum capacity asked for by the caller.
    requested: usize,
  },
  /// The allocator refused to provide `slots` slots.
  AllocFailed {
    /// Power-of-two slot count that could not be allocated.
    slots: usize,
  },
}

impl fmt::Display for CapacityError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Overflow { requested } => {
        write!(f, "unable to find a power of two at least as large as {requested}")
      },
      | Self::AllocFailed { slots } => write!(f, "failed to allocate {slots} queue slots"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}
