use core::cell::RefCell;
#[cfg(feature = "std")]
use std::sync::Mutex;


/// Caller-chosen wrapper giving shared access to a queue.
///
/// Queues never lock internally; a caller that needs to share one wraps it in a cell or a mutex
/// and goes through this trait.
pub trait QueueStorage<Q> {
  /// Executes the provided closure with an immutable reference to the queue.
  fn with_read<R>(&self, f: impl FnOnce(&Q) -> R) -> R;

  /// Executes the provided closure with a mutable reference to the queue.
  fn with_write<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R;
}

impl<Q> QueueStorage<Q> for RefCell<Q> {
  fn with_read<R>(&self, f: impl FnOnce(&Q) -> R) -> R {
    let guard = self.borrow();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R {
    let mut guard = self.borrow_mut();
    f(&mut guard)
  }
}

#[cfg(feature = "std")]
impl<Q> QueueStorage<Q> for Mutex<Q> {
  fn with_read<R>(&self, f: impl FnOnce(&Q) -> R) -> R {
    let guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R {
    let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
  }
}
