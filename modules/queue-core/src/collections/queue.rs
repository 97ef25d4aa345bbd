//! no_std-friendly queue primitives.

mod queue_error;
mod queue_size;
mod storage;
mod traits;

mod priority;
/// Ring-buffer-based FIFO queue and its construction errors.
pub mod ring;

pub use priority::{OrdComparator, PriorityQueue};
pub use queue_error::QueueError;
pub use queue_size::QueueSize;
pub use ring::{CapacityError, FifoQueue, DEFAULT_CAPACITY};
pub use storage::QueueStorage;
pub use traits::{Queue, QueueBase, QueueReader, QueueWriter};
