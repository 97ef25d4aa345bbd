#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::manual_assert)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![cfg_attr(not(feature = "std"), no_std)]

//! In-memory queue primitives for cellex.
//!
//! Two queues share one capability surface ([`QueueBase`], [`QueueWriter`], [`QueueReader`]):
//!
//! - [`FifoQueue`]: fixed-capacity ring buffer sized to a power of two, wrapping indices with a bit
//!   mask.
//! - [`PriorityQueue`]: unbounded binary heap ordered by a caller-supplied comparator.
//!
//! Neither queue locks internally. Callers that need shared access pick a wrapper through
//! [`QueueStorage`].
//!
//! ```
//! use cellex_queue_core_rs::{FifoQueue, PriorityQueue, QueueBase, QueueReader, QueueWriter};
//!
//! let mut fifo = FifoQueue::new(4);
//! fifo.enqueue_all([1, 2, 3]);
//! assert_eq!(fifo.dequeue(), Ok(1));
//!
//! let mut heap = PriorityQueue::new(|a: &i32, b: &i32| a > b);
//! heap.enqueue_all([3, 9, 1]);
//! assert_eq!(heap.dequeue(), Ok(9));
//! assert_eq!(heap.len(), 2);
//! ```

extern crate alloc;

/// Queue data structures and the traits binding them.
pub mod collections;

pub use collections::{
  CapacityError, FifoQueue, OrdComparator, PriorityQueue, Queue, QueueBase, QueueError, QueueReader, QueueSize,
  QueueStorage, QueueWriter, DEFAULT_CAPACITY,
};
