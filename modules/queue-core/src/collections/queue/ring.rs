mod capacity_error;
mod fifo_queue;

pub use capacity_error::CapacityError;
pub use fifo_queue::FifoQueue;

/// Minimum capacity requested by [`FifoQueue::default`].
pub const DEFAULT_CAPACITY: usize = 32;
