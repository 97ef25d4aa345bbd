mod queue;

pub use queue::{
  CapacityError, FifoQueue, OrdComparator, PriorityQueue, Queue, QueueBase, QueueError, QueueReader, QueueSize,
  QueueStorage, QueueWriter, DEFAULT_CAPACITY,
};
