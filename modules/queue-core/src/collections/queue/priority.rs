mod heap_index;
mod priority_queue;

pub use priority_queue::{OrdComparator, PriorityQueue};
