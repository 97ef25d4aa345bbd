mod queue_storage;

pub use queue_storage::QueueStorage;
