use crate::collections::queue::traits::{queue_reader::QueueReader, queue_writer::QueueWriter};

/// Full queue capability: everything a caller can do with either queue implementation.
pub trait Queue<E>: QueueReader<E> + QueueWriter<E> {}

impl<E, T> Queue<E> for T where T: QueueReader<E> + QueueWriter<E> {}
