use std::{
  io::Write,
  sync::{Arc, Mutex},
};

use cellex_queue_core_rs::{FifoQueue, PriorityQueue, Queue, QueueError, QueueReader, QueueWriter};
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

fn exercise_count_contract<Q: Queue<i32>>(queue: &mut Q, rounds: i32) {
  let mut enqueued = 0_usize;
  let mut dequeued = 0_usize;

  for round in 0..rounds {
    if queue.try_enqueue(round).is_ok() {
      enqueued += 1;
    }
    if round % 3 == 0 && queue.dequeue().is_ok() {
      dequeued += 1;
    }
    assert_eq!(queue.len(), enqueued - dequeued);
    assert_eq!(queue.is_empty(), enqueued == dequeued);
  }

  while queue.dequeue().is_ok() {
    dequeued += 1;
  }
  assert_eq!(enqueued, dequeued);
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
  assert_eq!(queue.peek(), Err(QueueError::Empty));
}

fn peek_then_dequeue_agree<Q: Queue<i32>>(queue: &mut Q) {
  queue.enqueue_all([1, 4, 5]);
  while !queue.is_empty() {
    let peeked = *queue.peek().unwrap();
    assert_eq!(queue.dequeue(), Ok(peeked));
  }
}

#[test]
fn fifo_queue_satisfies_count_contract() {
  exercise_count_contract(&mut FifoQueue::new(8), 100);
}

#[test]
fn priority_queue_satisfies_count_contract() {
  exercise_count_contract(&mut PriorityQueue::max_first(), 100);
}

#[test]
fn both_queues_agree_on_peek_and_dequeue() {
  peek_then_dequeue_agree(&mut FifoQueue::new(4));
  peek_then_dequeue_agree(&mut PriorityQueue::new(|a: &i32, b: &i32| a > b));
}

#[test]
fn fifo_and_priority_orders_differ() {
  let mut fifo = FifoQueue::new(8);
  let mut heap = PriorityQueue::max_first();
  fifo.enqueue_all([2, 9, 4]);
  heap.enqueue_all([2, 9, 4]);

  assert_eq!(fifo.dequeue(), Ok(2));
  assert_eq!(heap.dequeue(), Ok(9));
}

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let mut guard = self.buffer.lock().unwrap();
    guard.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

fn captured_logs(action: impl FnOnce()) -> String {
  let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
  let writer_source = buffer.clone();
  let subscriber = fmt::SubscriberBuilder::default()
    .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
    .with_ansi(false)
    .finish();

  with_default(subscriber, action);

  let bytes = buffer.lock().unwrap().clone();
  String::from_utf8(bytes).unwrap()
}

#[test]
fn rejected_try_enqueue_emits_warning() {
  let logs = captured_logs(|| {
    let mut queue = FifoQueue::new(2);
    queue.enqueue('a');
    assert_eq!(queue.try_enqueue('b'), Err(QueueError::Full('b')));
  });

  assert!(logs.contains("WARN"), "logs: {logs}");
  assert!(logs.contains("fifo queue full, element rejected"), "logs: {logs}");
  assert!(logs.contains("slots=2"), "logs: {logs}");
}

#[test]
fn panicking_enqueue_logs_error_first() {
  let logs = captured_logs(|| {
    let result = std::panic::catch_unwind(|| {
      let mut queue = FifoQueue::new(2);
      queue.enqueue_all([1, 2]);
    });
    assert!(result.is_err());
  });

  assert!(logs.contains("ERROR"), "logs: {logs}");
  assert!(logs.contains("enqueue on a full fifo queue"), "logs: {logs}");
}
