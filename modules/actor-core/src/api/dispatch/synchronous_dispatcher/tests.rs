use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::*;

#[test]
fn runs_the_runnable_before_returning() {
  let executed = Arc::new(AtomicBool::new(false));
  let executed_clone = Arc::clone(&executed);

  let dispatcher = SynchronousDispatcher::default();
  dispatcher.schedule(Box::new(move || {
    executed_clone.store(true, Ordering::SeqCst);
  }));

  assert!(executed.load(Ordering::SeqCst));
}

#[test]
fn default_throughput_is_three_hundred() {
  assert_eq!(SynchronousDispatcher::default().throughput(), DEFAULT_THROUGHPUT);
  assert_eq!(DEFAULT_THROUGHPUT, 300);
}

#[test]
fn throughput_is_configurable() {
  assert_eq!(SynchronousDispatcher::new(1).throughput(), 1);
}
