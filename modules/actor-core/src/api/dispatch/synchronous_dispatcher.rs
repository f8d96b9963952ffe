use std::sync::Arc;

use axon_utils_core_rs::ArcShared;

use crate::api::dispatch::{Dispatcher, DispatcherHandle, Runnable, DEFAULT_THROUGHPUT};

#[cfg(test)]
mod tests;

/// Dispatcher that runs every runnable inline on the calling thread.
///
/// The default dispatcher: scheduling happens on posting threads, and the
/// mailbox's idle/busy latch alone preserves per-actor serialization.
#[derive(Debug, Clone)]
pub struct SynchronousDispatcher {
  throughput: usize,
}

impl SynchronousDispatcher {
  /// Creates a dispatcher with the given drain throughput.
  #[must_use]
  pub const fn new(throughput: usize) -> Self {
    Self { throughput }
  }

  /// Wraps the dispatcher in a shared handle.
  #[must_use]
  pub fn into_handle(self) -> DispatcherHandle {
    ArcShared::from_arc(Arc::new(self))
  }
}

impl Default for SynchronousDispatcher {
  fn default() -> Self {
    Self::new(DEFAULT_THROUGHPUT)
  }
}

impl Dispatcher for SynchronousDispatcher {
  fn schedule(&self, runnable: Runnable) {
    runnable();
  }

  fn throughput(&self) -> usize {
    self.throughput
  }
}
