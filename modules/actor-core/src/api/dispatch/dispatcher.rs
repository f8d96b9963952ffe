use axon_utils_core_rs::ArcShared;

/// Unit of work handed to a dispatcher, executed exactly once.
pub type Runnable = Box<dyn FnOnce() + Send + 'static>;

/// Soft limit on messages drained per scheduling when a dispatcher does not
/// override [`Dispatcher::throughput`].
pub const DEFAULT_THROUGHPUT: usize = 300;

/// Execution substrate that runs scheduled runnables.
///
/// `schedule` arranges for the runnable to execute exactly once, at some
/// point after the call returns. Ordering between distinct `schedule` calls
/// is not guaranteed, and implementations must not invoke the runnable
/// re-entrantly within the same logical invocation — except the synchronous
/// variant, which runs it inline on the calling thread by contract.
pub trait Dispatcher: Send + Sync {
  /// Arranges for `runnable` to be executed exactly once.
  fn schedule(&self, runnable: Runnable);

  /// Soft limit on messages drained per scheduling; a fairness knob, always
  /// positive.
  fn throughput(&self) -> usize {
    DEFAULT_THROUGHPUT
  }
}

/// Shared handle to a [`Dispatcher`].
pub type DispatcherHandle = ArcShared<dyn Dispatcher>;
