//! Execution substrate for mailbox drain runnables.

mod dispatcher;
mod synchronous_dispatcher;

pub use dispatcher::{Dispatcher, DispatcherHandle, Runnable, DEFAULT_THROUGHPUT};
pub use synchronous_dispatcher::SynchronousDispatcher;
