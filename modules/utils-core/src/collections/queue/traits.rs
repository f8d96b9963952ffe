//! Capability traits implemented by the workspace queues.

mod queue_base;
mod queue_rw;

pub use queue_base::QueueBase;
pub use queue_rw::QueueRw;
