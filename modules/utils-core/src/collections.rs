//! Collection primitives shared between the workspace crates.

mod element;
/// Queue traits and implementations.
pub mod queue;

pub use element::Element;
pub use queue::{MpscUnboundedQueue, QueueBase, QueueError, QueueRw, QueueSize};
