//! axon-utils-core-rs
//!
//! Collection and shared-ownership primitives shared across the axon
//! workspace: queue traits with shared-reference read/write operations, a
//! lock-free unbounded MPSC queue, and the `ArcShared` handle.
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]

/// Collection primitives.
pub mod collections;
/// Shared-ownership primitives.
pub mod sync;

pub use collections::{Element, MpscUnboundedQueue, QueueBase, QueueError, QueueRw, QueueSize};
pub use sync::ArcShared;
