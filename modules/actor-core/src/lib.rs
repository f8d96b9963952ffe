//! axon-actor-core-rs
//!
//! The core of a lightweight in-process actor runtime: a mailbox scheduling
//! engine that serializes message delivery per actor over a pluggable
//! dispatcher, and a process addressing layer that resolves opaque `Pid`s to
//! live processes or an observable dead-letter sink.
//!
//! # Key pieces
//! - Two-queue mailboxes: system signals preempt user messages
//! - Atomic idle/busy latch admitting exactly one drain per mailbox
//! - Cooperative suspend/resume and throughput-bounded drain passes
//! - Process registry with monotonic auto-naming and dead letters
//! - `Props`-driven spawning with pluggable mailbox and dispatcher
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]

/// Public API of the runtime core.
pub mod api;

pub use api::actor::{
  from_producer, spawn, spawn_named, Actor, ActorContext, ActorFailure, ActorProducer, Context, ContextState,
  MailboxProducer, Props, Spawner,
};
pub use api::dispatch::{Dispatcher, DispatcherHandle, Runnable, SynchronousDispatcher, DEFAULT_THROUGHPUT};
pub use api::mailbox::{
  DefaultMailbox, Mailbox, MailboxHandle, MailboxQueue, MailboxStatistics, MailboxStatisticsHandle, MailboxStatus,
  MessageInvoker, MessageInvokerHandle, UnboundedMailboxQueue,
};
pub use api::messaging::{AnyMessage, AnyMessageValue, MessageEnvelope, SystemMessage};
pub use api::process::{
  DeadLetter, DeadLetterHub, DeadLetterListener, DeadLetterProcess, DeadLetterReason, LocalProcess, Pid, Process,
  ProcessHandle, ProcessRegistry, ProcessResolution, SpawnError,
};
