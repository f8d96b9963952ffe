//! Actor behavior, per-actor context, and spawning.

mod actor_context;
mod actor_failure;
mod base;
mod context;
mod props;
mod spawn;

pub use actor_context::{ActorContext, ContextState};
pub use actor_failure::ActorFailure;
pub use base::{Actor, ActorProducer};
pub use context::Context;
pub use props::{MailboxProducer, Props, Spawner};
pub use spawn::{from_producer, spawn, spawn_named};
