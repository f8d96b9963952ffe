//! Public API modules.

/// Actor behavior, context, and spawning.
pub mod actor;
/// Execution substrate for scheduled runnables.
pub mod dispatch;
/// Mailbox scheduling engine.
pub mod mailbox;
/// Message payloads and envelopes.
pub mod messaging;
/// Process addressing and the registry.
pub mod process;
