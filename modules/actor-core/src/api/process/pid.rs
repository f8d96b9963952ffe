use core::fmt;
use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use spin::RwLock;

use crate::api::messaging::{AnyMessageValue, MessageEnvelope, SystemMessage};
use crate::api::process::{DeadLetterProcess, Process, ProcessHandle, ProcessRegistry, ProcessResolution};

#[cfg(test)]
mod tests;

enum MessageLane {
  User,
  System,
}

/// Identifier of an actor: an `(address, id)` value.
///
/// Equality and hashing consider only the identity pair. The resolved
/// process handle is cached as a best-effort optimization; the cache is
/// advisory and is invalidated whenever the cached process reports dead,
/// falling back to registry re-resolution (which yields dead letters for
/// stopped or unknown processes).
pub struct Pid {
  address: Cow<'static, str>,
  id:      Cow<'static, str>,
  process: RwLock<Option<ProcessHandle>>,
}

impl Pid {
  /// Creates a PID from its identity pair.
  #[must_use]
  pub fn new(address: impl Into<Cow<'static, str>>, id: impl Into<Cow<'static, str>>) -> Self {
    Self { address: address.into(), id: id.into(), process: RwLock::new(None) }
  }

  /// The registry address component.
  #[must_use]
  pub fn address(&self) -> &str {
    &self.address
  }

  /// The process id component.
  #[must_use]
  pub fn id(&self) -> &str {
    &self.id
  }

  /// Sends a user message to the actor this PID addresses.
  ///
  /// Completes without error even when no live process exists; the message
  /// is then routed to dead letters.
  pub fn tell<M>(&self, message: M)
  where
    M: AnyMessageValue, {
    self.deliver(MessageEnvelope::user(message), MessageLane::User);
  }

  /// Sends a system signal to the actor this PID addresses.
  pub fn send_system_message(&self, message: SystemMessage) {
    self.deliver(MessageEnvelope::system(message), MessageLane::System);
  }

  /// Requests a cooperative stop of the addressed process.
  pub fn stop(&self) {
    match self.resolve() {
      | ProcessResolution::Local(process) => process.stop(self),
      | ProcessResolution::DeadLetter(reason) => {
        DeadLetterProcess::publish(self, MessageEnvelope::system(SystemMessage::Stop), reason);
      },
    }
  }

  fn deliver(&self, envelope: MessageEnvelope, lane: MessageLane) {
    match self.resolve() {
      | ProcessResolution::Local(process) => match lane {
        | MessageLane::User => process.send_user_message(self, envelope),
        | MessageLane::System => process.send_system_message(self, envelope),
      },
      | ProcessResolution::DeadLetter(reason) => DeadLetterProcess::publish(self, envelope, reason),
    }
  }

  fn resolve(&self) -> ProcessResolution {
    if let Some(cached) = self.cached_process() {
      if cached.is_dead() {
        *self.process.write() = None;
      } else {
        return ProcessResolution::Local(cached);
      }
    }
    match ProcessRegistry::global().resolve_pid(self) {
      | ProcessResolution::Local(process) => {
        *self.process.write() = Some(process.clone());
        ProcessResolution::Local(process)
      },
      | resolution => resolution,
    }
  }

  fn cached_process(&self) -> Option<ProcessHandle> {
    (*self.process.read()).clone()
  }
}

impl Clone for Pid {
  fn clone(&self) -> Self {
    Self { address: self.address.clone(), id: self.id.clone(), process: RwLock::new(self.cached_process()) }
  }
}

impl PartialEq for Pid {
  fn eq(&self, other: &Self) -> bool {
    self.address == other.address && self.id == other.id
  }
}

impl Eq for Pid {}

impl Hash for Pid {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.address.hash(state);
    self.id.hash(state);
  }
}

impl fmt::Debug for Pid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pid").field("address", &self.address).field("id", &self.id).finish()
  }
}

impl fmt::Display for Pid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.address, self.id)
  }
}
