use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use std::borrow::Cow;
use std::collections::BTreeMap;

use axon_utils_core_rs::ArcShared;
use spin::RwLock;

use crate::api::process::{
  DeadLetter, DeadLetterHub, DeadLetterListener, DeadLetterProcess, DeadLetterReason, Pid, Process, ProcessHandle,
  SpawnError,
};

#[cfg(test)]
mod tests;

const NO_HOST: &str = "nonhost";

static GLOBAL_REGISTRY: ProcessRegistry = ProcessRegistry::new();

/// Outcome of resolving a PID against the registry.
pub enum ProcessResolution {
  /// A live local process.
  Local(ProcessHandle),
  /// No live process: the send belongs to dead letters.
  DeadLetter(DeadLetterReason),
}

impl fmt::Debug for ProcessResolution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ProcessResolution::Local(_) => f.write_str("Local"),
      | ProcessResolution::DeadLetter(reason) => f.debug_tuple("DeadLetter").field(reason).finish(),
    }
  }
}

/// Directory of live processes plus the dead-letter hub.
///
/// The registry owns its processes; PIDs hold at most an advisory cached
/// handle. Ids are unique: inserting a duplicate fails with
/// [`SpawnError::NameAlreadyExists`].
pub struct ProcessRegistry {
  address:      Cow<'static, str>,
  sequence_id:  AtomicU64,
  processes:    RwLock<BTreeMap<String, ProcessHandle>>,
  dead_letters: RwLock<DeadLetterHub>,
}

impl ProcessRegistry {
  /// Creates an empty registry addressed as `nonhost`.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      address:      Cow::Borrowed(NO_HOST),
      sequence_id:  AtomicU64::new(0),
      processes:    RwLock::new(BTreeMap::new()),
      dead_letters: RwLock::new(DeadLetterHub::new()),
    }
  }

  /// The process-wide registry.
  #[must_use]
  pub fn global() -> &'static ProcessRegistry {
    &GLOBAL_REGISTRY
  }

  /// The address PIDs minted by this registry carry.
  #[must_use]
  pub fn address(&self) -> &str {
    &self.address
  }

  /// Returns the next auto-generated process id, of the form `$<n>`.
  #[must_use]
  pub fn next_id(&self) -> String {
    let sequence = self.sequence_id.fetch_add(1, Ordering::SeqCst) + 1;
    format!("${sequence}")
  }

  /// Registers `process` under `id` and mints its PID.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameAlreadyExists`] when `id` is taken.
  pub fn try_add(&self, id: &str, process: ProcessHandle) -> Result<Pid, SpawnError> {
    let mut processes = self.processes.write();
    if processes.contains_key(id) {
      return Err(SpawnError::NameAlreadyExists(id.to_string()));
    }
    processes.insert(id.to_string(), process);
    Ok(Pid::new(self.address.clone(), id.to_string()))
  }

  /// Resolves a PID to a live process or a dead-letter reason.
  ///
  /// Stopped processes stay registered but resolve to dead letters.
  #[must_use]
  pub fn resolve_pid(&self, pid: &Pid) -> ProcessResolution {
    match self.processes.read().get(pid.id()) {
      | Some(process) if process.is_dead() => ProcessResolution::DeadLetter(DeadLetterReason::ProcessStopped),
      | Some(process) => ProcessResolution::Local(process.clone()),
      | None => ProcessResolution::DeadLetter(DeadLetterReason::UnregisteredProcess),
    }
  }

  /// Resolves a PID, falling back to the dead-letter process.
  #[must_use]
  pub fn get(&self, pid: &Pid) -> ProcessHandle {
    match self.resolve_pid(pid) {
      | ProcessResolution::Local(process) => process,
      | ProcessResolution::DeadLetter(_) => DeadLetterProcess::global(),
    }
  }

  /// Subscribes a listener to dead letters published through this registry.
  pub fn subscribe_dead_letters(&self, listener: ArcShared<DeadLetterListener>) {
    self.dead_letters.write().subscribe(listener);
  }

  /// Publishes a dead letter to the subscribed listeners.
  pub fn publish_dead_letter(&self, dead_letter: &DeadLetter) {
    self.dead_letters.read().publish(dead_letter);
  }
}

impl Default for ProcessRegistry {
  fn default() -> Self {
    Self::new()
  }
}
