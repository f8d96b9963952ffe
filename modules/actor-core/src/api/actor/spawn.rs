use crate::api::actor::{Actor, Props};
use crate::api::process::{Pid, ProcessRegistry, SpawnError};

/// Creates [`Props`] around a behavior producer.
#[must_use]
pub fn from_producer<F>(producer: F) -> Props
where
  F: Fn() -> Box<dyn Actor> + Send + Sync + 'static, {
  Props::from_producer(producer)
}

/// Spawns an actor under an auto-generated name (`$<n>`).
///
/// # Errors
///
/// Returns [`SpawnError::NameAlreadyExists`] when the generated name
/// collides, which only happens if embedders also register names of that
/// form.
pub fn spawn(props: &Props) -> Result<Pid, SpawnError> {
  spawn_named(props, &ProcessRegistry::global().next_id())
}

/// Spawns an actor under a caller-chosen name.
///
/// # Errors
///
/// Returns [`SpawnError::NameAlreadyExists`] when the registry already
/// holds a process under `name`.
pub fn spawn_named(props: &Props, name: &str) -> Result<Pid, SpawnError> {
  props.spawn(name, None)
}
