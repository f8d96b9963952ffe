use core::fmt;

/// Errors surfaced to spawn callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
  /// A process with the requested name is already registered.
  NameAlreadyExists(String),
}

impl fmt::Display for SpawnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | SpawnError::NameAlreadyExists(name) => {
        write!(f, "a process with the name '{name}' already exists")
      },
    }
  }
}

impl std::error::Error for SpawnError {}
