//! Process addressing: PIDs, local processes, dead letters, and the
//! registry.

mod base;
mod dead_letter;
mod local_process;
mod pid;
mod process_registry;
mod spawn_error;

pub use base::{Process, ProcessHandle};
pub use dead_letter::{DeadLetter, DeadLetterHub, DeadLetterListener, DeadLetterProcess, DeadLetterReason};
pub use local_process::LocalProcess;
pub use pid::Pid;
pub use process_registry::{ProcessRegistry, ProcessResolution};
pub use spawn_error::SpawnError;
