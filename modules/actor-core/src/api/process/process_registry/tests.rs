use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::thread;

use super::*;
use crate::api::mailbox::DefaultMailbox;
use crate::api::messaging::MessageEnvelope;
use crate::api::messaging::SystemMessage;
use crate::api::process::{LocalProcess, Process};

fn local_process() -> ProcessHandle {
  ArcShared::from_arc(Arc::new(LocalProcess::new(DefaultMailbox::unbounded().into_handle())))
}

#[test]
fn next_id_is_monotonic_and_dollar_prefixed() {
  let registry = ProcessRegistry::new();
  assert_eq!(registry.next_id(), "$1");
  assert_eq!(registry.next_id(), "$2");
  assert_eq!(registry.next_id(), "$3");
}

#[test]
fn try_add_mints_a_pid_bound_to_the_registry_address() {
  let registry = ProcessRegistry::new();
  let pid = registry.try_add("worker", local_process()).unwrap();
  assert_eq!(pid.address(), "nonhost");
  assert_eq!(pid.id(), "worker");
}

#[test]
fn try_add_rejects_duplicate_ids() {
  let registry = ProcessRegistry::new();
  registry.try_add("a", local_process()).unwrap();

  let error = registry.try_add("a", local_process()).unwrap_err();
  assert_eq!(error, SpawnError::NameAlreadyExists(String::from("a")));
  assert_eq!(error.to_string(), "a process with the name 'a' already exists");
}

#[test]
fn resolving_an_unknown_pid_yields_dead_letter() {
  let registry = ProcessRegistry::new();
  let pid = Pid::new("nonhost", "$999");
  assert!(matches!(registry.resolve_pid(&pid), ProcessResolution::DeadLetter(DeadLetterReason::UnregisteredProcess)));
}

#[test]
fn resolving_a_stopped_process_yields_dead_letter() {
  let registry = ProcessRegistry::new();
  let process = local_process();
  let pid = registry.try_add("stoppable", process.clone()).unwrap();
  assert!(matches!(registry.resolve_pid(&pid), ProcessResolution::Local(_)));

  process.stop(&pid);
  assert!(matches!(registry.resolve_pid(&pid), ProcessResolution::DeadLetter(DeadLetterReason::ProcessStopped)));
}

#[test]
fn get_falls_back_to_the_dead_letter_process() {
  let registry = ProcessRegistry::new();
  let pid = Pid::new("nonhost", "$999");
  assert!(registry.get(&pid).ptr_eq(&DeadLetterProcess::global()));
}

#[test]
fn concurrent_try_add_with_one_id_has_exactly_one_winner() {
  let registry = Arc::new(ProcessRegistry::new());
  let winners = Arc::new(AtomicUsize::new(0));

  let handles: Vec<_> = (0..8)
    .map(|_| {
      let registry = Arc::clone(&registry);
      let winners = Arc::clone(&winners);
      thread::spawn(move || {
        if registry.try_add("contested", local_process()).is_ok() {
          winners.fetch_add(1, AtomicOrdering::SeqCst);
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }

  assert_eq!(winners.load(AtomicOrdering::SeqCst), 1);
}

#[test]
fn published_dead_letters_reach_subscribed_listeners() {
  let registry = ProcessRegistry::new();
  let observed = Arc::new(AtomicUsize::new(0));
  let observed_clone = Arc::clone(&observed);
  registry.subscribe_dead_letters(ArcShared::from_arc(Arc::new(move |letter: &DeadLetter| {
    assert_eq!(letter.pid.id(), "$void");
    observed_clone.fetch_add(1, AtomicOrdering::SeqCst);
  })));

  let letter = DeadLetter::new(
    Pid::new("nonhost", "$void"),
    MessageEnvelope::system(SystemMessage::Stop),
    DeadLetterReason::UnregisteredProcess,
  );
  registry.publish_dead_letter(&letter);
  assert_eq!(observed.load(AtomicOrdering::SeqCst), 1);
}
