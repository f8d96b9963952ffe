use std::collections::HashSet;

use super::*;

#[test]
fn equality_considers_only_the_identity_pair() {
  let first = Pid::new("nonhost", "$1");
  let second = Pid::new("nonhost", "$1");
  let third = Pid::new("nonhost", "$2");

  assert_eq!(first, second);
  assert_ne!(first, third);
}

#[test]
fn hashing_follows_equality() {
  let mut pids = HashSet::new();
  pids.insert(Pid::new("nonhost", "$1"));
  assert!(pids.contains(&Pid::new("nonhost", "$1")));
  assert!(!pids.contains(&Pid::new("remote", "$1")));
}

#[test]
fn clones_preserve_identity() {
  let pid = Pid::new("nonhost", "$42");
  let clone = pid.clone();
  assert_eq!(pid, clone);
  assert_eq!(clone.address(), "nonhost");
  assert_eq!(clone.id(), "$42");
}

#[test]
fn display_joins_address_and_id() {
  assert_eq!(Pid::new("nonhost", "$7").to_string(), "nonhost/$7");
}

#[test]
fn telling_an_unregistered_pid_completes_without_error() {
  let pid = Pid::new("nonhost", "$999");
  pid.tell(String::from("into the void"));
  pid.send_system_message(SystemMessage::Resume);
  pid.stop();
}
