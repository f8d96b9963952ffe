use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use super::*;
use crate::api::actor::ActorFailure;
use crate::api::dispatch::{Dispatcher, Runnable, SynchronousDispatcher};
use crate::api::mailbox::traits::{MailboxStatistics, MessageInvoker};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Observed {
  System(SystemMessage),
  User(u64),
  Escalated(String),
}

struct RecordingInvoker {
  observed:  Mutex<Vec<Observed>>,
  in_flight: AtomicBool,
  fail_on:   Option<u64>,
}

impl RecordingInvoker {
  fn new() -> Arc<Self> {
    Self::failing_on(None)
  }

  fn failing_on(fail_on: Option<u64>) -> Arc<Self> {
    Arc::new(Self { observed: Mutex::new(Vec::new()), in_flight: AtomicBool::new(false), fail_on })
  }

  fn observed(&self) -> Vec<Observed> {
    self.observed.lock().unwrap().clone()
  }

  fn enter(&self) {
    assert!(!self.in_flight.swap(true, Ordering::SeqCst), "concurrent invocation detected");
  }

  fn exit(&self) {
    self.in_flight.store(false, Ordering::SeqCst);
  }
}

impl MessageInvoker for RecordingInvoker {
  fn invoke_system_message(&self, message: &MessageEnvelope) -> Result<(), ActorFailure> {
    self.enter();
    if let Some(signal) = message.system_message() {
      self.observed.lock().unwrap().push(Observed::System(signal));
    }
    self.exit();
    Ok(())
  }

  fn invoke_user_message(&self, message: &MessageEnvelope) -> Result<(), ActorFailure> {
    self.enter();
    let result = match message.downcast_ref::<u64>().copied() {
      | Some(value) if self.fail_on == Some(value) => Err(ActorFailure::from_message(format!("failed on {value}"))),
      | Some(value) => {
        self.observed.lock().unwrap().push(Observed::User(value));
        Ok(())
      },
      | None => Ok(()),
    };
    self.exit();
    result
  }

  fn escalate_failure(&self, reason: ActorFailure, _message: Option<&MessageEnvelope>) {
    self.observed.lock().unwrap().push(Observed::Escalated(reason.message().to_string()));
  }
}

struct CountingDispatcher {
  schedules:  AtomicUsize,
  throughput: usize,
}

impl CountingDispatcher {
  fn new(throughput: usize) -> Arc<Self> {
    Arc::new(Self { schedules: AtomicUsize::new(0), throughput })
  }

  fn schedules(&self) -> usize {
    self.schedules.load(Ordering::SeqCst)
  }
}

impl Dispatcher for CountingDispatcher {
  fn schedule(&self, runnable: Runnable) {
    self.schedules.fetch_add(1, Ordering::SeqCst);
    runnable();
  }

  fn throughput(&self) -> usize {
    self.throughput
  }
}

#[derive(Default)]
struct RecordingStatistics {
  started:  AtomicUsize,
  posted:   AtomicUsize,
  received: AtomicUsize,
  empty:    AtomicUsize,
}

impl MailboxStatistics for RecordingStatistics {
  fn mailbox_started(&self) {
    self.started.fetch_add(1, Ordering::SeqCst);
  }

  fn message_posted(&self, _message: &MessageEnvelope) {
    self.posted.fetch_add(1, Ordering::SeqCst);
  }

  fn message_received(&self, _message: &MessageEnvelope) {
    self.received.fetch_add(1, Ordering::SeqCst);
  }

  fn mailbox_empty(&self) {
    self.empty.fetch_add(1, Ordering::SeqCst);
  }
}

fn register(mailbox: &DefaultMailbox, invoker: &Arc<RecordingInvoker>, dispatcher: DispatcherHandle) {
  mailbox.register_handlers(ArcShared::from_arc(invoker.clone()), dispatcher);
}

#[test]
fn fresh_mailbox_is_idle_and_not_suspended() {
  let mailbox = DefaultMailbox::unbounded();
  assert_eq!(mailbox.status(), MailboxStatus::Idle);
  assert!(!mailbox.is_suspended());
}

#[test]
fn posts_before_register_handlers_are_buffered_without_scheduling() {
  let mailbox = DefaultMailbox::unbounded();
  mailbox.post_user_message(MessageEnvelope::user(1_u64));
  assert_eq!(mailbox.status(), MailboxStatus::Idle);

  let invoker = RecordingInvoker::new();
  register(&mailbox, &invoker, SynchronousDispatcher::default().into_handle());
  assert!(invoker.observed().is_empty());

  mailbox.post_user_message(MessageEnvelope::user(2_u64));
  assert_eq!(invoker.observed(), vec![Observed::User(1), Observed::User(2)]);
}

#[test]
fn delivers_user_messages_in_fifo_order() {
  let mailbox = DefaultMailbox::unbounded();
  let invoker = RecordingInvoker::new();
  register(&mailbox, &invoker, SynchronousDispatcher::default().into_handle());

  for value in 0..100_u64 {
    mailbox.post_user_message(MessageEnvelope::user(value));
  }

  let expected: Vec<Observed> = (0..100).map(Observed::User).collect();
  assert_eq!(invoker.observed(), expected);
  assert_eq!(mailbox.status(), MailboxStatus::Idle);
}

#[test]
fn system_messages_preempt_buffered_user_messages() {
  let mailbox = DefaultMailbox::unbounded();
  for value in 1..=3_u64 {
    mailbox.post_user_message(MessageEnvelope::user(value));
  }
  mailbox.post_system_message(MessageEnvelope::system(SystemMessage::Stop));

  let invoker = RecordingInvoker::new();
  register(&mailbox, &invoker, SynchronousDispatcher::default().into_handle());
  mailbox.post_user_message(MessageEnvelope::user(4_u64));

  assert_eq!(
    invoker.observed(),
    vec![
      Observed::System(SystemMessage::Stop),
      Observed::User(1),
      Observed::User(2),
      Observed::User(3),
      Observed::User(4),
    ]
  );
}

#[test]
fn suspend_halts_user_delivery_until_resume() {
  let mailbox = DefaultMailbox::unbounded();
  mailbox.post_user_message(MessageEnvelope::user(1_u64));
  mailbox.post_system_message(MessageEnvelope::system(SystemMessage::Suspend));

  let invoker = RecordingInvoker::new();
  register(&mailbox, &invoker, SynchronousDispatcher::new(1).into_handle());

  mailbox.post_user_message(MessageEnvelope::user(2_u64));
  assert_eq!(invoker.observed(), vec![Observed::System(SystemMessage::Suspend)]);
  assert!(mailbox.is_suspended());

  mailbox.post_system_message(MessageEnvelope::system(SystemMessage::Resume));
  assert!(!mailbox.is_suspended());
  assert_eq!(
    invoker.observed(),
    vec![
      Observed::System(SystemMessage::Suspend),
      Observed::System(SystemMessage::Resume),
      Observed::User(1),
      Observed::User(2),
    ]
  );
}

#[test]
fn suspended_mailbox_keeps_processing_system_messages() {
  let mailbox = DefaultMailbox::unbounded();
  let invoker = RecordingInvoker::new();
  register(&mailbox, &invoker, SynchronousDispatcher::default().into_handle());

  mailbox.post_system_message(MessageEnvelope::system(SystemMessage::Suspend));
  mailbox.post_user_message(MessageEnvelope::user(1_u64));
  mailbox.post_system_message(MessageEnvelope::system(SystemMessage::Stop));

  assert_eq!(
    invoker.observed(),
    vec![Observed::System(SystemMessage::Suspend), Observed::System(SystemMessage::Stop)]
  );

  mailbox.post_system_message(MessageEnvelope::system(SystemMessage::Resume));
  assert_eq!(
    invoker.observed(),
    vec![
      Observed::System(SystemMessage::Suspend),
      Observed::System(SystemMessage::Stop),
      Observed::System(SystemMessage::Resume),
      Observed::User(1),
    ]
  );
}

#[test]
fn throughput_bounds_each_pass_and_reschedules_for_the_rest() {
  let mailbox = DefaultMailbox::unbounded();
  for value in 0..9_u64 {
    mailbox.post_user_message(MessageEnvelope::user(value));
  }

  let invoker = RecordingInvoker::new();
  let dispatcher = CountingDispatcher::new(3);
  register(&mailbox, &invoker, ArcShared::from_arc(dispatcher.clone()));

  mailbox.post_user_message(MessageEnvelope::user(9_u64));

  let expected: Vec<Observed> = (0..10).map(Observed::User).collect();
  assert_eq!(invoker.observed(), expected);
  assert_eq!(dispatcher.schedules(), 4);
}

#[test]
fn failure_is_escalated_with_the_pass_ending_and_delivery_resumes() {
  let mailbox = DefaultMailbox::unbounded();
  let invoker = RecordingInvoker::failing_on(Some(2));
  register(&mailbox, &invoker, SynchronousDispatcher::default().into_handle());

  mailbox.post_user_message(MessageEnvelope::user(1_u64));
  mailbox.post_user_message(MessageEnvelope::user(2_u64));
  mailbox.post_user_message(MessageEnvelope::user(3_u64));

  assert_eq!(
    invoker.observed(),
    vec![Observed::User(1), Observed::Escalated(String::from("failed on 2")), Observed::User(3)]
  );
  assert_eq!(mailbox.status(), MailboxStatus::Idle);
}

#[test]
fn statistics_observers_see_the_mailbox_lifecycle() {
  let statistics = Arc::new(RecordingStatistics::default());
  let mailbox = DefaultMailbox::unbounded_with_statistics(vec![ArcShared::from_arc(statistics.clone())]);
  let invoker = RecordingInvoker::new();
  register(&mailbox, &invoker, SynchronousDispatcher::default().into_handle());

  mailbox.start();
  mailbox.post_user_message(MessageEnvelope::user(1_u64));
  mailbox.post_user_message(MessageEnvelope::user(2_u64));

  assert_eq!(statistics.started.load(Ordering::SeqCst), 1);
  assert_eq!(statistics.posted.load(Ordering::SeqCst), 2);
  assert_eq!(statistics.received.load(Ordering::SeqCst), 2);
  assert_eq!(statistics.empty.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_posters_never_lose_messages_and_never_overlap_invocations() {
  const POSTERS: u64 = 4;
  const PER_POSTER: u64 = 250;

  let mailbox = DefaultMailbox::unbounded();
  let invoker = RecordingInvoker::new();
  register(&mailbox, &invoker, SynchronousDispatcher::default().into_handle());

  let handles: Vec<_> = (0..POSTERS)
    .map(|poster| {
      let mailbox = mailbox.clone();
      thread::spawn(move || {
        for sequence in 0..PER_POSTER {
          mailbox.post_user_message(MessageEnvelope::user(poster * PER_POSTER + sequence));
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }

  let observed = invoker.observed();
  assert_eq!(observed.len(), (POSTERS * PER_POSTER) as usize);

  let mut last_seen = vec![None::<u64>; POSTERS as usize];
  for entry in &observed {
    let Observed::User(value) = entry else {
      panic!("unexpected entry: {entry:?}");
    };
    let poster = (value / PER_POSTER) as usize;
    let sequence = value % PER_POSTER;
    if let Some(previous) = last_seen[poster] {
      assert!(sequence > previous, "poster {poster} reordered: {sequence} after {previous}");
    }
    last_seen[poster] = Some(sequence);
  }
  assert_eq!(mailbox.status(), MailboxStatus::Idle);
}

#[test]
fn drain_runs_with_the_latch_held_busy() {
  struct LatchProbe {
    mailbox: DefaultMailbox,
  }

  impl MessageInvoker for LatchProbe {
    fn invoke_system_message(&self, _message: &MessageEnvelope) -> Result<(), ActorFailure> {
      Ok(())
    }

    fn invoke_user_message(&self, _message: &MessageEnvelope) -> Result<(), ActorFailure> {
      assert_eq!(self.mailbox.status(), MailboxStatus::Busy);
      Ok(())
    }

    fn escalate_failure(&self, _reason: ActorFailure, _message: Option<&MessageEnvelope>) {}
  }

  let mailbox = DefaultMailbox::unbounded();
  let probe = Arc::new(LatchProbe { mailbox: mailbox.clone() });
  mailbox.register_handlers(ArcShared::from_arc(probe), SynchronousDispatcher::default().into_handle());

  mailbox.post_user_message(MessageEnvelope::user(1_u64));
  assert_eq!(mailbox.status(), MailboxStatus::Idle);
}
