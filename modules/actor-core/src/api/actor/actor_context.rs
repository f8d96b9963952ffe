use spin::Mutex;

use crate::api::actor::{Actor, ActorFailure, ActorProducer, Context};
use crate::api::mailbox::MessageInvoker;
use crate::api::messaging::{MessageEnvelope, SystemMessage};
use crate::api::process::Pid;


/// Lifecycle state of an actor context.
///
/// The core exercises only `None → Alive` (incarnation at construction);
/// the remaining transitions are reserved for extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
  /// Constructed, behavior not yet incarnated.
  None,
  /// Behavior incarnated and receiving.
  Alive,
  /// Reserved: behavior is being re-incarnated.
  Restarting,
  /// Reserved: the actor is shutting down.
  Stopping,
}

/// Per-actor state bound to a mailbox as its invoker.
///
/// Holds the incarnated behavior, the currently staged envelope, and an
/// optional parent PID. The mailbox serializes all invocations, so the
/// interior cell is only ever contended by short stage/unstage critical
/// sections.
pub struct ActorContext {
  parent:   Option<Pid>,
  producer: ActorProducer,
  cell:     Mutex<ContextCell>,
}

struct ContextCell {
  state:   ContextState,
  message: Option<MessageEnvelope>,
  actor:   Option<Box<dyn Actor>>,
}

impl ActorContext {
  /// Creates the context and immediately incarnates the behavior.
  #[must_use]
  pub fn new(producer: ActorProducer, parent: Option<Pid>) -> Self {
    let context =
      Self { parent, producer, cell: Mutex::new(ContextCell { state: ContextState::None, message: None, actor: None }) };
    context.incarnate();
    context
  }

  /// Current lifecycle state.
  #[must_use]
  pub fn state(&self) -> ContextState {
    self.cell.lock().state
  }

  fn incarnate(&self) {
    let actor = self.producer.with_ref(|produce| produce());
    let mut cell = self.cell.lock();
    cell.state = ContextState::Alive;
    cell.actor = Some(actor);
  }

  /// Stages the envelope, runs the behavior, and clears the slot so shared
  /// ownership is never retained across invocations. The behavior is taken
  /// out of the cell for the duration of the call, letting `receive` read
  /// the context without holding the cell lock.
  fn process_message(&self, envelope: &MessageEnvelope) -> Result<(), ActorFailure> {
    let mut actor = {
      let mut cell = self.cell.lock();
      cell.message = Some(envelope.clone());
      cell.actor.take()
    };
    let result = match actor.as_mut() {
      | Some(actor) => actor.receive(self),
      | None => Ok(()),
    };
    let mut cell = self.cell.lock();
    cell.actor = actor;
    cell.message = None;
    result
  }
}

impl Context for ActorContext {
  fn message(&self) -> Option<MessageEnvelope> {
    self.cell.lock().message.clone()
  }

  fn parent(&self) -> Option<&Pid> {
    self.parent.as_ref()
  }
}

impl MessageInvoker for ActorContext {
  fn invoke_system_message(&self, message: &MessageEnvelope) -> Result<(), ActorFailure> {
    match message.system_message() {
      // Started is promoted to a user-visible receive so the actor observes
      // its own construction.
      | Some(SystemMessage::Started) => self.invoke_user_message(message),
      | _ => Ok(()),
    }
  }

  fn invoke_user_message(&self, message: &MessageEnvelope) -> Result<(), ActorFailure> {
    self.process_message(message)
  }

  fn escalate_failure(&self, reason: ActorFailure, message: Option<&MessageEnvelope>) {
    tracing::error!(failure = %reason, message = ?message, "actor failure absorbed");
  }
}
