use std::sync::Arc;

use axon_utils_core_rs::ArcShared;

use crate::api::actor::{Actor, ActorContext, ActorProducer};
use crate::api::dispatch::{Dispatcher, DispatcherHandle, SynchronousDispatcher};
use crate::api::mailbox::{DefaultMailbox, Mailbox, MailboxHandle, MessageInvokerHandle};
use crate::api::messaging::{MessageEnvelope, SystemMessage};
use crate::api::process::{LocalProcess, Pid, ProcessHandle, ProcessRegistry, SpawnError};

/// Factory producing a fresh mailbox per spawned actor.
pub type MailboxProducer = ArcShared<dyn Fn() -> MailboxHandle + Send + Sync>;

/// Strategy executing the spawn steps for a named actor.
pub type Spawner = ArcShared<dyn Fn(&str, &Props, Option<&Pid>) -> Result<Pid, SpawnError> + Send + Sync>;

/// Spawn configuration: behavior producer, mailbox producer, dispatcher,
/// and spawner strategy.
///
/// Defaults: an unbounded [`DefaultMailbox`] without observers, the
/// synchronous dispatcher, and the spawner described below.
#[derive(Clone)]
pub struct Props {
  producer:         ActorProducer,
  mailbox_producer: MailboxProducer,
  dispatcher:       DispatcherHandle,
  spawner:          Spawner,
}

impl Props {
  /// Creates props around a behavior producer.
  #[must_use]
  pub fn from_producer<F>(producer: F) -> Self
  where
    F: Fn() -> Box<dyn Actor> + Send + Sync + 'static, {
    Self {
      producer:         ArcShared::from_arc(Arc::new(producer)),
      mailbox_producer: ArcShared::from_arc(Arc::new(|| DefaultMailbox::unbounded().into_handle())),
      dispatcher:       SynchronousDispatcher::default().into_handle(),
      spawner:          ArcShared::from_arc(Arc::new(Props::default_spawner)),
    }
  }

  /// Replaces the behavior producer.
  #[must_use]
  pub fn with_producer<F>(mut self, producer: F) -> Self
  where
    F: Fn() -> Box<dyn Actor> + Send + Sync + 'static, {
    self.producer = ArcShared::from_arc(Arc::new(producer));
    self
  }

  /// Replaces the mailbox producer.
  #[must_use]
  pub fn with_mailbox_producer<F>(mut self, mailbox_producer: F) -> Self
  where
    F: Fn() -> MailboxHandle + Send + Sync + 'static, {
    self.mailbox_producer = ArcShared::from_arc(Arc::new(mailbox_producer));
    self
  }

  /// Replaces the dispatcher.
  #[must_use]
  pub fn with_dispatcher<D>(mut self, dispatcher: D) -> Self
  where
    D: Dispatcher + 'static, {
    self.dispatcher = ArcShared::from_arc(Arc::new(dispatcher));
    self
  }

  /// Replaces the spawner strategy.
  #[must_use]
  pub fn with_spawner<F>(mut self, spawner: F) -> Self
  where
    F: Fn(&str, &Props, Option<&Pid>) -> Result<Pid, SpawnError> + Send + Sync + 'static, {
    self.spawner = ArcShared::from_arc(Arc::new(spawner));
    self
  }

  /// The behavior producer.
  #[must_use]
  pub fn producer(&self) -> &ActorProducer {
    &self.producer
  }

  /// The mailbox producer.
  #[must_use]
  pub fn mailbox_producer(&self) -> &MailboxProducer {
    &self.mailbox_producer
  }

  /// The dispatcher bound to spawned mailboxes.
  #[must_use]
  pub fn dispatcher(&self) -> &DispatcherHandle {
    &self.dispatcher
  }

  /// Runs the spawner for `name` under the optional parent.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameAlreadyExists`] when the registry already
  /// holds a process under `name`.
  pub fn spawn(&self, name: &str, parent: Option<&Pid>) -> Result<Pid, SpawnError> {
    self.spawner.with_ref(|spawner| spawner(name, self, parent))
  }

  /// The default spawn steps: build the mailbox, register a local process
  /// under `name`, incarnate the context, bind it with the dispatcher,
  /// post `Started`, and start the mailbox.
  fn default_spawner(name: &str, props: &Props, parent: Option<&Pid>) -> Result<Pid, SpawnError> {
    let mailbox = props.mailbox_producer.with_ref(|produce| produce());
    let process: ProcessHandle = ArcShared::from_arc(Arc::new(LocalProcess::new(mailbox.clone())));
    let pid = ProcessRegistry::global().try_add(name, process)?;
    let invoker: MessageInvokerHandle =
      ArcShared::from_arc(Arc::new(ActorContext::new(props.producer.clone(), parent.cloned())));
    mailbox.register_handlers(invoker, props.dispatcher.clone());
    mailbox.post_system_message(MessageEnvelope::system(SystemMessage::Started));
    mailbox.start();
    Ok(pid)
  }
}
