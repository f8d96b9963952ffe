use core::fmt;


/// Lifecycle and control signals carried on the system queue.
///
/// These are the runtime's sentinel messages: field-less discriminants with
/// no destructor, so an instance survives any number of send cycles and its
/// identity is the discriminant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemMessage {
  /// Delivered once per actor incarnation, before any user message.
  Started,
  /// Instructs the actor to stop accepting work.
  Stop,
  /// Halts user message processing until [`SystemMessage::Resume`].
  Suspend,
  /// Resumes user message processing.
  Resume,
}

impl SystemMessage {
  /// Stable name of the signal.
  #[must_use]
  pub const fn as_str(&self) -> &'static str {
    match self {
      | SystemMessage::Started => "started",
      | SystemMessage::Stop => "stop",
      | SystemMessage::Suspend => "suspend",
      | SystemMessage::Resume => "resume",
    }
  }
}

impl fmt::Display for SystemMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
