//! Message payloads, system signals, and the queue envelope.

mod any_message;
mod any_message_value;
mod message_envelope;
mod system_message;

pub use any_message::AnyMessage;
pub use any_message_value::AnyMessageValue;
pub use message_envelope::MessageEnvelope;
pub use system_message::SystemMessage;
