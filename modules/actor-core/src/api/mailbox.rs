//! The mailbox scheduling engine.

mod default_mailbox;
mod traits;
mod unbounded_mailbox_queue;

pub use default_mailbox::{DefaultMailbox, MailboxStatus};
pub use traits::{
  Mailbox, MailboxHandle, MailboxQueue, MailboxStatistics, MailboxStatisticsHandle, MessageInvoker,
  MessageInvokerHandle,
};
pub use unbounded_mailbox_queue::UnboundedMailboxQueue;
