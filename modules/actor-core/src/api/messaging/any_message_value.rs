use core::any::Any;

/// Bound required for values carried as user message payloads.
///
/// Payloads cross thread boundaries inside mailbox queues, hence
/// `Send + Sync`; `Any` enables receivers to downcast back to the concrete
/// type.
pub trait AnyMessageValue: Any + Send + Sync {
  /// Upcasts to [`Any`] for downcasting by receivers.
  fn as_any(&self) -> &dyn Any;
}

impl<T> AnyMessageValue for T
where
  T: Any + Send + Sync,
{
  fn as_any(&self) -> &dyn Any {
    self
  }
}
