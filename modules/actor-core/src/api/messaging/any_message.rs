use core::any::type_name;
use core::fmt;
use std::sync::Arc;

use axon_utils_core_rs::ArcShared;

use crate::api::messaging::AnyMessageValue;

/// Type-erased user message payload.
///
/// Constructed with exclusive ownership of the payload; cloning shares it.
/// The mailbox clones the containing envelope when staging a message on the
/// actor context, so the invoker and statistics observers may hold the
/// payload concurrently for the duration of one invocation.
#[derive(Clone)]
pub struct AnyMessage {
  value:     ArcShared<dyn AnyMessageValue>,
  type_name: &'static str,
}

impl AnyMessage {
  /// Wraps a payload value.
  #[must_use]
  pub fn new<M>(value: M) -> Self
  where
    M: AnyMessageValue, {
    Self { value: ArcShared::from_arc(Arc::new(value)), type_name: type_name::<M>() }
  }

  /// Borrows the payload as `M`, when it is one.
  #[must_use]
  pub fn downcast_ref<M>(&self) -> Option<&M>
  where
    M: AnyMessageValue, {
    let value: &dyn AnyMessageValue = &*self.value;
    AnyMessageValue::as_any(value).downcast_ref::<M>()
  }

  /// Returns true when the payload is an `M`.
  #[must_use]
  pub fn is<M>(&self) -> bool
  where
    M: AnyMessageValue, {
    let value: &dyn AnyMessageValue = &*self.value;
    AnyMessageValue::as_any(value).is::<M>()
  }

  /// Name of the concrete payload type, for diagnostics.
  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// Returns true when both handles share one payload allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    self.value.ptr_eq(&other.value)
  }
}

impl fmt::Debug for AnyMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AnyMessage").field("type_name", &self.type_name).finish()
  }
}
