use std::fmt;
use std::ops::Deref;
use std::sync::Arc;


/// Shared-ownership handle used across the workspace.
///
/// A thin wrapper around [`Arc`] that names the sharing discipline at API
/// boundaries: values handed out as `ArcShared` are meant to be retained and
/// cloned by multiple owners. Unsized targets (trait objects) are reached via
/// [`ArcShared::from_arc`], letting the unsize coercion happen on the inner
/// `Arc`.
pub struct ArcShared<T: ?Sized> {
  inner: Arc<T>,
}

impl<T> ArcShared<T> {
  /// Wraps a freshly allocated value.
  pub fn new(value: T) -> Self {
    Self { inner: Arc::new(value) }
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Wraps an existing `Arc`, including `Arc`s to trait objects.
  pub fn from_arc(inner: Arc<T>) -> Self {
    Self { inner }
  }

  /// Unwraps the handle into the underlying `Arc`.
  #[must_use]
  pub fn into_arc(self) -> Arc<T> {
    self.inner
  }

  /// Returns true when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }

  /// Executes the provided closure with a shared reference to the value.
  pub fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> R {
    f(&self.inner)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner) }
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.inner
  }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.inner, f)
  }
}

impl<T: ?Sized> From<Arc<T>> for ArcShared<T> {
  fn from(inner: Arc<T>) -> Self {
    Self::from_arc(inner)
  }
}
