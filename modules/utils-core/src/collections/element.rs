use core::fmt::Debug;

/// Fundamental constraints for elements that can be stored in the workspace
/// collections.
///
/// Elements cross thread boundaries when queues are shared between
/// producers, so `Send + Sync` is demanded in addition to `Debug` (used by
/// diagnostics) and `'static`.
pub trait Element: Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Debug + Send + Sync + 'static {}
