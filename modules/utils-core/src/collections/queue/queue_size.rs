/// Number of elements a queue holds or may hold.
///
/// Unbounded queues report [`QueueSize::Limitless`] as their capacity while
/// still reporting an exact (point-in-time) length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// No bound is known or enforced.
  Limitless,
  /// An exact element count.
  Limited(usize),
}

impl QueueSize {
  /// Creates a bounded size.
  #[must_use]
  pub const fn limited(size: usize) -> Self {
    QueueSize::Limited(size)
  }

  /// Creates an unbounded size.
  #[must_use]
  pub const fn limitless() -> Self {
    QueueSize::Limitless
  }

  /// Returns true when the size carries no bound.
  #[must_use]
  pub const fn is_limitless(&self) -> bool {
    matches!(self, QueueSize::Limitless)
  }

  /// Converts to a `usize`, saturating to `usize::MAX` for limitless sizes.
  #[must_use]
  pub const fn to_usize(&self) -> usize {
    match self {
      | QueueSize::Limitless => usize::MAX,
      | QueueSize::Limited(size) => *size,
    }
  }

  /// Converts to an `Option`, mapping limitless to `None`.
  #[must_use]
  pub const fn to_option(&self) -> Option<usize> {
    match self {
      | QueueSize::Limitless => None,
      | QueueSize::Limited(size) => Some(*size),
    }
  }
}
