//! Shared-ownership primitives.

mod shared;

pub use shared::ArcShared;
