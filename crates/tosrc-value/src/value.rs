//! Value types.
//!
//! This module provides the [`Value`] enum and the types carried by its
//! variants.

mod callable;
mod container;
mod convert;
mod core;
mod instant;
mod pattern;

pub use self::core::{Kind, Value};
pub use callable::Callable;
pub use container::{ArrayRef, ContainerId, ObjectRef};
pub use instant::Instant;
pub use pattern::{Pattern, PatternFlags};

#[cfg(test)]
mod tests;
