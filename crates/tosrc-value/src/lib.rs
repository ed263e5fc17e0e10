//! # tosrc-value
//!
//! Runtime value model for the tosrc serializer.
//!
//! Values mirror the kinds a JavaScript runtime hands to a debugging or
//! logging helper: arrays, plain objects, strings, booleans, numbers,
//! `null`, `undefined`, functions, regular expressions and dates. Anything
//! else is carried as [`Value::Unsupported`].
//!
//! ## Containers
//!
//! Arrays and objects are shared handles ([`ArrayRef`], [`ObjectRef`]).
//! Cloning a handle aliases the same container, so a container can be
//! placed inside itself:
//!
//! ```rust
//! use tosrc_value::{ObjectRef, Value};
//!
//! let x = ObjectRef::new();
//! x.insert("self", Value::Object(x.clone()));
//!
//! assert_eq!(x.get("self"), Some(Value::Object(x.clone())));
//! ```
//!
//! Handles compare by identity, like the host language does.
//!
//! ## Architecture
//!
//! - [`value`]: the [`Value`] enum, its [`Kind`] classification and
//!   conversions
//! - [`error`]: construction errors ([`ValueError`])

pub mod error;
pub mod value;

pub use error::ValueError;
pub use value::{
	ArrayRef, Callable, ContainerId, Instant, Kind, ObjectRef, Pattern, PatternFlags, Value,
};
