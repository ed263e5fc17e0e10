//! Runtime value model.
//!
//! # Examples
//!
//! ```rust
//! use tosrc::value::{ObjectRef, Value};
//!
//! let object = ObjectRef::from_entries([("a", Value::from(1))]);
//! assert_eq!(object.len(), 1);
//! ```

pub use tosrc_value::*;
