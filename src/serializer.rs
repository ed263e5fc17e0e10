//! Serialization of values into source text.
//!
//! # Examples
//!
//! ```rust
//! use tosrc::serializer::{Serializer, SerializerConfig};
//! use tosrc::value::Value;
//!
//! let serializer = Serializer::with_config(SerializerConfig::default().with_default_depth(2));
//! let value = Value::from(vec![Value::from(vec![1, 2])]);
//! assert_eq!(serializer.render(&value), "[[1, 2]]");
//! ```

pub use tosrc_serializer::*;
