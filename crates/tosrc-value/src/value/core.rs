//! Core Value enum definition.

use super::{ArrayRef, Callable, Instant, ObjectRef, Pattern};
use std::fmt;

/// A runtime value of the host language.
///
/// The set of variants is closed. Host values with no counterpart here
/// (symbols, host objects, XML nodes) are carried as
/// [`Value::Unsupported`] with the host's type tag.
///
/// ## Example
///
/// ```rust
/// use tosrc_value::{Kind, Value};
///
/// let number = Value::from(42);
/// let text = Value::from("hello");
/// let list = Value::from(vec![1, 2, 3]);
///
/// assert_eq!(number.kind(), Kind::Numeric);
/// assert_eq!(text.kind(), Kind::Text);
/// assert_eq!(list.kind(), Kind::Sequence);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	// -------------------------------------------------------------------------
	// Containers (shared handles)
	// -------------------------------------------------------------------------
	/// Array-like container
	Array(ArrayRef),
	/// Plain object (key to value mapping)
	Object(ObjectRef),

	// -------------------------------------------------------------------------
	// Primitives
	// -------------------------------------------------------------------------
	/// String value
	String(String),
	/// Boolean value
	Bool(bool),
	/// Number value (the host has a single double-precision number type)
	Number(f64),
	/// `null`
	Null,
	/// `undefined`
	Undefined,

	// -------------------------------------------------------------------------
	// Objects with a literal form of their own
	// -------------------------------------------------------------------------
	/// Function value
	Function(Callable),
	/// Regular expression
	RegExp(Pattern),
	/// Date value
	Date(Instant),

	/// A host value with no literal form, tagged with its host type name
	Unsupported(String),
}

/// Classification of a [`Value`].
///
/// Variants are declared in dispatch priority order: a value that could be
/// seen as more than one kind by the host (an array is also an object) is
/// classified as the earliest matching kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
	/// Ordered, indexable container
	Sequence,
	/// Regular expression
	Pattern,
	/// Point in time
	Instant,
	/// Key to value container
	Mapping,
	/// String
	Text,
	/// Function
	Callable,
	/// `true` or `false`
	Boolean,
	/// Number
	Numeric,
	/// `null`
	Null,
	/// `undefined`
	Absent,
	/// Anything else
	Unsupported,
}

impl Kind {
	/// Returns `true` for the container kinds ([`Kind::Sequence`] and
	/// [`Kind::Mapping`]).
	#[must_use]
	pub fn is_container(self) -> bool {
		matches!(self, Self::Sequence | Self::Mapping)
	}

	/// Host-facing name of the kind, as used in diagnostics.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Sequence => "array",
			Self::Pattern => "regexp",
			Self::Instant => "date",
			Self::Mapping => "object",
			Self::Text => "string",
			Self::Callable => "function",
			Self::Boolean => "boolean",
			Self::Numeric => "number",
			Self::Null => "null",
			Self::Absent => "undefined",
			Self::Unsupported => "unsupported",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Classify this value.
	///
	/// # Example
	///
	/// ```rust
	/// use tosrc_value::{Kind, Value};
	///
	/// assert_eq!(Value::Null.kind(), Kind::Null);
	/// assert_eq!(Value::Undefined.kind(), Kind::Absent);
	/// assert_eq!(Value::Unsupported("Symbol".into()).kind(), Kind::Unsupported);
	/// ```
	#[must_use]
	pub fn kind(&self) -> Kind {
		match self {
			Self::Array(_) => Kind::Sequence,
			Self::RegExp(_) => Kind::Pattern,
			Self::Date(_) => Kind::Instant,
			Self::Object(_) => Kind::Mapping,
			Self::String(_) => Kind::Text,
			Self::Function(_) => Kind::Callable,
			Self::Bool(_) => Kind::Boolean,
			Self::Number(_) => Kind::Numeric,
			Self::Null => Kind::Null,
			Self::Undefined => Kind::Absent,
			Self::Unsupported(_) => Kind::Unsupported,
		}
	}

	/// Returns `true` if this value is `null` or `undefined`.
	#[must_use]
	pub fn is_nullish(&self) -> bool {
		matches!(self, Self::Null | Self::Undefined)
	}

	/// Returns the array handle if this value is an array.
	#[must_use]
	pub fn as_array(&self) -> Option<&ArrayRef> {
		match self {
			Self::Array(a) => Some(a),
			_ => None,
		}
	}

	/// Returns the object handle if this value is a plain object.
	#[must_use]
	pub fn as_object(&self) -> Option<&ObjectRef> {
		match self {
			Self::Object(o) => Some(o),
			_ => None,
		}
	}

	/// Returns the string slice if this value is a string.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the number if this value is a number.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}
}

impl Default for Value {
	/// Returns `undefined`.
	fn default() -> Self {
		Self::Undefined
	}
}
