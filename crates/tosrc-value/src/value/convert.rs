//! Conversions into [`Value`].

use super::{ArrayRef, Callable, Instant, ObjectRef, Pattern, Value};
use chrono::{DateTime, TimeZone};
use indexmap::IndexMap;

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

// The host has one number type; every Rust number widens (or rounds) to f64.
macro_rules! impl_from_number {
	($($t:ty),* $(,)?) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Self::Number(v as f64)
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl From<char> for Value {
	fn from(v: char) -> Self {
		Self::String(v.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	/// `None` becomes `null`.
	fn from(v: Option<T>) -> Self {
		v.map_or(Self::Null, Into::into)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	/// Builds a new array.
	fn from(v: Vec<T>) -> Self {
		Self::Array(ArrayRef::from_vec(v.into_iter().map(Into::into).collect()))
	}
}

impl<T: Into<Value>> FromIterator<T> for Value {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::Array(ArrayRef::from_vec(iter.into_iter().map(Into::into).collect()))
	}
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Value {
	/// Builds a new object with the map's entries as own properties.
	fn from(map: IndexMap<String, V>) -> Self {
		Self::Object(ObjectRef::from_entries(
			map.into_iter().map(|(k, v)| (k, v.into())),
		))
	}
}

impl From<ArrayRef> for Value {
	fn from(v: ArrayRef) -> Self {
		Self::Array(v)
	}
}

impl From<ObjectRef> for Value {
	fn from(v: ObjectRef) -> Self {
		Self::Object(v)
	}
}

impl From<Callable> for Value {
	fn from(v: Callable) -> Self {
		Self::Function(v)
	}
}

impl From<Pattern> for Value {
	fn from(v: Pattern) -> Self {
		Self::RegExp(v)
	}
}

impl From<Instant> for Value {
	fn from(v: Instant) -> Self {
		Self::Date(v)
	}
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
	/// Builds a date. A time value the host cannot represent becomes the
	/// invalid date, as `new Date(t)` does.
	fn from(dt: DateTime<Tz>) -> Self {
		Self::Date(Instant::try_from(dt).unwrap_or_else(|_| Instant::invalid()))
	}
}

impl From<serde_json::Value> for Value {
	/// Builds fresh containers from a JSON document, keeping key order.
	///
	/// # Example
	///
	/// ```rust
	/// use tosrc_value::Value;
	///
	/// let json = serde_json::json!({"b": 1, "a": [true, null]});
	/// let value = Value::from(json);
	///
	/// let obj = value.as_object().unwrap();
	/// assert_eq!(obj.own_keys(), vec!["b".to_string(), "a".to_string()]);
	/// ```
	fn from(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(b) => Self::Bool(b),
			serde_json::Value::Number(n) => n.as_f64().map_or(Self::Undefined, Self::Number),
			serde_json::Value::String(s) => Self::String(s),
			serde_json::Value::Array(items) => items.into_iter().collect(),
			serde_json::Value::Object(map) => Self::Object(ObjectRef::from_entries(
				map.into_iter().map(|(k, v)| (k, Self::from(v))),
			)),
		}
	}
}
