//! The serializer.
//!
//! [`Serializer`] holds configuration and the diagnostic sink and can be
//! reused freely. All per-call state (the output buffer and the set of
//! containers already entered) lives in a traversal created for each call
//! and dropped when the call returns, so calls never observe each other.

mod traversal;

use crate::config::{NegativeDepthPolicy, SerializerConfig};
use crate::error::SerializeError;
use crate::sink::{DiagnosticSink, TracingSink};
use std::sync::Arc;
use tosrc_value::{Kind, Value};
use traversal::Traversal;

/// A circular reference that was collapsed to `undefined`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircularReference {
	/// Location of the collapsed reference, e.g. `$.self` or `$[0].next`
	pub path: String,
	/// Kind of the container that was reached again
	pub kind: Kind,
}

/// Result of [`Serializer::serialize_report`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
	/// The source text
	pub source: String,
	/// Circular references found, in output order
	pub circular_references: Vec<CircularReference>,
}

/// Serializes values into source text.
///
/// # Example
///
/// ```rust
/// use tosrc_serializer::Serializer;
/// use tosrc_value::Value;
///
/// let serializer = Serializer::new();
/// let value = Value::from(vec![Value::from(1), Value::from(2), Value::from("3")]);
///
/// assert_eq!(serializer.render(&value), r#"[1, 2, "3"]"#);
/// ```
#[derive(Clone)]
pub struct Serializer {
	config: SerializerConfig,
	sink: Arc<dyn DiagnosticSink>,
}

impl Default for Serializer {
	fn default() -> Self {
		Self::with_config(SerializerConfig::default())
	}
}

impl std::fmt::Debug for Serializer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Serializer")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

impl Serializer {
	/// Serializer with default configuration, warning through `tracing`
	pub fn new() -> Self {
		Self::default()
	}

	/// Serializer with the given configuration, warning through `tracing`
	pub fn with_config(config: SerializerConfig) -> Self {
		Self {
			config,
			sink: Arc::new(TracingSink),
		}
	}

	/// Replace the diagnostic sink
	pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
		self.sink = sink;
		self
	}

	/// The configuration in use
	pub fn config(&self) -> &SerializerConfig {
		&self.config
	}

	/// Turn an optional, possibly negative depth argument into a budget.
	///
	/// `None` selects the configured default. Negative values follow the
	/// configured [`NegativeDepthPolicy`].
	pub fn resolve_depth(&self, depth: Option<i64>) -> Result<u32, SerializeError> {
		match depth {
			None => Ok(self.config.default_depth),
			Some(d) if d < 0 => match self.config.negative_depth {
				NegativeDepthPolicy::ClampToZero => Ok(0),
				NegativeDepthPolicy::Reject => Err(SerializeError::NegativeDepth(d)),
			},
			Some(d) => Ok(u32::try_from(d).unwrap_or(u32::MAX)),
		}
	}

	/// Serialize `value` with an optional depth budget.
	///
	/// # Errors
	///
	/// Returns [`SerializeError::NegativeDepth`] for a negative depth when
	/// the policy is [`NegativeDepthPolicy::Reject`]. No value causes an
	/// error.
	pub fn serialize(&self, value: &Value, depth: Option<i64>) -> Result<String, SerializeError> {
		Ok(self.serialize_report(value, depth)?.source)
	}

	/// Like [`Serializer::serialize`], also returning the circular
	/// references that were collapsed.
	pub fn serialize_report(
		&self,
		value: &Value,
		depth: Option<i64>,
	) -> Result<Rendered, SerializeError> {
		let budget = self.resolve_depth(depth)?;
		Ok(self.run(value, budget))
	}

	/// Serialize with the configured default depth
	pub fn render(&self, value: &Value) -> String {
		self.run(value, self.config.default_depth).source
	}

	/// Serialize with an explicit depth budget
	pub fn render_with_depth(&self, value: &Value, depth: u32) -> String {
		self.run(value, depth).source
	}

	fn run(&self, value: &Value, depth: u32) -> Rendered {
		tracing::trace!(kind = %value.kind(), depth, "serializing value");
		Traversal::new(&self.config, self.sink.as_ref()).run(value, depth)
	}
}

/// Serialize `value` with the default configuration (depth 1)
///
/// ```rust
/// use tosrc_serializer::to_source;
/// use tosrc_value::Value;
///
/// assert_eq!(to_source(&Value::from(1)), "1");
/// assert_eq!(to_source(&Value::from(true)), "true");
/// assert_eq!(to_source(&Value::from("1")), r#""1""#);
/// ```
pub fn to_source(value: &Value) -> String {
	Serializer::new().render(value)
}

/// Serialize `value` with the default configuration and depth budget `depth`
pub fn to_source_with_depth(value: &Value, depth: u32) -> String {
	Serializer::new().render_with_depth(value, depth)
}

/// Method-call form of [`to_source`]
///
/// ```rust
/// use tosrc_serializer::ToSource;
/// use tosrc_value::Value;
///
/// assert_eq!(Value::Null.to_source(), "null");
/// ```
pub trait ToSource {
	/// Serialize with the default configuration (depth 1)
	fn to_source(&self) -> String;

	/// Serialize with the default configuration and the given depth budget
	fn to_source_with_depth(&self, depth: u32) -> String;
}

impl ToSource for Value {
	fn to_source(&self) -> String {
		to_source(self)
	}

	fn to_source_with_depth(&self, depth: u32) -> String {
		to_source_with_depth(self, depth)
	}
}
