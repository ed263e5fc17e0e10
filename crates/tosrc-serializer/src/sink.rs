//! Diagnostic sinks.
//!
//! The serializer reports circular references as warnings. Where they go is
//! up to the embedding application: [`TracingSink`] (the default) forwards
//! them to `tracing`, [`NullSink`] drops them and [`MemorySink`] keeps them
//! for inspection.

use parking_lot::Mutex;
use tosrc_value::Value;

/// Receiver of serializer warnings
pub trait DiagnosticSink: Send + Sync {
	/// Report a warning about `value`
	fn warn(&self, message: &str, value: &Value);
}

/// Sink that emits warnings as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn warn(&self, message: &str, value: &Value) {
		tracing::warn!(kind = %value.kind(), "{}", message);
	}
}

/// Sink that discards warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
	fn warn(&self, _message: &str, _value: &Value) {}
}

/// A recorded warning
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
	/// Warning text
	pub message: String,
	/// The value the warning is about
	pub value: Value,
}

/// Sink that stores warnings in memory
///
/// # Example
///
/// ```rust
/// use tosrc_serializer::{DiagnosticSink, MemorySink, Value};
///
/// let sink = MemorySink::new();
/// sink.warn("something odd", &Value::Null);
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.diagnostics()[0].message, "something odd");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
	diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
	/// Create an empty sink
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of the recorded warnings
	pub fn diagnostics(&self) -> Vec<Diagnostic> {
		self.diagnostics.lock().clone()
	}

	/// Number of recorded warnings
	pub fn len(&self) -> usize {
		self.diagnostics.lock().len()
	}

	/// Returns `true` if nothing was recorded
	pub fn is_empty(&self) -> bool {
		self.diagnostics.lock().is_empty()
	}

	/// Remove and return the recorded warnings
	pub fn take(&self) -> Vec<Diagnostic> {
		std::mem::take(&mut *self.diagnostics.lock())
	}
}

impl DiagnosticSink for MemorySink {
	fn warn(&self, message: &str, value: &Value) {
		self.diagnostics.lock().push(Diagnostic {
			message: message.to_string(),
			value: value.clone(),
		});
	}
}
