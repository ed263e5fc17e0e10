//! Source writer helper for constructing literal text.
//!
//! This module provides the [`SourceWriter`] type, the output buffer the
//! serializer appends literals, brackets and separators to.

use crate::literal;

/// Output buffer for source text
///
/// # Examples
///
/// ```rust
/// use tosrc_serializer::SourceWriter;
///
/// let mut writer = SourceWriter::new();
/// writer.open_array();
/// writer.push("1");
/// writer.push_comma();
/// writer.push_string_literal("two");
/// writer.close_array();
///
/// assert_eq!(writer.into_string(), r#"[1, "two"]"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceWriter {
	/// The source text being constructed
	source: String,
}

impl SourceWriter {
	/// Create a new, empty writer
	pub fn new() -> Self {
		Self::default()
	}

	/// Push raw text
	pub fn push(&mut self, s: &str) {
		self.source.push_str(s);
	}

	/// Push the separator between elements or members
	pub fn push_comma(&mut self) {
		self.source.push_str(", ");
	}

	/// Push a quoted, escaped string literal
	pub fn push_string_literal(&mut self, s: &str) {
		literal::push_string(&mut self.source, s);
	}

	/// Push an object member key followed by the key separator
	pub fn push_key(&mut self, key: &str) {
		literal::push_string(&mut self.source, key);
		self.source.push_str(": ");
	}

	/// Push `undefined`
	pub fn push_undefined(&mut self) {
		self.source.push_str("undefined");
	}

	/// Open an array literal
	pub fn open_array(&mut self) {
		self.source.push('[');
	}

	/// Close an array literal
	pub fn close_array(&mut self) {
		self.source.push(']');
	}

	/// Open an object literal
	pub fn open_object(&mut self) {
		self.source.push('{');
	}

	/// Close an object literal
	pub fn close_object(&mut self) {
		self.source.push('}');
	}

	/// Get the text written so far
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Length of the text written so far, in bytes
	pub fn len(&self) -> usize {
		self.source.len()
	}

	/// Returns `true` if nothing has been written
	pub fn is_empty(&self) -> bool {
		self.source.is_empty()
	}

	/// Consume the writer and return the text
	pub fn into_string(self) -> String {
		self.source
	}
}
