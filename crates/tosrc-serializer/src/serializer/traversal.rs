//! Per-call traversal state.

use super::{CircularReference, Rendered};
use crate::config::{CycleDetection, ExhaustedContainer, SerializerConfig};
use crate::literal;
use crate::sink::DiagnosticSink;
use crate::writer::SourceWriter;
use std::collections::HashSet;
use std::fmt::Write as _;
use tosrc_value::{ArrayRef, ContainerId, Kind, ObjectRef, Value};

/// One step from a container to a member
enum PathSegment {
	Index(usize),
	Key(String),
}

/// A container whose members are being written
enum Frame {
	Array {
		array: ArrayRef,
		next: usize,
		depth: u32,
	},
	Object {
		object: ObjectRef,
		next: usize,
		depth: u32,
	},
}

impl Frame {
	fn id(&self) -> ContainerId {
		match self {
			Self::Array { array, .. } => array.id(),
			Self::Object { object, .. } => object.id(),
		}
	}

	/// Take the next member, with its key for objects
	fn advance(&mut self) -> (usize, u32, Option<(Option<String>, Value)>) {
		match self {
			Self::Array { array, next, depth } => {
				let index = *next;
				*next += 1;
				(index, *depth, array.get(index).map(|v| (None, v)))
			}
			Self::Object {
				object,
				next,
				depth,
			} => {
				let index = *next;
				*next += 1;
				(index, *depth, object.own_entry_at(index).map(|(k, v)| (Some(k), v)))
			}
		}
	}
}

/// State of a single top-level call: the output, the containers already
/// entered, the containers still open and the path to the value being
/// written.
///
/// Containers are walked with an explicit stack, so nesting depth is bounded
/// by memory rather than by the thread's stack.
pub(super) struct Traversal<'a> {
	config: &'a SerializerConfig,
	sink: &'a dyn DiagnosticSink,
	writer: SourceWriter,
	visited: HashSet<ContainerId>,
	stack: Vec<Frame>,
	path: Vec<PathSegment>,
	circular: Vec<CircularReference>,
}

impl<'a> Traversal<'a> {
	pub(super) fn new(config: &'a SerializerConfig, sink: &'a dyn DiagnosticSink) -> Self {
		Self {
			config,
			sink,
			writer: SourceWriter::new(),
			visited: HashSet::new(),
			stack: Vec::new(),
			path: Vec::new(),
			circular: Vec::new(),
		}
	}

	pub(super) fn run(mut self, value: &Value, depth: u32) -> Rendered {
		self.write_value(value, depth);

		while let Some(frame) = self.stack.last_mut() {
			let (index, depth, member) = frame.advance();
			match member {
				Some((key, member)) => {
					if index > 0 {
						self.writer.push_comma();
						self.path.pop();
					}
					match key {
						Some(key) => {
							self.writer.push_key(&key);
							self.path.push(PathSegment::Key(key));
						}
						None => self.path.push(PathSegment::Index(index)),
					}
					self.write_value(&member, depth);
				}
				None => {
					if index > 0 {
						self.path.pop();
					}
					if let Some(frame) = self.stack.pop() {
						match frame {
							Frame::Array { .. } => self.writer.close_array(),
							Frame::Object { .. } => self.writer.close_object(),
						}
						self.leave(frame.id());
					}
				}
			}
		}

		Rendered {
			source: self.writer.into_string(),
			circular_references: self.circular,
		}
	}

	/// Write a scalar in full, or open a container and push its frame
	fn write_value(&mut self, value: &Value, depth: u32) {
		match value {
			Value::Array(array) => self.open_array(array, depth),
			Value::RegExp(pattern) => self.writer.push(&pattern.to_string()),
			Value::Date(instant) => self.writer.push(&literal::instant(*instant)),
			Value::Object(object) => self.open_object(object, depth),
			Value::String(s) => self.writer.push_string_literal(s),
			Value::Function(callable) => self.writer.push(literal::callable(callable)),
			Value::Bool(b) => self.writer.push(if *b { "true" } else { "false" }),
			Value::Number(n) => self.writer.push(&literal::number(*n)),
			Value::Null => self.writer.push("null"),
			Value::Undefined | Value::Unsupported(_) => self.writer.push_undefined(),
		}
	}

	fn open_array(&mut self, array: &ArrayRef, depth: u32) {
		if depth == 0 {
			self.write_exhausted(Kind::Sequence);
			return;
		}
		if !self.enter(array.id(), || Value::Array(array.clone())) {
			return;
		}
		self.writer.open_array();
		self.stack.push(Frame::Array {
			array: array.clone(),
			next: 0,
			depth: depth - 1,
		});
	}

	fn open_object(&mut self, object: &ObjectRef, depth: u32) {
		if depth == 0 {
			self.write_exhausted(Kind::Mapping);
			return;
		}
		if !self.enter(object.id(), || Value::Object(object.clone())) {
			return;
		}
		self.writer.open_object();
		self.stack.push(Frame::Object {
			object: object.clone(),
			next: 0,
			depth: depth - 1,
		});
	}

	fn write_exhausted(&mut self, kind: Kind) {
		match (self.config.exhausted_container, kind) {
			(ExhaustedContainer::Empty, Kind::Sequence) => self.writer.push("[]"),
			(ExhaustedContainer::Empty, _) => self.writer.push("{}"),
			(ExhaustedContainer::Undefined, _) => self.writer.push_undefined(),
		}
	}

	/// Mark a container as entered. If it already was, write `undefined`,
	/// report the cycle and return `false`.
	fn enter(&mut self, id: ContainerId, value: impl FnOnce() -> Value) -> bool {
		if self.visited.insert(id) {
			return true;
		}

		let value = value();
		let kind = value.kind();
		let path = self.render_path();
		tracing::debug!(%kind, %path, container = %id, "circular reference collapsed");
		if self.config.warn_on_cycle {
			let message = format!(
				"Circular reference detected within {} at {}",
				kind.as_str(),
				path
			);
			self.sink.warn(&message, &value);
		}
		self.circular.push(CircularReference { path, kind });
		self.writer.push_undefined();
		false
	}

	fn leave(&mut self, id: ContainerId) {
		if self.config.cycle_detection == CycleDetection::Ancestors {
			self.visited.remove(&id);
		}
	}

	fn render_path(&self) -> String {
		let mut out = String::from("$");
		for segment in &self.path {
			match segment {
				PathSegment::Index(i) => {
					let _ = write!(out, "[{}]", i);
				}
				PathSegment::Key(key) if is_identifier(key) => {
					out.push('.');
					out.push_str(key);
				}
				PathSegment::Key(key) => {
					out.push('[');
					literal::push_string(&mut out, key);
					out.push(']');
				}
			}
		}
		out
	}
}

fn is_identifier(key: &str) -> bool {
	let mut chars = key.chars();
	match chars.next() {
		Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
			chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
		}
		_ => false,
	}
}
