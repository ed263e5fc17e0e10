//! Shared container handles.
//!
//! Arrays and objects are reference types in the host language: copying a
//! variable aliases the container. [`ArrayRef`] and [`ObjectRef`] model this
//! with an `Arc` around a lock, so a container may (directly or through other
//! containers) hold a handle to itself.

use super::Value;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Identity token of a container.
///
/// Two handles have the same id iff they refer to the same container. The id
/// is only meaningful while the container is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

impl fmt::Display for ContainerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:x}", self.0)
	}
}

fn id_of<T>(arc: &Arc<T>) -> ContainerId {
	ContainerId(Arc::as_ptr(arc) as *const () as usize)
}

// -----------------------------------------------------------------------------
// Arrays
// -----------------------------------------------------------------------------

/// Handle to a shared array.
///
/// # Example
///
/// ```rust
/// use tosrc_value::{ArrayRef, Value};
///
/// let a = ArrayRef::new();
/// a.push(Value::from(1));
/// a.push(Value::from("two"));
///
/// let alias = a.clone();
/// alias.push(Value::Null);
///
/// assert_eq!(a.len(), 3);
/// assert_eq!(a, alias);
/// ```
#[derive(Clone, Default)]
pub struct ArrayRef(Arc<RwLock<Vec<Value>>>);

impl ArrayRef {
	/// Create a new empty array
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an array holding `items`
	pub fn from_vec(items: Vec<Value>) -> Self {
		Self(Arc::new(RwLock::new(items)))
	}

	/// Identity of the underlying array
	#[must_use]
	pub fn id(&self) -> ContainerId {
		id_of(&self.0)
	}

	/// Returns `true` if both handles refer to the same array
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}

	/// Append an element
	pub fn push(&self, value: Value) {
		self.0.write().push(value);
	}

	/// Element at `index`, if present
	#[must_use]
	pub fn get(&self, index: usize) -> Option<Value> {
		self.0.read().get(index).cloned()
	}

	/// Store `value` at `index`.
	///
	/// Writing past the end grows the array, filling the gap with
	/// `undefined` as the host does for sparse assignment.
	pub fn set(&self, index: usize, value: Value) {
		let mut items = self.0.write();
		if index >= items.len() {
			items.resize(index + 1, Value::Undefined);
		}
		items[index] = value;
	}

	/// Number of elements
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` if the array has no elements
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	/// Snapshot of the elements
	#[must_use]
	pub fn to_vec(&self) -> Vec<Value> {
		self.0.read().clone()
	}
}

impl PartialEq for ArrayRef {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

// Printing the elements would not terminate for self-referencing arrays.
impl fmt::Debug for ArrayRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ArrayRef")
			.field("id", &self.id())
			.field("len", &self.len())
			.finish()
	}
}

// -----------------------------------------------------------------------------
// Objects
// -----------------------------------------------------------------------------

#[derive(Default)]
struct ObjectData {
	/// Own properties in insertion order
	properties: IndexMap<String, Value>,
	/// Object that inherited properties are looked up on
	prototype: Option<ObjectRef>,
}

/// Handle to a shared plain object.
///
/// An object owns its properties and may delegate lookups to a prototype
/// object. Only own properties take part in serialization; inherited ones
/// are visible through [`ObjectRef::get`] and [`ObjectRef::keys`].
///
/// # Example
///
/// ```rust
/// use tosrc_value::{ObjectRef, Value};
///
/// let proto = ObjectRef::new();
/// proto.insert("greeting", Value::from("hi"));
///
/// let obj = ObjectRef::with_prototype(proto);
/// obj.insert("name", Value::from("ada"));
///
/// assert_eq!(obj.get("greeting"), Some(Value::from("hi")));
/// assert_eq!(obj.own_keys(), vec!["name".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct ObjectRef(Arc<RwLock<ObjectData>>);

impl ObjectRef {
	/// Create a new empty object without a prototype
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a new empty object inheriting from `prototype`
	pub fn with_prototype(prototype: ObjectRef) -> Self {
		Self(Arc::new(RwLock::new(ObjectData {
			properties: IndexMap::new(),
			prototype: Some(prototype),
		})))
	}

	/// Create an object from own properties, keeping their order
	pub fn from_entries<K, I>(entries: I) -> Self
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, Value)>,
	{
		let properties = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
		Self(Arc::new(RwLock::new(ObjectData {
			properties,
			prototype: None,
		})))
	}

	/// Identity of the underlying object
	#[must_use]
	pub fn id(&self) -> ContainerId {
		id_of(&self.0)
	}

	/// Returns `true` if both handles refer to the same object
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}

	/// Set an own property, returning the previous own value.
	///
	/// Re-assigning an existing key keeps its enumeration position.
	pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.0.write().properties.insert(key.into(), value)
	}

	/// Delete an own property
	pub fn remove(&self, key: &str) -> Option<Value> {
		self.0.write().properties.shift_remove(key)
	}

	/// Own property `key`, ignoring the prototype chain
	#[must_use]
	pub fn get_own(&self, key: &str) -> Option<Value> {
		self.0.read().properties.get(key).cloned()
	}

	/// Property `key`, resolved through the prototype chain
	#[must_use]
	pub fn get(&self, key: &str) -> Option<Value> {
		let mut current = Some(self.clone());
		while let Some(obj) = current {
			let data = obj.0.read();
			if let Some(value) = data.properties.get(key) {
				return Some(value.clone());
			}
			current = data.prototype.clone();
		}
		None
	}

	/// Returns `true` if `key` is an own property
	#[must_use]
	pub fn has_own(&self, key: &str) -> bool {
		self.0.read().properties.contains_key(key)
	}

	/// Number of own properties
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.read().properties.len()
	}

	/// Returns `true` if the object has no own properties
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.read().properties.is_empty()
	}

	/// Own property names in enumeration order
	#[must_use]
	pub fn own_keys(&self) -> Vec<String> {
		self.0.read().properties.keys().cloned().collect()
	}

	/// All enumerable property names: own keys first, then inherited keys
	/// not shadowed by a nearer object.
	#[must_use]
	pub fn keys(&self) -> Vec<String> {
		let mut seen = HashSet::new();
		let mut keys = Vec::new();
		let mut current = Some(self.clone());
		while let Some(obj) = current {
			let data = obj.0.read();
			for key in data.properties.keys() {
				if seen.insert(key.clone()) {
					keys.push(key.clone());
				}
			}
			current = data.prototype.clone();
		}
		keys
	}

	/// Snapshot of the own properties in enumeration order
	#[must_use]
	pub fn own_entries(&self) -> Vec<(String, Value)> {
		self.0
			.read()
			.properties
			.iter()
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}

	/// Own property at enumeration position `index`
	#[must_use]
	pub fn own_entry_at(&self, index: usize) -> Option<(String, Value)> {
		self.0
			.read()
			.properties
			.get_index(index)
			.map(|(k, v)| (k.clone(), v.clone()))
	}

	/// The prototype object, if any
	#[must_use]
	pub fn prototype(&self) -> Option<ObjectRef> {
		self.0.read().prototype.clone()
	}

	/// Replace the prototype.
	///
	/// Returns `false` and leaves the object unchanged if `prototype` would
	/// make the chain cyclic.
	pub fn set_prototype(&self, prototype: Option<ObjectRef>) -> bool {
		let mut current = prototype.clone();
		while let Some(obj) = current {
			if obj.ptr_eq(self) {
				return false;
			}
			current = obj.prototype();
		}
		self.0.write().prototype = prototype;
		true
	}
}

impl PartialEq for ObjectRef {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl fmt::Debug for ObjectRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ObjectRef")
			.field("id", &self.id())
			.field("keys", &self.own_keys())
			.finish()
	}
}

// -----------------------------------------------------------------------------
// Teardown
// -----------------------------------------------------------------------------

// The last handle to a container moves its members onto a work list before
// the container itself is freed, so long chains are released in a loop and
// not by nested drop calls.

impl Drop for ArrayRef {
	fn drop(&mut self) {
		if let Some(items) = Arc::get_mut(&mut self.0) {
			release(std::mem::take(items.get_mut()));
		}
	}
}

impl Drop for ObjectRef {
	fn drop(&mut self) {
		if let Some(data) = Arc::get_mut(&mut self.0) {
			let data = data.get_mut();
			let mut pending: Vec<Value> = std::mem::take(&mut data.properties)
				.into_values()
				.collect();
			if let Some(prototype) = data.prototype.take() {
				pending.push(Value::Object(prototype));
			}
			release(pending);
		}
	}
}

fn release(mut pending: Vec<Value>) {
	while let Some(value) = pending.pop() {
		match value {
			Value::Array(mut array) => {
				if let Some(items) = Arc::get_mut(&mut array.0) {
					pending.append(items.get_mut());
				}
			}
			Value::Object(mut object) => {
				if let Some(data) = Arc::get_mut(&mut object.0) {
					let data = data.get_mut();
					pending.extend(std::mem::take(&mut data.properties).into_values());
					if let Some(prototype) = data.prototype.take() {
						pending.push(Value::Object(prototype));
					}
				}
			}
			_ => {}
		}
	}
}
