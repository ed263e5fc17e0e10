//! Function values.

use regex::Regex;
use std::sync::LazyLock;

/// How the host prints a built-in routine: `function name() { [native code] }`
static NATIVE_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^function (\w+)\(\) \{\s*\[native code\]\s*\}$")
		.expect("native function pattern is valid")
});

/// A function value.
///
/// Script functions keep the source text the host recorded for them.
/// Built-in routines have no source; only their name is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Callable {
	/// Function defined in script, with its source text
	Script {
		/// Function name, if it has one
		name: Option<String>,
		/// Source text as reported by the host
		source: String,
	},
	/// Built-in routine without accessible source
	Native {
		/// Name the routine is reachable under
		name: String,
	},
}

impl Callable {
	/// Script function from its source text
	pub fn script(source: impl Into<String>) -> Self {
		Self::Script {
			name: None,
			source: source.into(),
		}
	}

	/// Named script function from its source text
	pub fn named_script(name: impl Into<String>, source: impl Into<String>) -> Self {
		Self::Script {
			name: Some(name.into()),
			source: source.into(),
		}
	}

	/// Built-in routine
	pub fn native(name: impl Into<String>) -> Self {
		Self::Native { name: name.into() }
	}

	/// Build a callable from the text the host prints for a function.
	///
	/// The host's placeholder for built-ins is recognised and turned into
	/// [`Callable::Native`]; anything else is script source.
	///
	/// # Example
	///
	/// ```rust
	/// use tosrc_value::Callable;
	///
	/// assert_eq!(
	///     Callable::from_source_text("function Date() { [native code] }"),
	///     Callable::native("Date")
	/// );
	/// assert_eq!(
	///     Callable::from_source_text("function () { return 1; }"),
	///     Callable::script("function () { return 1; }")
	/// );
	/// ```
	pub fn from_source_text(text: &str) -> Self {
		match NATIVE_SOURCE.captures(text) {
			Some(caps) => Self::native(&caps[1]),
			None => Self::script(text),
		}
	}

	/// Function name, if known
	#[must_use]
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Script { name, .. } => name.as_deref(),
			Self::Native { name } => Some(name),
		}
	}

	/// Source text, if the function has any
	#[must_use]
	pub fn source(&self) -> Option<&str> {
		match self {
			Self::Script { source, .. } => Some(source),
			Self::Native { .. } => None,
		}
	}

	/// Returns `true` for built-in routines
	#[must_use]
	pub fn is_native(&self) -> bool {
		matches!(self, Self::Native { .. })
	}
}
