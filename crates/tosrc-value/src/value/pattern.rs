//! Regular expression values.

use crate::error::ValueError;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Flags in the order the host prints them.
const FLAG_ORDER: [char; 8] = ['d', 'g', 'i', 'm', 's', 'u', 'v', 'y'];

/// Set of regular expression flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags(u8);

impl PatternFlags {
	/// Parse a flag string such as `"gi"`.
	///
	/// Rejects unknown flags, repeated flags and the `u`/`v` combination.
	pub fn parse(flags: &str) -> Result<Self, ValueError> {
		let mut bits = 0u8;
		for c in flags.chars() {
			let bit = Self::bit(c).ok_or(ValueError::InvalidPatternFlag(c))?;
			if bits & bit != 0 {
				return Err(ValueError::DuplicatePatternFlag(c));
			}
			bits |= bit;
		}
		let both = Self::bit('u').unwrap_or(0) | Self::bit('v').unwrap_or(0);
		if bits & both == both {
			return Err(ValueError::ConflictingPatternFlags);
		}
		Ok(Self(bits))
	}

	fn bit(flag: char) -> Option<u8> {
		FLAG_ORDER
			.iter()
			.position(|&c| c == flag)
			.map(|pos| 1u8 << pos)
	}

	/// Returns `true` if `flag` is set
	#[must_use]
	pub fn contains(self, flag: char) -> bool {
		Self::bit(flag).is_some_and(|bit| self.0 & bit != 0)
	}

	/// Returns `true` if no flag is set
	#[must_use]
	pub fn is_empty(self) -> bool {
		self.0 == 0
	}
}

impl fmt::Display for PatternFlags {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in FLAG_ORDER {
			if self.contains(c) {
				write!(f, "{c}")?;
			}
		}
		Ok(())
	}
}

/// A regular expression value: a pattern body and its flags.
///
/// # Example
///
/// ```rust
/// use tosrc_value::Pattern;
///
/// let p = Pattern::new("dasd", "ig").unwrap();
/// assert_eq!(p.to_string(), "/dasd/gi");
///
/// let slash = Pattern::new("a/b", "").unwrap();
/// assert_eq!(slash.source(), r"a\/b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
	body: String,
	flags: PatternFlags,
}

impl Pattern {
	/// Create a pattern from its body and flag string
	pub fn new(body: impl Into<String>, flags: &str) -> Result<Self, ValueError> {
		Ok(Self {
			body: body.into(),
			flags: PatternFlags::parse(flags)?,
		})
	}

	/// Parse a literal such as `/ab+c/gi`
	pub fn parse_literal(literal: &str) -> Result<Self, ValueError> {
		let malformed = || ValueError::MalformedPatternLiteral(literal.to_string());
		let rest = literal.strip_prefix('/').ok_or_else(malformed)?;
		let end = rest.rfind('/').ok_or_else(malformed)?;
		let (body, flags) = (&rest[..end], &rest[end + 1..]);
		if body.is_empty() {
			return Err(malformed());
		}
		Self::new(body, flags)
	}

	/// The body exactly as given
	#[must_use]
	pub fn body(&self) -> &str {
		&self.body
	}

	/// The flags
	#[must_use]
	pub fn flags(&self) -> PatternFlags {
		self.flags
	}

	/// The body in the form the host prints it.
	///
	/// Unescaped `/` outside character classes and line terminators are
	/// escaped so the result can sit between slashes. An empty body prints
	/// as `(?:)`.
	#[must_use]
	pub fn source(&self) -> String {
		if self.body.is_empty() {
			return "(?:)".to_string();
		}

		let mut out = String::with_capacity(self.body.len());
		let mut escaped = false;
		let mut in_class = false;
		for c in self.body.chars() {
			match c {
				'\n' => out.push_str("\\n"),
				'\r' => out.push_str("\\r"),
				'\u{2028}' => out.push_str("\\u2028"),
				'\u{2029}' => out.push_str("\\u2029"),
				'/' if !escaped && !in_class => out.push_str("\\/"),
				_ => {
					if !escaped {
						match c {
							'[' => in_class = true,
							']' => in_class = false,
							_ => {}
						}
					}
					out.push(c);
				}
			}
			escaped = !escaped && c == '\\';
		}
		out
	}

	/// Compile the body with the Rust `regex` engine.
	///
	/// Only `i`, `m` and `s` change matching; the remaining flags describe
	/// iteration state on the host side and are ignored here.
	pub fn compile(&self) -> Result<Regex, ValueError> {
		let regex = RegexBuilder::new(&self.body)
			.case_insensitive(self.flags.contains('i'))
			.multi_line(self.flags.contains('m'))
			.dot_matches_new_line(self.flags.contains('s'))
			.build()?;
		Ok(regex)
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "/{}/{}", self.source(), self.flags)
	}
}
