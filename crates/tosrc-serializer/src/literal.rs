//! Literal formatting for non-container values.

use std::f64::consts;
use tosrc_value::{Callable, Instant};

/// Numbers written by name, so evaluation yields the platform constant
/// exactly rather than a re-parsed decimal.
pub const NAMED_NUMBERS: [(f64, &str); 10] = [
	(f64::MAX, "Number.MAX_VALUE"),
	(f64::from_bits(1), "Number.MIN_VALUE"),
	(consts::E, "Math.E"),
	(consts::LN_2, "Math.LN2"),
	(consts::LN_10, "Math.LN10"),
	(consts::LOG2_E, "Math.LOG2E"),
	(consts::LOG10_E, "Math.LOG10E"),
	(consts::PI, "Math.PI"),
	(consts::FRAC_1_SQRT_2, "Math.SQRT1_2"),
	(consts::SQRT_2, "Math.SQRT2"),
];

/// Name of the constant equal to `n`, if any
#[must_use]
pub fn named_number(n: f64) -> Option<&'static str> {
	NAMED_NUMBERS
		.iter()
		.find(|(value, _)| *value == n)
		.map(|(_, name)| *name)
}

/// Format a number.
///
/// Whitelisted constants are written by name. Everything else uses the
/// shortest decimal that reads back as the same `f64`, switching to
/// exponent form where the host does (`1e+21`, `1e-7`).
///
/// # Example
///
/// ```rust
/// use tosrc_serializer::literal::number;
///
/// assert_eq!(number(1.0), "1");
/// assert_eq!(number(0.1), "0.1");
/// assert_eq!(number(std::f64::consts::PI), "Math.PI");
/// assert_eq!(number(f64::NAN), "NaN");
/// assert_eq!(number(1e21), "1e+21");
/// ```
#[must_use]
pub fn number(n: f64) -> String {
	if let Some(name) = named_number(n) {
		return name.to_string();
	}
	if n.is_nan() {
		return "NaN".to_string();
	}
	if n.is_infinite() {
		return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}

	let magnitude = n.abs();
	if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
		let formatted = format!("{:e}", n);
		return match formatted.split_once('e') {
			Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
			_ => formatted,
		};
	}
	format!("{}", n)
}

/// Append `s` to `out` as a double-quoted string literal.
///
/// The output is also valid JSON: quotes, backslashes and control
/// characters are escaped, as are U+2028 and U+2029.
pub fn push_string(out: &mut String, s: &str) {
	out.reserve(s.len() + 2);
	out.push('"');
	for c in s.chars() {
		match c {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\u{08}' => out.push_str("\\b"),
			'\u{0C}' => out.push_str("\\f"),
			'\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", c as u32)),
			c if c < '\u{20}' => out.push_str(&format!("\\u{:04x}", c as u32)),
			c => out.push(c),
		}
	}
	out.push('"');
}

/// Format `s` as a double-quoted string literal
///
/// ```rust
/// use tosrc_serializer::literal::string;
///
/// assert_eq!(string("1"), r#""1""#);
/// assert_eq!(string("say \"hi\""), r#""say \"hi\"""#);
/// ```
#[must_use]
pub fn string(s: &str) -> String {
	let mut out = String::new();
	push_string(&mut out, s);
	out
}

/// Format a date as a constructor call carrying its time value
#[must_use]
pub fn instant(instant: Instant) -> String {
	match instant.millis() {
		Some(ms) => format!("new Date({})", ms),
		None => "new Date(NaN)".to_string(),
	}
}

/// Source text of a function, or the bare name of a built-in
#[must_use]
pub fn callable(callable: &Callable) -> &str {
	match callable {
		Callable::Script { source, .. } => source,
		Callable::Native { name } => name,
	}
}
