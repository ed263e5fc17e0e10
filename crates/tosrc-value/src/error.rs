//! Errors raised while constructing values.

use thiserror::Error;

/// Error type for value construction
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
	#[error("Invalid regular expression flag: {0:?}")]
	InvalidPatternFlag(char),

	#[error("Duplicate regular expression flag: {0:?}")]
	DuplicatePatternFlag(char),

	#[error("Regular expression flags 'u' and 'v' cannot be combined")]
	ConflictingPatternFlags,

	#[error("Malformed regular expression literal: {0}")]
	MalformedPatternLiteral(String),

	#[error("Regular expression does not compile: {0}")]
	Regex(#[from] regex::Error),

	#[error("Time value {0} ms is outside the representable date range")]
	InstantOutOfRange(i64),
}
