//! Error types.

use thiserror::Error;

/// Error returned by [`Serializer::serialize`](crate::Serializer::serialize).
///
/// Values themselves never cause an error; only the depth argument is
/// validated.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerializeError {
	#[error("Negative depth {0} is rejected by the configured policy")]
	NegativeDepth(i64),
}

/// Error type for loading a [`SerializerConfig`](crate::SerializerConfig)
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {key}: {value:?}")]
	InvalidValue { key: String, value: String },
}
