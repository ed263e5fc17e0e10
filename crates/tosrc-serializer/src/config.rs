//! Serializer configuration.
//!
//! A [`SerializerConfig`] can be built in code, parsed from TOML or read
//! from environment variables. Sources layer: start from a file (or the
//! defaults) and let the environment override it.
//!
//! ```rust
//! use tosrc_serializer::{NegativeDepthPolicy, SerializerConfig};
//!
//! let config = SerializerConfig::from_toml_str(
//!     r#"
//!     default_depth = 3
//!     negative_depth = "reject"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.default_depth, 3);
//! assert_eq!(config.negative_depth, NegativeDepthPolicy::Reject);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Prefix of the environment variables read by [`SerializerConfig::from_env`]
pub const DEFAULT_ENV_PREFIX: &str = "TOSRC_";

/// What to do with a negative depth argument
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeDepthPolicy {
	/// Treat it as zero: top-level containers are not entered
	#[default]
	ClampToZero,
	/// Fail with [`SerializeError::NegativeDepth`](crate::SerializeError::NegativeDepth)
	Reject,
}

/// How a container is written once the depth budget is spent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustedContainer {
	/// `undefined`
	#[default]
	Undefined,
	/// An empty literal of the container's kind (`[]` or `{}`)
	Empty,
}

/// Which containers count as already seen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleDetection {
	/// Every container entered during the call. A container referenced
	/// twice is written once, the second reference collapses.
	#[default]
	Traversal,
	/// Only the containers currently being written (the path from the
	/// root). Shared but acyclic containers are written at each reference.
	Ancestors,
}

macro_rules! impl_policy_from_str {
	($ty:ty { $($text:literal => $variant:expr),* $(,)? }) => {
		impl FromStr for $ty {
			type Err = String;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
					$($text => Ok($variant),)*
					other => Err(other.to_string()),
				}
			}
		}
	};
}

impl_policy_from_str!(NegativeDepthPolicy {
	"clamp_to_zero" => NegativeDepthPolicy::ClampToZero,
	"clamp" => NegativeDepthPolicy::ClampToZero,
	"reject" => NegativeDepthPolicy::Reject,
});

impl_policy_from_str!(ExhaustedContainer {
	"undefined" => ExhaustedContainer::Undefined,
	"empty" => ExhaustedContainer::Empty,
});

impl_policy_from_str!(CycleDetection {
	"traversal" => CycleDetection::Traversal,
	"ancestors" => CycleDetection::Ancestors,
});

/// Serializer settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerConfig {
	/// Depth budget used when the caller passes none
	pub default_depth: u32,
	/// Handling of negative depth arguments
	pub negative_depth: NegativeDepthPolicy,
	/// Rendering of containers past the depth budget
	pub exhausted_container: ExhaustedContainer,
	/// Scope of circular reference detection
	pub cycle_detection: CycleDetection,
	/// Report circular references to the diagnostic sink
	pub warn_on_cycle: bool,
}

impl Default for SerializerConfig {
	fn default() -> Self {
		Self {
			default_depth: 1,
			negative_depth: NegativeDepthPolicy::default(),
			exhausted_container: ExhaustedContainer::default(),
			cycle_detection: CycleDetection::default(),
			warn_on_cycle: true,
		}
	}
}

impl SerializerConfig {
	/// Set the default depth budget
	pub fn with_default_depth(mut self, depth: u32) -> Self {
		self.default_depth = depth;
		self
	}

	/// Set the negative depth policy
	pub fn with_negative_depth(mut self, policy: NegativeDepthPolicy) -> Self {
		self.negative_depth = policy;
		self
	}

	/// Set how exhausted containers are written
	pub fn with_exhausted_container(mut self, style: ExhaustedContainer) -> Self {
		self.exhausted_container = style;
		self
	}

	/// Set the cycle detection scope
	pub fn with_cycle_detection(mut self, detection: CycleDetection) -> Self {
		self.cycle_detection = detection;
		self
	}

	/// Enable or disable cycle warnings
	pub fn with_warn_on_cycle(mut self, enabled: bool) -> Self {
		self.warn_on_cycle = enabled;
		self
	}

	/// Parse a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(s)?)
	}

	/// Read and parse a TOML file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Defaults overridden by `TOSRC_*` environment variables
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::default().merge_env(DEFAULT_ENV_PREFIX)
	}

	/// Override fields from environment variables named `{prefix}{FIELD}`,
	/// e.g. `TOSRC_DEFAULT_DEPTH`. Unset variables leave fields unchanged.
	pub fn merge_env(mut self, prefix: &str) -> Result<Self, ConfigError> {
		if let Some(v) = read_env(prefix, "DEFAULT_DEPTH") {
			self.default_depth = parse_env(prefix, "DEFAULT_DEPTH", &v)?;
		}
		if let Some(v) = read_env(prefix, "NEGATIVE_DEPTH") {
			self.negative_depth = parse_env(prefix, "NEGATIVE_DEPTH", &v)?;
		}
		if let Some(v) = read_env(prefix, "EXHAUSTED_CONTAINER") {
			self.exhausted_container = parse_env(prefix, "EXHAUSTED_CONTAINER", &v)?;
		}
		if let Some(v) = read_env(prefix, "CYCLE_DETECTION") {
			self.cycle_detection = parse_env(prefix, "CYCLE_DETECTION", &v)?;
		}
		if let Some(v) = read_env(prefix, "WARN_ON_CYCLE") {
			self.warn_on_cycle =
				parse_bool(&v).ok_or_else(|| invalid(prefix, "WARN_ON_CYCLE", &v))?;
		}
		Ok(self)
	}
}

fn read_env(prefix: &str, key: &str) -> Option<String> {
	env::var(format!("{}{}", prefix, key)).ok()
}

fn parse_env<T>(prefix: &str, key: &str, value: &str) -> Result<T, ConfigError>
where
	T: FromStr,
	T::Err: fmt::Debug,
{
	value.trim().parse().map_err(|_| invalid(prefix, key, value))
}

fn invalid(prefix: &str, key: &str, value: &str) -> ConfigError {
	ConfigError::InvalidValue {
		key: format!("{}{}", prefix, key),
		value: value.to_string(),
	}
}

/// Parse the usual spellings of a boolean flag
pub fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}
