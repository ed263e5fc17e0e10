//! Date values.

use crate::error::ValueError;
use chrono::{DateTime, TimeZone, Utc};

/// Largest time value the host accepts, in milliseconds either side of the epoch
const MAX_TIME_MILLIS: i64 = 8_640_000_000_000_000;

/// A point in time, held as milliseconds since the Unix epoch.
///
/// The host also has an *invalid* date (time value `NaN`), which is kept
/// as an instant without a time value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Instant(Option<i64>);

impl Instant {
	/// Instant at `millis` milliseconds since the epoch.
	///
	/// # Example
	///
	/// ```rust
	/// use tosrc_value::Instant;
	///
	/// assert_eq!(Instant::from_millis(0).unwrap().millis(), Some(0));
	/// assert!(Instant::from_millis(i64::MAX).is_err());
	/// ```
	pub fn from_millis(millis: i64) -> Result<Self, ValueError> {
		if !(-MAX_TIME_MILLIS..=MAX_TIME_MILLIS).contains(&millis) {
			return Err(ValueError::InstantOutOfRange(millis));
		}
		Ok(Self(Some(millis)))
	}

	/// The invalid date
	#[must_use]
	pub fn invalid() -> Self {
		Self(None)
	}

	/// The current time
	#[must_use]
	pub fn now() -> Self {
		Self(Some(Utc::now().timestamp_millis()))
	}

	/// Milliseconds since the epoch, or `None` for the invalid date
	#[must_use]
	pub fn millis(self) -> Option<i64> {
		self.0
	}

	/// Returns `true` unless this is the invalid date
	#[must_use]
	pub fn is_valid(self) -> bool {
		self.0.is_some()
	}

	/// The instant as a UTC datetime.
	///
	/// `None` for the invalid date, and also for valid instants past the
	/// range `chrono` can represent (about ±262,000 years, narrower than the
	/// host's ±8.64e15 ms).
	#[must_use]
	pub fn to_datetime(self) -> Option<DateTime<Utc>> {
		self.0.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
	}
}

impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for Instant {
	type Error = ValueError;

	fn try_from(dt: DateTime<Tz>) -> Result<Self, Self::Error> {
		Self::from_millis(dt.timestamp_millis())
	}
}
