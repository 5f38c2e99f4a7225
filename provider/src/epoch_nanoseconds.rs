use crate::TimeZoneProviderError;

/// Number of nanoseconds in a second
#[doc(hidden)]
pub const NS_PER_SECOND: i128 = 1_000_000_000;

/// Number of seconds in a day
#[doc(hidden)]
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Max Instant nanosecond constant, the end of year 999_999_999.
#[doc(hidden)]
pub const NS_MAX_INSTANT: i128 = 31_556_889_832_780_799 * NS_PER_SECOND + 999_999_999;
/// Min Instant nanosecond constant, the start of year -999_999_999.
#[doc(hidden)]
pub const NS_MIN_INSTANT: i128 = -31_557_014_135_596_800 * NS_PER_SECOND;

/// Nanoseconds elapsed since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochNanoseconds(pub i128);

impl From<i128> for EpochNanoseconds {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl EpochNanoseconds {
    /// The epoch itself, 1970-01-01T00:00:00Z.
    pub const EPOCH: Self = Self(0);

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds as i128 * NS_PER_SECOND)
    }

    pub fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns the whole epoch seconds, flooring toward negative infinity.
    pub fn as_epoch_seconds(&self) -> i64 {
        // NOTE: cast is safe for any value within the instant range.
        self.0.div_euclid(NS_PER_SECOND) as i64
    }

    /// Returns the epoch day of this instant in UTC.
    pub fn as_epoch_days(&self) -> i64 {
        self.as_epoch_seconds().div_euclid(SECONDS_PER_DAY)
    }

    pub fn check_validity(&self) -> Result<(), TimeZoneProviderError> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(TimeZoneProviderError::InstantOutOfRange);
        }
        Ok(())
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(nanos)
}
