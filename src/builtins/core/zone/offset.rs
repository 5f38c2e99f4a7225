//! This module implements `ZoneOffset`.

use alloc::{format, string::String};
use core::{cmp::Ordering, fmt, str::FromStr};

use writeable::Writeable;

use crate::{
    builtins::core::zone::{ZoneId, ZoneRules},
    fields::{default_range, unsupported_field, ChronoField, Field, TemporalAccessor, ValueRange},
    parsers::{parse_offset_id, FormattableOffset},
    Sign, TemporalError, TemporalResult,
};

const SECONDS_PER_HOUR: i32 = 3_600;
const SECONDS_PER_MINUTE: i32 = 60;
const MAX_SECONDS: i32 = 18 * SECONDS_PER_HOUR;

/// A fixed offset from UTC, in the range `-18:00` to `+18:00`.
///
/// Offsets order from the largest positive offset to the largest negative
/// one, which is the order of the local times they produce for an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneOffset {
    total_seconds: i32,
}

impl ZoneOffset {
    /// The offset of UTC, `Z`.
    pub const UTC: Self = Self { total_seconds: 0 };
    /// The minimum supported offset, `-18:00`.
    pub const MIN: Self = Self {
        total_seconds: -MAX_SECONDS,
    };
    /// The maximum supported offset, `+18:00`.
    pub const MAX: Self = Self {
        total_seconds: MAX_SECONDS,
    };

    /// Parses an offset id such as `+01:00`, `-0530` or `Z`.
    pub fn of(offset_id: &str) -> TemporalResult<Self> {
        if offset_id == "Z" {
            return Ok(Self::UTC);
        }
        let (hours, minutes, seconds) = parse_offset_id(offset_id)?;
        Self::of_hours_minutes_seconds(hours, minutes, seconds)
    }

    pub fn of_hours(hours: i32) -> TemporalResult<Self> {
        Self::of_hours_minutes_seconds(hours, 0, 0)
    }

    pub fn of_hours_minutes(hours: i32, minutes: i32) -> TemporalResult<Self> {
        Self::of_hours_minutes_seconds(hours, minutes, 0)
    }

    /// Creates an offset from its components, which must all share a sign.
    pub fn of_hours_minutes_seconds(hours: i32, minutes: i32, seconds: i32) -> TemporalResult<Self> {
        validate(hours, minutes, seconds)?;
        Self::of_total_seconds(
            hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
        )
    }

    pub fn of_total_seconds(total_seconds: i32) -> TemporalResult<Self> {
        if !(-MAX_SECONDS..=MAX_SECONDS).contains(&total_seconds) {
            return Err(TemporalError::general(
                "Zone offset not in valid range: -18:00 to +18:00",
            ));
        }
        Ok(Self { total_seconds })
    }

    #[inline]
    #[must_use]
    pub const fn total_seconds(&self) -> i32 {
        self.total_seconds
    }

    /// Returns the canonical id, `Z` or `±hh:mm[:ss]`.
    #[must_use]
    pub fn id(&self) -> String {
        self.to_formattable().write_to_string().into_owned()
    }

    /// Returns the rules of this offset, which never change.
    #[must_use]
    pub fn rules(&self) -> ZoneRules {
        ZoneRules::Fixed(*self)
    }

    fn to_formattable(self) -> FormattableOffset {
        let sign = Sign::from(self.total_seconds);
        let abs = self.total_seconds.unsigned_abs();
        // NOTE: the components are bounded by 18 hours.
        FormattableOffset {
            sign,
            hours: (abs / 3_600) as u8,
            minutes: (abs / 60 % 60) as u8,
            seconds: (abs % 60) as u8,
        }
    }
}

fn validate(hours: i32, minutes: i32, seconds: i32) -> TemporalResult<()> {
    if !(-18..=18).contains(&hours) {
        return Err(TemporalError::general(format!(
            "Zone offset hours not in valid range: value {hours} is not in the range -18 to 18"
        )));
    }
    if hours > 0 && (minutes < 0 || seconds < 0) {
        return Err(TemporalError::general(
            "Zone offset minutes and seconds must be positive because hours is positive",
        ));
    }
    if hours < 0 && (minutes > 0 || seconds > 0) {
        return Err(TemporalError::general(
            "Zone offset minutes and seconds must be negative because hours is negative",
        ));
    }
    if (minutes > 0 && seconds < 0) || (minutes < 0 && seconds > 0) {
        return Err(TemporalError::general(
            "Zone offset minutes and seconds must have the same sign",
        ));
    }
    if !(-59..=59).contains(&minutes) {
        return Err(TemporalError::general(format!(
            "Zone offset minutes not in valid range: value {minutes} is not in the range -59 to 59"
        )));
    }
    if !(-59..=59).contains(&seconds) {
        return Err(TemporalError::general(format!(
            "Zone offset seconds not in valid range: value {seconds} is not in the range -59 to 59"
        )));
    }
    if hours.abs() == 18 && (minutes != 0 || seconds != 0) {
        return Err(TemporalError::general(
            "Zone offset not in valid range: -18:00 to +18:00",
        ));
    }
    Ok(())
}

impl Ord for ZoneOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        other.total_seconds.cmp(&self.total_seconds)
    }
}

impl PartialOrd for ZoneOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TemporalAccessor for ZoneOffset {
    fn is_supported(&self, field: Field) -> bool {
        match field {
            Field::Chrono(field) => field == ChronoField::OffsetSeconds,
            Field::Custom(field) => field.is_supported_by(self),
        }
    }

    fn range(&self, field: Field) -> TemporalResult<ValueRange> {
        default_range(self, field)
    }

    fn get_long(&self, field: Field) -> TemporalResult<i64> {
        match field {
            Field::Chrono(ChronoField::OffsetSeconds) => Ok(i64::from(self.total_seconds)),
            Field::Chrono(_) => Err(unsupported_field(field)),
            Field::Custom(field) => field.get_from(self),
        }
    }

    fn zone(&self) -> Option<ZoneId> {
        Some(ZoneId::Offset(*self))
    }
}

impl FromStr for ZoneOffset {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl Writeable for ZoneOffset {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.to_formattable().write_to(sink)
    }

    fn writeable_length_hint(&self) -> writeable::LengthHint {
        self.to_formattable().writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(ZoneOffset);
