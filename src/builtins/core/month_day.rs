//! This module implements `PlainMonthDay` and any directly related algorithms.

use alloc::format;
use core::fmt;

use writeable::{LengthHint, Writeable};

use crate::{
    builtins::core::{Month, PlainDate},
    fields::{default_range, unsupported_field, ChronoField, Field, TemporalAccessor, ValueRange},
    iso::{is_valid_iso_day, IsoDate},
    parsers::FormattableMonthDay,
    TemporalError, TemporalResult,
};

/// A day of a month without a year, such as `--12-03`.
///
/// February 29 is a valid month day, it only exists in leap years.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainMonthDay {
    month: u8,
    day: u8,
}

impl PlainMonthDay {
    /// Creates a new `PlainMonthDay`, the day is checked against the longest
    /// length of the month.
    pub fn of(month: u8, day: u8) -> TemporalResult<Self> {
        let month_of_year = Month::of(month)?;
        ChronoField::DayOfMonth
            .range()
            .check_valid_value(i64::from(day), ChronoField::DayOfMonth.into())?;
        if day > month_of_year.max_length() {
            return Err(TemporalError::general(format!(
                "Illegal value for DayOfMonth field, value {day} is not valid for month {}",
                month_of_year.name()
            )));
        }
        Ok(Self { month, day })
    }

    #[inline]
    pub fn month(&self) -> TemporalResult<Month> {
        Month::of(self.month)
    }

    #[inline]
    #[must_use]
    pub fn month_value(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns whether this month day exists in `year`.
    #[inline]
    #[must_use]
    pub fn is_valid_year(&self, year: i32) -> bool {
        is_valid_iso_day(year, self.month, self.day)
    }

    /// Combines this month day with `year`, February 29 becomes February 28
    /// in a year that is not a leap year.
    pub fn at_year(&self, year: i32) -> TemporalResult<PlainDate> {
        IsoDate::constrain(i64::from(year), self.month, self.day).map(PlainDate::new_unchecked)
    }
}

impl TemporalAccessor for PlainMonthDay {
    fn is_supported(&self, field: Field) -> bool {
        match field {
            Field::Chrono(field) => {
                matches!(field, ChronoField::MonthOfYear | ChronoField::DayOfMonth)
            }
            Field::Custom(field) => field.is_supported_by(self),
        }
    }

    fn range(&self, field: Field) -> TemporalResult<ValueRange> {
        match field {
            Field::Chrono(ChronoField::DayOfMonth) => {
                let month = self.month()?;
                Ok(ValueRange::of_variable_max(
                    1,
                    i64::from(month.min_length()),
                    i64::from(month.max_length()),
                ))
            }
            _ => default_range(self, field),
        }
    }

    fn get_long(&self, field: Field) -> TemporalResult<i64> {
        match field {
            Field::Chrono(ChronoField::MonthOfYear) => Ok(i64::from(self.month)),
            Field::Chrono(ChronoField::DayOfMonth) => Ok(i64::from(self.day)),
            Field::Chrono(_) => Err(unsupported_field(field)),
            Field::Custom(field) => field.get_from(self),
        }
    }
}

impl Writeable for PlainMonthDay {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        FormattableMonthDay(self.month, self.day).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(7)
    }
}

writeable::impl_display_with_writeable!(PlainMonthDay);
