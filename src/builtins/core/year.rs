//! This module implements `Year` and any directly related algorithms.

use alloc::{format, string::String};
use core::{fmt, str::FromStr};

use writeable::{LengthHint, Writeable};

use crate::{
    builtins::core::{Clock, Month, PlainDate, PlainMonthDay, PlainYearMonth},
    fields::{
        default_range, unsupported_field, unsupported_unit, ChronoField, ChronoUnit, Field,
        Temporal, TemporalAccessor, TemporalAdjuster, Unit, ValueRange,
    },
    format::DateTimeFormatter,
    utils::{self, checked_add, checked_mul},
    TemporalError, TemporalResult,
};

/// A year in the proleptic ISO calendar, such as `2007`.
///
/// Year 0 is 1 BCE, year -1 is 2 BCE, and so on. Values are immutable and
/// ordered by their integer value.
///
/// ```rust
/// use isotemporal::Year;
///
/// let year = Year::of(2024).unwrap();
/// assert!(year.is_leap());
/// assert_eq!(year.length(), 366);
/// assert_eq!(year.plus_years(-24).unwrap(), Year::of(2000).unwrap());
/// assert_eq!(Year::parse("2007").unwrap().to_string(), "2007");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// The minimum supported year.
    pub const MIN_VALUE: i32 = -999_999_999;
    /// The maximum supported year.
    pub const MAX_VALUE: i32 = 999_999_999;

    /// Creates a new `Year`, failing with a range error when `iso_year` is
    /// out of bounds.
    #[inline]
    pub fn of(iso_year: i64) -> TemporalResult<Self> {
        ChronoField::Year
            .range()
            .check_valid_int_value(iso_year, ChronoField::Year.into())
            .map(Self)
    }

    /// Creates the current `Year` of `clock` in the clock's zone.
    pub fn now_with_clock(clock: &impl Clock) -> TemporalResult<Self> {
        clock.local_date().map(Self::from)
    }

    /// Obtains a `Year` from the `Year` field of any temporal value.
    pub fn from_temporal(temporal: &dyn TemporalAccessor) -> TemporalResult<Self> {
        temporal
            .get_long(ChronoField::Year.into())
            .and_then(Self::of)
            .map_err(|err| {
                TemporalError::general(format!(
                    "Unable to obtain Year from TemporalAccessor: {temporal:?}, type {}",
                    temporal.type_name()
                ))
                .with_cause(err)
            })
    }

    /// Parses a year with [`DateTimeFormatter::ISO_YEAR`], such as `2007` or `+12345`.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        Self::parse_with(text, &DateTimeFormatter::ISO_YEAR)
    }

    /// Parses a year with `formatter`.
    pub fn parse_with(text: &str, formatter: &DateTimeFormatter) -> TemporalResult<Self> {
        formatter.parse(text, Self::from_temporal)
    }

    /// Formats this year with `formatter`.
    pub fn format(&self, formatter: &DateTimeFormatter) -> TemporalResult<String> {
        formatter.format(self)
    }

    /// Returns the integer value of this year.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns whether this year is a leap year.
    #[inline]
    #[must_use]
    pub fn is_leap(&self) -> bool {
        Self::is_leap_year(i64::from(self.0))
    }

    /// Returns whether `year` is a leap year: divisible by 4, and either not
    /// divisible by 100 or divisible by 400.
    #[inline]
    #[must_use]
    pub fn is_leap_year(year: i64) -> bool {
        utils::is_leap(year)
    }

    /// Returns the number of days in this year, 365 or 366.
    #[inline]
    #[must_use]
    pub fn length(&self) -> u16 {
        if self.is_leap() {
            366
        } else {
            365
        }
    }

    /// Returns whether `month_day` exists in this year.
    #[must_use]
    pub fn is_valid_month_day(&self, month_day: &PlainMonthDay) -> bool {
        month_day.is_valid_year(self.0)
    }

    /// Returns this year with `years` added.
    pub fn plus_years(&self, years: i64) -> TemporalResult<Self> {
        if years == 0 {
            return Ok(*self);
        }
        Self::of(checked_add(i64::from(self.0), years)?)
    }

    /// Returns this year with `years` subtracted.
    pub fn minus_years(&self, years: i64) -> TemporalResult<Self> {
        if years == i64::MIN {
            return self.plus_years(i64::MAX)?.plus_years(1);
        }
        self.plus_years(-years)
    }

    /// Returns the amount of `unit` from this year until the year of `end`.
    ///
    /// The result is truncated towards zero.
    pub fn until(&self, end: &dyn TemporalAccessor, unit: Unit) -> TemporalResult<i64> {
        let end = Self::from_temporal(end)?;
        let years = i64::from(end.0) - i64::from(self.0);
        match unit {
            Unit::Chrono(ChronoUnit::Years) => Ok(years),
            Unit::Chrono(ChronoUnit::Decades) => Ok(years / 10),
            Unit::Chrono(ChronoUnit::Centuries) => Ok(years / 100),
            Unit::Chrono(ChronoUnit::Millennia) => Ok(years / 1000),
            Unit::Chrono(ChronoUnit::Eras) => {
                let era = ChronoField::Era.into();
                Ok(end.get_long(era)? - self.get_long(era)?)
            }
            Unit::Chrono(_) => Err(unsupported_unit(unit)),
            Unit::Custom(custom) => custom.between(self, &end),
        }
    }

    /// Combines this year with a one based day of the year.
    pub fn at_day(&self, day_of_year: u16) -> TemporalResult<PlainDate> {
        PlainDate::of_year_day(i64::from(self.0), i64::from(day_of_year))
    }

    /// Combines this year with `month`.
    pub fn at_month(&self, month: Month) -> TemporalResult<PlainYearMonth> {
        PlainYearMonth::of(i64::from(self.0), month.value())
    }

    /// Combines this year with `month_day`, February 29 becomes February 28
    /// in a year that is not a leap year.
    pub fn at_month_day(&self, month_day: &PlainMonthDay) -> TemporalResult<PlainDate> {
        month_day.at_year(self.0)
    }

    /// Returns `temporal` with its year set to this year.
    pub fn adjust_into<T: Temporal>(&self, temporal: &T) -> TemporalResult<T> {
        temporal.with(ChronoField::Year.into(), i64::from(self.0))
    }

    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }
}

// ==== Trait impls ====

impl From<PlainDate> for Year {
    fn from(value: PlainDate) -> Self {
        Self(value.year())
    }
}

impl TemporalAccessor for Year {
    fn is_supported(&self, field: Field) -> bool {
        match field {
            Field::Chrono(field) => matches!(
                field,
                ChronoField::YearOfEra | ChronoField::Year | ChronoField::Era
            ),
            Field::Custom(field) => field.is_supported_by(self),
        }
    }

    fn range(&self, field: Field) -> TemporalResult<ValueRange> {
        match field {
            Field::Chrono(ChronoField::YearOfEra) if self.0 <= 0 => Ok(ValueRange::of(
                1,
                i64::from(Self::MAX_VALUE) + 1,
            )),
            Field::Chrono(ChronoField::YearOfEra) => {
                Ok(ValueRange::of(1, i64::from(Self::MAX_VALUE)))
            }
            _ => default_range(self, field),
        }
    }

    fn get_long(&self, field: Field) -> TemporalResult<i64> {
        let year = i64::from(self.0);
        match field {
            Field::Chrono(ChronoField::YearOfEra) => Ok(if year < 1 { 1 - year } else { year }),
            Field::Chrono(ChronoField::Year) => Ok(year),
            Field::Chrono(ChronoField::Era) => Ok(i64::from(year >= 1)),
            Field::Chrono(_) => Err(unsupported_field(field)),
            Field::Custom(field) => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<Unit> {
        Some(ChronoUnit::Years.into())
    }
}

impl Temporal for Year {
    fn is_supported_unit(&self, unit: Unit) -> bool {
        match unit {
            Unit::Chrono(unit) => matches!(
                unit,
                ChronoUnit::Years
                    | ChronoUnit::Decades
                    | ChronoUnit::Centuries
                    | ChronoUnit::Millennia
                    | ChronoUnit::Eras
            ),
            Unit::Custom(unit) => unit.is_supported_by(self),
        }
    }

    fn with(&self, field: Field, new_value: i64) -> TemporalResult<Self> {
        match field {
            Field::Chrono(ChronoField::YearOfEra) => {
                field.check_valid_value(new_value)?;
                Self::of(if self.0 < 1 { 1 - new_value } else { new_value })
            }
            Field::Chrono(ChronoField::Year) => Self::of(new_value),
            Field::Chrono(ChronoField::Era) => {
                field.check_valid_value(new_value)?;
                if self.get_long(field)? == new_value {
                    Ok(*self)
                } else {
                    Self::of(1 - i64::from(self.0))
                }
            }
            Field::Chrono(_) => Err(unsupported_field(field)),
            Field::Custom(custom) => {
                let mut year = *self;
                custom.adjust_into(&mut year, new_value)?;
                Ok(year)
            }
        }
    }

    fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        match unit {
            Unit::Chrono(ChronoUnit::Years) => self.plus_years(amount),
            Unit::Chrono(ChronoUnit::Decades) => self.plus_years(checked_mul(amount, 10)?),
            Unit::Chrono(ChronoUnit::Centuries) => self.plus_years(checked_mul(amount, 100)?),
            Unit::Chrono(ChronoUnit::Millennia) => self.plus_years(checked_mul(amount, 1000)?),
            Unit::Chrono(ChronoUnit::Eras) => {
                let era = ChronoField::Era.into();
                self.with(era, checked_add(self.get_long(era)?, amount)?)
            }
            Unit::Chrono(_) => Err(unsupported_unit(unit)),
            Unit::Custom(custom) => {
                let mut year = *self;
                custom.add_to(&mut year, amount)?;
                Ok(year)
            }
        }
    }
}

impl TemporalAdjuster for Year {
    fn adjust_into<T: Temporal>(&self, temporal: &T) -> TemporalResult<T> {
        Year::adjust_into(self, temporal)
    }
}

impl FromStr for Year {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Writeable for Year {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.0.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.0.writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(Year);

#[cfg(test)]
mod tests;
