//! This module implements `PlainDate` and any directly related algorithms.

use core::fmt;

use writeable::{LengthHint, Writeable};

use crate::{
    builtins::core::{Clock, Month},
    fields::{
        unsupported_field, unsupported_unit, ChronoField, ChronoUnit, Field, Temporal,
        TemporalAccessor, Unit, ValueRange,
    },
    iso::IsoDate,
    parsers::FormattableDate,
    utils::{self, checked_add, checked_mul},
    TemporalResult,
};

/// A date in the proleptic ISO calendar, such as `2007-12-03`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    pub(crate) iso: IsoDate,
}

impl PlainDate {
    /// Creates a new unchecked `PlainDate`
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }

    /// Creates a new `PlainDate`, rejecting an invalid date such as `2023-02-29`.
    pub fn of(year: i64, month: u8, day: u8) -> TemporalResult<Self> {
        IsoDate::try_new(year, i64::from(month), i64::from(day)).map(Self::new_unchecked)
    }

    /// Creates a new `PlainDate` from a one based day of the year.
    pub fn of_year_day(year: i64, day_of_year: i64) -> TemporalResult<Self> {
        let year = ChronoField::Year
            .range()
            .check_valid_int_value(year, ChronoField::Year.into())?;
        IsoDate::from_year_day(year, day_of_year).map(Self::new_unchecked)
    }

    /// Creates a new `PlainDate` from the number of days since 1970-01-01.
    pub fn of_epoch_day(epoch_day: i64) -> TemporalResult<Self> {
        IsoDate::from_epoch_days(epoch_day).map(Self::new_unchecked)
    }

    /// Creates the current `PlainDate` of `clock` in the clock's zone.
    pub fn now_with_clock(clock: &impl Clock) -> TemporalResult<Self> {
        clock.local_date()
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso.year
    }

    #[inline]
    #[must_use]
    pub fn month_value(&self) -> u8 {
        self.iso.month
    }

    #[inline]
    pub fn month(&self) -> TemporalResult<Month> {
        Month::of(self.iso.month)
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso.day
    }

    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        self.iso.day_of_year()
    }

    /// Returns the ISO day of the week, Monday is 1 and Sunday is 7.
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        utils::iso_day_of_week(self.to_epoch_day())
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub fn to_epoch_day(&self) -> i64 {
        self.iso.to_epoch_days()
    }

    #[inline]
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.iso.is_leap_year()
    }

    #[inline]
    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        self.iso.days_in_month()
    }

    #[inline]
    #[must_use]
    pub fn length_of_year(&self) -> u16 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    pub fn plus_days(&self, days: i64) -> TemporalResult<Self> {
        self.iso.add_days(days).map(Self::new_unchecked)
    }

    pub fn plus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.plus_days(checked_mul(weeks, 7)?)
    }

    /// Adds months, the day is constrained to the last day of the resulting month.
    pub fn plus_months(&self, months: i64) -> TemporalResult<Self> {
        self.iso.add_months(months).map(Self::new_unchecked)
    }

    /// Adds years, February 29 becomes February 28 in a year that is not a
    /// leap year.
    pub fn plus_years(&self, years: i64) -> TemporalResult<Self> {
        if years == 0 {
            return Ok(*self);
        }
        let year = checked_add(i64::from(self.iso.year), years)?;
        IsoDate::constrain(year, self.iso.month, self.iso.day).map(Self::new_unchecked)
    }

    fn with_year(&self, year: i64) -> TemporalResult<Self> {
        let year = ChronoField::Year
            .range()
            .check_valid_value(year, ChronoField::Year.into())?;
        IsoDate::constrain(year, self.iso.month, self.iso.day).map(Self::new_unchecked)
    }
}

// ==== Trait impls ====

impl TemporalAccessor for PlainDate {
    fn is_supported(&self, field: Field) -> bool {
        match field {
            Field::Chrono(field) => matches!(
                field,
                ChronoField::DayOfWeek
                    | ChronoField::DayOfMonth
                    | ChronoField::DayOfYear
                    | ChronoField::EpochDay
                    | ChronoField::MonthOfYear
                    | ChronoField::ProlepticMonth
                    | ChronoField::YearOfEra
                    | ChronoField::Year
                    | ChronoField::Era
            ),
            Field::Custom(field) => field.is_supported_by(self),
        }
    }

    fn range(&self, field: Field) -> TemporalResult<ValueRange> {
        match field {
            Field::Chrono(chrono) if self.is_supported(field) => match chrono {
                ChronoField::DayOfMonth => {
                    Ok(ValueRange::of(1, i64::from(self.length_of_month())))
                }
                ChronoField::DayOfYear => Ok(ValueRange::of(1, i64::from(self.length_of_year()))),
                ChronoField::YearOfEra if self.iso.year <= 0 => {
                    Ok(ValueRange::of(1, i64::from(crate::Year::MAX_VALUE) + 1))
                }
                ChronoField::YearOfEra => Ok(ValueRange::of(1, i64::from(crate::Year::MAX_VALUE))),
                _ => Ok(chrono.range()),
            },
            Field::Chrono(_) => Err(unsupported_field(field)),
            Field::Custom(field) => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: Field) -> TemporalResult<i64> {
        let year = i64::from(self.iso.year);
        match field {
            Field::Chrono(ChronoField::DayOfWeek) => Ok(i64::from(self.day_of_week())),
            Field::Chrono(ChronoField::DayOfMonth) => Ok(i64::from(self.iso.day)),
            Field::Chrono(ChronoField::DayOfYear) => Ok(i64::from(self.day_of_year())),
            Field::Chrono(ChronoField::EpochDay) => Ok(self.to_epoch_day()),
            Field::Chrono(ChronoField::MonthOfYear) => Ok(i64::from(self.iso.month)),
            Field::Chrono(ChronoField::ProlepticMonth) => Ok(self.iso.proleptic_month()),
            Field::Chrono(ChronoField::YearOfEra) => Ok(if year < 1 { 1 - year } else { year }),
            Field::Chrono(ChronoField::Year) => Ok(year),
            Field::Chrono(ChronoField::Era) => Ok(i64::from(year >= 1)),
            Field::Chrono(_) => Err(unsupported_field(field)),
            Field::Custom(field) => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<Unit> {
        Some(ChronoUnit::Days.into())
    }
}

impl Temporal for PlainDate {
    fn is_supported_unit(&self, unit: Unit) -> bool {
        match unit {
            Unit::Chrono(unit) => unit.is_date_based(),
            Unit::Custom(unit) => unit.is_supported_by(self),
        }
    }

    fn with(&self, field: Field, new_value: i64) -> TemporalResult<Self> {
        let chrono = match field {
            Field::Chrono(chrono) => chrono,
            Field::Custom(custom) => {
                let mut date = *self;
                custom.adjust_into(&mut date, new_value)?;
                return Ok(date);
            }
        };
        if !self.is_supported(field) {
            return Err(unsupported_field(field));
        }
        chrono.range().check_valid_value(new_value, field)?;
        match chrono {
            ChronoField::DayOfWeek => {
                self.plus_days(new_value - i64::from(self.day_of_week()))
            }
            ChronoField::DayOfMonth => PlainDate::of(
                i64::from(self.iso.year),
                self.iso.month,
                // NOTE: range checked above.
                new_value as u8,
            ),
            ChronoField::DayOfYear => PlainDate::of_year_day(i64::from(self.iso.year), new_value),
            ChronoField::EpochDay => PlainDate::of_epoch_day(new_value),
            ChronoField::MonthOfYear => self.plus_months(new_value - i64::from(self.iso.month)),
            ChronoField::ProlepticMonth => {
                self.plus_months(new_value - self.iso.proleptic_month())
            }
            ChronoField::YearOfEra => {
                self.with_year(if self.iso.year < 1 { 1 - new_value } else { new_value })
            }
            ChronoField::Year => self.with_year(new_value),
            ChronoField::Era if self.get_long(field)? == new_value => Ok(*self),
            ChronoField::Era => self.with_year(1 - i64::from(self.iso.year)),
            _ => Err(unsupported_field(field)),
        }
    }

    fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        match unit {
            Unit::Chrono(ChronoUnit::Days) => self.plus_days(amount),
            Unit::Chrono(ChronoUnit::Weeks) => self.plus_weeks(amount),
            Unit::Chrono(ChronoUnit::Months) => self.plus_months(amount),
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
                let mut date = *self;
                custom.add_to(&mut date, amount)?;
                Ok(date)
            }
        }
    }
}

impl Writeable for PlainDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        FormattableDate(self.iso.year, self.iso.month, self.iso.day).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDate(self.iso.year, self.iso.month, self.iso.day).writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(PlainDate);
