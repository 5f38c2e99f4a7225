//! This module implements the internal ISO date record.
//!
//! An `IsoDate` is the proleptic year, month and day shared by `PlainDate`,
//! `PlainYearMonth` and `PlainMonthDay`. Year bounds are those of [`Year`].

use alloc::format;

use crate::{
    fields::ChronoField,
    utils::{self, checked_add},
    temporal_assert, TemporalError, TemporalResult, TemporalUnwrap, Year,
};

/// `IsoDate` serves as a record for the `[[ISOYear]]`, `[[ISOMonth]]`,
/// and `[[ISODay]]` of the date types.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting any invalid field.
    pub(crate) fn try_new(year: i64, month: i64, day: i64) -> TemporalResult<Self> {
        let year = ChronoField::Year.range().check_valid_int_value(year, ChronoField::Year.into())?;
        let month = ChronoField::MonthOfYear
            .range()
            .check_valid_int_value(month, ChronoField::MonthOfYear.into())?;
        let day = ChronoField::DayOfMonth
            .range()
            .check_valid_int_value(day, ChronoField::DayOfMonth.into())?;
        // NOTE: month and day have been verified to be in a u8 range.
        let (month, day) = (month as u8, day as u8);
        if !is_valid_iso_day(year, month, day) {
            return Err(TemporalError::general(if month == 2 && day == 29 {
                format!("Invalid date 'February 29' as '{year}' is not a leap year")
            } else {
                format!("Invalid date '{day}' for month {month}")
            }));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a new `IsoDate`, constraining the day to the month's length.
    pub(crate) fn constrain(year: i64, month: u8, day: u8) -> TemporalResult<Self> {
        temporal_assert!(
            (1..=12).contains(&month) && day >= 1,
            "constrain received month {month} and day {day}"
        );
        let year = ChronoField::Year.range().check_valid_int_value(year, ChronoField::Year.into())?;
        let day = day.min(utils::iso_days_in_month(i64::from(year), month));
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a new `IsoDate` from the one based day of the year.
    pub(crate) fn from_year_day(year: i32, day_of_year: i64) -> TemporalResult<Self> {
        let year_i64 = i64::from(year);
        ChronoField::DayOfYear
            .range()
            .check_valid_value(day_of_year, ChronoField::DayOfYear.into())?;
        if day_of_year == 366 && !utils::is_leap(year_i64) {
            return Err(TemporalError::general(format!(
                "Invalid date 'DayOfYear {day_of_year}' as '{year}' is not a leap year"
            )));
        }
        let epoch_days = utils::epoch_days_from_gregorian_date(year_i64, 1, 1) + day_of_year - 1;
        Self::from_epoch_days(epoch_days)
    }

    /// Creates a new `IsoDate` from days since 1970-01-01.
    pub(crate) fn from_epoch_days(epoch_days: i64) -> TemporalResult<Self> {
        ChronoField::EpochDay
            .range()
            .check_valid_value(epoch_days, ChronoField::EpochDay.into())?;
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days);
        // NOTE: the epoch day range maps into the year range.
        let year = i32::try_from(year).ok().temporal_unwrap()?;
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the days since 1970-01-01.
    pub(crate) fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_gregorian_date(i64::from(self.year), self.month, self.day)
    }

    /// Returns the one based day of the year.
    pub(crate) fn day_of_year(self) -> u16 {
        utils::month_to_day(self.month - 1, self.is_leap_year()) + u16::from(self.day)
    }

    pub(crate) fn is_leap_year(self) -> bool {
        Year::is_leap_year(i64::from(self.year))
    }

    pub(crate) fn days_in_month(self) -> u8 {
        utils::iso_days_in_month(i64::from(self.year), self.month)
    }

    /// Months since year 0.
    pub(crate) fn proleptic_month(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Adds months, constraining the day to the resulting month.
    pub(crate) fn add_months(self, months: i64) -> TemporalResult<Self> {
        if months == 0 {
            return Ok(self);
        }
        let month_count = checked_add(self.proleptic_month(), months)?;
        let (year, month) = balance_iso_year_month(month_count);
        Self::constrain(year, month, self.day)
    }

    /// Adds days through the epoch day count.
    pub(crate) fn add_days(self, days: i64) -> TemporalResult<Self> {
        if days == 0 {
            return Ok(self);
        }
        Self::from_epoch_days(checked_add(self.to_epoch_days(), days)?)
    }
}

/// Splits a proleptic month count into a year and a one based month.
#[inline]
pub(crate) fn balance_iso_year_month(proleptic_month: i64) -> (i64, u8) {
    (
        proleptic_month.div_euclid(12),
        // NOTE: rem_euclid(12) is within a u8 range.
        proleptic_month.rem_euclid(12) as u8 + 1,
    )
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: u8, day: u8) -> bool {
    (1..=utils::iso_days_in_month(i64::from(year), month)).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_day_round_trip() {
        let date = IsoDate::try_new(2024, 2, 29).unwrap();
        assert_eq!(date.to_epoch_days(), 19_782);
        assert_eq!(IsoDate::from_epoch_days(19_782).unwrap(), date);
        assert_eq!(date.day_of_year(), 60);
        assert_eq!(date.proleptic_month(), 2024 * 12 + 1);
    }

    #[test]
    fn invalid_dates() {
        let err = IsoDate::try_new(2023, 2, 29).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid date 'February 29' as '2023' is not a leap year"
        );
        assert!(IsoDate::try_new(2023, 4, 31).is_err());
        assert!(IsoDate::try_new(2023, 13, 1).is_err());
        assert!(IsoDate::try_new(1_000_000_000, 1, 1).is_err());
        assert!(IsoDate::from_year_day(2023, 366).is_err());
        assert_eq!(
            IsoDate::from_year_day(2024, 366).unwrap(),
            IsoDate::new_unchecked(2024, 12, 31)
        );
    }

    #[test]
    fn month_arithmetic_constrains_day() {
        let date = IsoDate::try_new(2024, 1, 31).unwrap();
        assert_eq!(
            date.add_months(1).unwrap(),
            IsoDate::new_unchecked(2024, 2, 29)
        );
        assert_eq!(
            date.add_months(-13).unwrap(),
            IsoDate::new_unchecked(2022, 12, 31)
        );
        assert_eq!(balance_iso_year_month(-1), (-1, 12));
    }
}
