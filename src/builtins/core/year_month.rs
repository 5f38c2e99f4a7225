//! This module implements `PlainYearMonth` and any directly related algorithms.

use core::fmt;

use writeable::{LengthHint, Writeable};

use crate::{
    builtins::core::{Month, PlainDate},
    fields::{default_range, unsupported_field, ChronoField, ChronoUnit, Field, TemporalAccessor, Unit, ValueRange},
    iso::{is_valid_iso_day, IsoDate},
    parsers::FormattableYearMonth,
    TemporalResult,
};

/// A month of a year in the proleptic ISO calendar, such as `2007-12`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainYearMonth {
    year: i32,
    month: u8,
}

impl PlainYearMonth {
    /// Creates a new `PlainYearMonth`, range checking both fields.
    pub fn of(year: i64, month: u8) -> TemporalResult<Self> {
        let year = ChronoField::Year
            .range()
            .check_valid_int_value(year, ChronoField::Year.into())?;
        ChronoField::MonthOfYear
            .range()
            .check_valid_value(i64::from(month), ChronoField::MonthOfYear.into())?;
        Ok(Self { year, month })
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
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
    pub fn is_leap_year(&self) -> bool {
        crate::utils::is_leap(i64::from(self.year))
    }

    #[inline]
    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        crate::utils::iso_days_in_month(i64::from(self.year), self.month)
    }

    /// Returns whether `day` is a valid day of this month.
    #[inline]
    #[must_use]
    pub fn is_valid_day(&self, day: u8) -> bool {
        is_valid_iso_day(self.year, self.month, day)
    }

    /// Combines this year month with `day`.
    pub fn at_day(&self, day: u8) -> TemporalResult<PlainDate> {
        IsoDate::try_new(i64::from(self.year), i64::from(self.month), i64::from(day))
            .map(PlainDate::new_unchecked)
    }

    fn proleptic_month(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl TemporalAccessor for PlainYearMonth {
    fn is_supported(&self, field: Field) -> bool {
        match field {
            Field::Chrono(field) => matches!(
                field,
                ChronoField::MonthOfYear
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
            Field::Chrono(ChronoField::YearOfEra) if self.year <= 0 => {
                Ok(ValueRange::of(1, i64::from(crate::Year::MAX_VALUE) + 1))
            }
            Field::Chrono(ChronoField::YearOfEra) => {
                Ok(ValueRange::of(1, i64::from(crate::Year::MAX_VALUE)))
            }
            _ => default_range(self, field),
        }
    }

    fn get_long(&self, field: Field) -> TemporalResult<i64> {
        let year = i64::from(self.year);
        match field {
            Field::Chrono(ChronoField::MonthOfYear) => Ok(i64::from(self.month)),
            Field::Chrono(ChronoField::ProlepticMonth) => Ok(self.proleptic_month()),
            Field::Chrono(ChronoField::YearOfEra) => Ok(if year < 1 { 1 - year } else { year }),
            Field::Chrono(ChronoField::Year) => Ok(year),
            Field::Chrono(ChronoField::Era) => Ok(i64::from(year >= 1)),
            Field::Chrono(_) => Err(unsupported_field(field)),
            Field::Custom(field) => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<Unit> {
        Some(ChronoUnit::Months.into())
    }
}

impl Writeable for PlainYearMonth {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        FormattableYearMonth(self.year, self.month).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableYearMonth(self.year, self.month).writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(PlainYearMonth);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::PlainYearMonth;
    use crate::{
        builtins::core::{Month, PlainDate},
        error::ErrorKind,
        fields::{ChronoField, TemporalAccessor},
    };

    #[test]
    fn month_lengths() {
        let february = PlainYearMonth::of(2024, 2).unwrap();
        assert_eq!(february.length_of_month(), 29);
        assert!(february.is_valid_day(29));
        assert!(!february.is_valid_day(30));
        assert!(!february.is_valid_day(0));
        assert_eq!(february.month().unwrap(), Month::February);
        assert_eq!(PlainYearMonth::of(1900, 2).unwrap().length_of_month(), 28);
    }

    #[test]
    fn at_day() {
        let ym = PlainYearMonth::of(2023, 4).unwrap();
        assert_eq!(ym.at_day(30).unwrap(), PlainDate::of(2023, 4, 30).unwrap());
        assert_eq!(ym.at_day(31).unwrap_err().kind(), ErrorKind::DateTime);
    }

    #[test]
    fn fields_and_text() {
        let ym = PlainYearMonth::of(-5, 11).unwrap();
        assert_eq!(ym.get(ChronoField::YearOfEra.into()).unwrap(), 6);
        assert_eq!(ym.get_long(ChronoField::ProlepticMonth.into()).unwrap(), -50);
        assert!(!ym.is_supported(ChronoField::DayOfMonth.into()));
        assert_eq!(ym.to_string(), "-0005-11");
        assert_eq!(PlainYearMonth::of(2007, 3).unwrap().to_string(), "2007-03");
        assert_eq!(
            PlainYearMonth::of(2007, 13).unwrap_err().kind(),
            ErrorKind::Range
        );
    }
}
