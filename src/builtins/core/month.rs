//! This module implements `Month`.

use alloc::format;
use core::fmt;

use crate::{TemporalError, TemporalResult};

/// A month of the year, January through December.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Returns the month for the one based `month`.
    pub fn of(month: u8) -> TemporalResult<Self> {
        month
            .checked_sub(1)
            .and_then(|index| MONTHS.get(usize::from(index)))
            .copied()
            .ok_or_else(|| {
                TemporalError::general(format!("Invalid value for MonthOfYear: {month}"))
            })
    }

    /// Returns the one based value of this month.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Returns the length of this month in days.
    #[must_use]
    pub const fn length(self, leap_year: bool) -> u8 {
        match self {
            Self::February if leap_year => 29,
            Self::February => 28,
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }

    #[must_use]
    pub const fn min_length(self) -> u8 {
        self.length(false)
    }

    #[must_use]
    pub const fn max_length(self) -> u8 {
        self.length(true)
    }

    /// Returns the one based day of the year this month starts on.
    #[must_use]
    pub const fn first_day_of_year(self, leap_year: bool) -> u16 {
        crate::utils::month_to_day(self.value() - 1, leap_year) + 1
    }

    /// Returns the month `months` after this one, wrapping around the year.
    #[must_use]
    pub const fn plus(self, months: i64) -> Self {
        let index = (self.value() as i64 - 1 + months.rem_euclid(12)).rem_euclid(12);
        MONTHS[index as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = TemporalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Month;

    #[test]
    fn month_lengths() {
        assert_eq!(Month::February.length(true), 29);
        assert_eq!(Month::February.min_length(), 28);
        assert_eq!(Month::April.max_length(), 30);
        assert_eq!(Month::December.length(false), 31);
        assert_eq!(Month::March.first_day_of_year(false), 60);
        assert_eq!(Month::March.first_day_of_year(true), 61);
        assert_eq!(Month::January.first_day_of_year(true), 1);
    }

    #[test]
    fn month_arithmetic() {
        assert_eq!(Month::November.plus(3), Month::February);
        assert_eq!(Month::January.plus(-1), Month::December);
        assert_eq!(Month::May.plus(i64::MIN), Month::September);
        assert_eq!(Month::of(13).map_err(|e| e.kind()), Err(crate::error::ErrorKind::DateTime));
        assert!(Month::of(0).is_err());
        assert_eq!(Month::of(7).unwrap().value(), 7);
    }
}
