//! The standard set of fields and units.

use core::fmt;

use crate::{fields::ValueRange, Year};

const YEAR_MIN: i64 = Year::MIN_VALUE as i64;
const YEAR_MAX: i64 = Year::MAX_VALUE as i64;

/// The standard fields of the proleptic ISO calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChronoField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    /// Monday = 1 through Sunday = 7.
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    /// Days since 1970-01-01.
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    /// Months since year 0, `year * 12 + (month - 1)`.
    ProlepticMonth,
    /// The year within the era, always positive.
    YearOfEra,
    /// The proleptic year, where year 0 is 1 BCE.
    Year,
    /// 0 for BCE, 1 for CE.
    Era,
    InstantSeconds,
    OffsetSeconds,
}

impl ChronoField {
    /// Returns the name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NanoOfSecond => "NanoOfSecond",
            Self::NanoOfDay => "NanoOfDay",
            Self::MicroOfSecond => "MicroOfSecond",
            Self::MicroOfDay => "MicroOfDay",
            Self::MilliOfSecond => "MilliOfSecond",
            Self::MilliOfDay => "MilliOfDay",
            Self::SecondOfMinute => "SecondOfMinute",
            Self::SecondOfDay => "SecondOfDay",
            Self::MinuteOfHour => "MinuteOfHour",
            Self::MinuteOfDay => "MinuteOfDay",
            Self::HourOfAmPm => "HourOfAmPm",
            Self::ClockHourOfAmPm => "ClockHourOfAmPm",
            Self::HourOfDay => "HourOfDay",
            Self::ClockHourOfDay => "ClockHourOfDay",
            Self::AmPmOfDay => "AmPmOfDay",
            Self::DayOfWeek => "DayOfWeek",
            Self::AlignedDayOfWeekInMonth => "AlignedDayOfWeekInMonth",
            Self::AlignedDayOfWeekInYear => "AlignedDayOfWeekInYear",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::EpochDay => "EpochDay",
            Self::AlignedWeekOfMonth => "AlignedWeekOfMonth",
            Self::AlignedWeekOfYear => "AlignedWeekOfYear",
            Self::MonthOfYear => "MonthOfYear",
            Self::ProlepticMonth => "ProlepticMonth",
            Self::YearOfEra => "YearOfEra",
            Self::Year => "Year",
            Self::Era => "Era",
            Self::InstantSeconds => "InstantSeconds",
            Self::OffsetSeconds => "OffsetSeconds",
        }
    }

    /// Returns the unit the field is measured in.
    #[must_use]
    pub const fn base_unit(self) -> ChronoUnit {
        match self {
            Self::NanoOfSecond | Self::NanoOfDay => ChronoUnit::Nanos,
            Self::MicroOfSecond | Self::MicroOfDay => ChronoUnit::Micros,
            Self::MilliOfSecond | Self::MilliOfDay => ChronoUnit::Millis,
            Self::SecondOfMinute
            | Self::SecondOfDay
            | Self::InstantSeconds
            | Self::OffsetSeconds => ChronoUnit::Seconds,
            Self::MinuteOfHour | Self::MinuteOfDay => ChronoUnit::Minutes,
            Self::HourOfAmPm | Self::ClockHourOfAmPm | Self::HourOfDay | Self::ClockHourOfDay => {
                ChronoUnit::Hours
            }
            Self::AmPmOfDay => ChronoUnit::HalfDays,
            Self::DayOfWeek
            | Self::AlignedDayOfWeekInMonth
            | Self::AlignedDayOfWeekInYear
            | Self::DayOfMonth
            | Self::DayOfYear
            | Self::EpochDay => ChronoUnit::Days,
            Self::AlignedWeekOfMonth | Self::AlignedWeekOfYear => ChronoUnit::Weeks,
            Self::MonthOfYear | Self::ProlepticMonth => ChronoUnit::Months,
            Self::YearOfEra | Self::Year => ChronoUnit::Years,
            Self::Era => ChronoUnit::Eras,
        }
    }

    /// Returns the unit the field is bound by.
    #[must_use]
    pub const fn range_unit(self) -> ChronoUnit {
        match self {
            Self::NanoOfSecond | Self::MicroOfSecond | Self::MilliOfSecond => {
                ChronoUnit::Seconds
            }
            Self::SecondOfMinute => ChronoUnit::Minutes,
            Self::MinuteOfHour => ChronoUnit::Hours,
            Self::HourOfAmPm | Self::ClockHourOfAmPm => ChronoUnit::HalfDays,
            Self::NanoOfDay
            | Self::MicroOfDay
            | Self::MilliOfDay
            | Self::SecondOfDay
            | Self::MinuteOfDay
            | Self::HourOfDay
            | Self::ClockHourOfDay
            | Self::AmPmOfDay => ChronoUnit::Days,
            Self::DayOfWeek | Self::AlignedDayOfWeekInMonth | Self::AlignedDayOfWeekInYear => {
                ChronoUnit::Weeks
            }
            Self::DayOfMonth | Self::AlignedWeekOfMonth => ChronoUnit::Months,
            Self::DayOfYear | Self::AlignedWeekOfYear | Self::MonthOfYear => ChronoUnit::Years,
            Self::YearOfEra => ChronoUnit::Eras,
            Self::EpochDay
            | Self::ProlepticMonth
            | Self::Year
            | Self::Era
            | Self::InstantSeconds
            | Self::OffsetSeconds => ChronoUnit::Forever,
        }
    }

    /// Returns the outer range of valid values for this field.
    #[must_use]
    pub const fn range(self) -> ValueRange {
        match self {
            Self::NanoOfSecond => ValueRange::of(0, 999_999_999),
            Self::NanoOfDay => ValueRange::of(0, 86_400 * 1_000_000_000 - 1),
            Self::MicroOfSecond => ValueRange::of(0, 999_999),
            Self::MicroOfDay => ValueRange::of(0, 86_400 * 1_000_000 - 1),
            Self::MilliOfSecond => ValueRange::of(0, 999),
            Self::MilliOfDay => ValueRange::of(0, 86_400 * 1000 - 1),
            Self::SecondOfMinute => ValueRange::of(0, 59),
            Self::SecondOfDay => ValueRange::of(0, 86_400 - 1),
            Self::MinuteOfHour => ValueRange::of(0, 59),
            Self::MinuteOfDay => ValueRange::of(0, 24 * 60 - 1),
            Self::HourOfAmPm => ValueRange::of(0, 11),
            Self::ClockHourOfAmPm => ValueRange::of(1, 12),
            Self::HourOfDay => ValueRange::of(0, 23),
            Self::ClockHourOfDay => ValueRange::of(1, 24),
            Self::AmPmOfDay => ValueRange::of(0, 1),
            Self::DayOfWeek | Self::AlignedDayOfWeekInMonth | Self::AlignedDayOfWeekInYear => {
                ValueRange::of(1, 7)
            }
            Self::DayOfMonth => ValueRange::of_variable_max(1, 28, 31),
            Self::DayOfYear => ValueRange::of_variable_max(1, 365, 366),
            Self::EpochDay => ValueRange::of(-365_243_219_162, 365_241_780_471),
            Self::AlignedWeekOfMonth => ValueRange::of_variable_max(1, 4, 5),
            Self::AlignedWeekOfYear => ValueRange::of(1, 53),
            Self::MonthOfYear => ValueRange::of(1, 12),
            Self::ProlepticMonth => ValueRange::of(YEAR_MIN * 12, YEAR_MAX * 12 + 11),
            Self::YearOfEra => ValueRange::of_variable_max(1, YEAR_MAX, YEAR_MAX + 1),
            Self::Year => ValueRange::of(YEAR_MIN, YEAR_MAX),
            Self::Era => ValueRange::of(0, 1),
            Self::InstantSeconds => ValueRange::of(i64::MIN, i64::MAX),
            Self::OffsetSeconds => ValueRange::of(-18 * 3600, 18 * 3600),
        }
    }

    /// Returns whether this field is part of the date.
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::EpochDay
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
                | Self::MonthOfYear
                | Self::ProlepticMonth
                | Self::YearOfEra
                | Self::Year
                | Self::Era
        )
    }

    /// Returns whether this field is part of the time of day.
    #[must_use]
    pub const fn is_time_based(self) -> bool {
        (self as u8) < (Self::DayOfWeek as u8)
    }
}

impl fmt::Display for ChronoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The estimated length of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitDuration {
    pub seconds: i64,
    pub nanos: u32,
}

impl UnitDuration {
    const fn of_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}

const SECONDS_PER_YEAR: i64 = 31_556_952;

/// The standard units of the proleptic ISO calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChronoUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

impl ChronoUnit {
    /// Returns the name of the unit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanos => "Nanos",
            Self::Micros => "Micros",
            Self::Millis => "Millis",
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::HalfDays => "HalfDays",
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
            Self::Decades => "Decades",
            Self::Centuries => "Centuries",
            Self::Millennia => "Millennia",
            Self::Eras => "Eras",
            Self::Forever => "Forever",
        }
    }

    /// Returns the (estimated) duration of the unit.
    ///
    /// Units of a day or longer are estimates: a year is 365.2425 days.
    #[must_use]
    pub const fn duration(self) -> UnitDuration {
        match self {
            Self::Nanos => UnitDuration {
                seconds: 0,
                nanos: 1,
            },
            Self::Micros => UnitDuration {
                seconds: 0,
                nanos: 1_000,
            },
            Self::Millis => UnitDuration {
                seconds: 0,
                nanos: 1_000_000,
            },
            Self::Seconds => UnitDuration::of_seconds(1),
            Self::Minutes => UnitDuration::of_seconds(60),
            Self::Hours => UnitDuration::of_seconds(3_600),
            Self::HalfDays => UnitDuration::of_seconds(43_200),
            Self::Days => UnitDuration::of_seconds(86_400),
            Self::Weeks => UnitDuration::of_seconds(7 * 86_400),
            Self::Months => UnitDuration::of_seconds(SECONDS_PER_YEAR / 12),
            Self::Years => UnitDuration::of_seconds(SECONDS_PER_YEAR),
            Self::Decades => UnitDuration::of_seconds(SECONDS_PER_YEAR * 10),
            Self::Centuries => UnitDuration::of_seconds(SECONDS_PER_YEAR * 100),
            Self::Millennia => UnitDuration::of_seconds(SECONDS_PER_YEAR * 1_000),
            Self::Eras => UnitDuration::of_seconds(SECONDS_PER_YEAR * 1_000_000_000),
            Self::Forever => UnitDuration {
                seconds: i64::MAX,
                nanos: 999_999_999,
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_duration_estimated(self) -> bool {
        self as u8 >= Self::Days as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        self as u8 >= Self::Days as u8 && !matches!(self, Self::Forever)
    }

    #[inline]
    #[must_use]
    pub const fn is_time_based(self) -> bool {
        (self as u8) < (Self::Days as u8)
    }
}

impl fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
