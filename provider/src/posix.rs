//! Recurring daylight saving rules, as found in a POSIX TZ string footer.
//!
//! For more information, see the [POSIX tz string docs](https://sourceware.org/glibc/manual/2.40/html_node/Proleptic-TZ.html)

use crate::{epoch_nanoseconds::SECONDS_PER_DAY, provider::UtcOffsetSeconds, utils};

/// The day of the year a recurring transition happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDay {
    /// `Jn`: the one based day of year in `1..=365`, February 29th is never counted.
    NoLeap(u16),
    /// `n`: the zero based day of year in `0..=365`, February 29th is counted.
    WithLeap(u16),
    /// `Mm.w.d`: day `d` (0 = Sunday) of week `w` (5 = last) of month `m`.
    Mwd { month: u8, week: u8, day: u8 },
}

/// A recurring transition: a day of the year and a local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDate {
    pub day: TransitionDay,
    /// Seconds after local midnight, may be negative or exceed a day.
    pub time: i64,
}

impl TransitionDate {
    /// Returns the epoch seconds at which this transition happens in `year`,
    /// given the offset in effect just before it.
    pub fn epoch_seconds_for_year(&self, year: i64, offset: UtcOffsetSeconds) -> i64 {
        let year_epoch_seconds = utils::epoch_days_for_year(year) * SECONDS_PER_DAY;
        let is_leap = utils::is_leap(year);

        // Zero based days from the start of the year.
        let days = match self.day {
            TransitionDay::NoLeap(day) if day > 59 => i64::from(day) - 1 + i64::from(is_leap),
            TransitionDay::NoLeap(day) => i64::from(day) - 1,
            TransitionDay::WithLeap(day) => i64::from(day),
            TransitionDay::Mwd { month, week, day } => {
                let days_to_month = i64::from(utils::month_to_day(month.saturating_sub(1), is_leap));
                let days_in_month = i64::from(utils::iso_days_in_month(year, month));
                // 0 = Sunday, matching the POSIX day numbering.
                let first_weekday = i64::from(
                    utils::iso_day_of_week(utils::epoch_days_for_year(year) + days_to_month) % 7,
                );
                let mut day_of_month =
                    (i64::from(day) - first_weekday).rem_euclid(7) + (i64::from(week) - 1) * 7;
                // Week 5 means the last matching weekday of the month.
                if day_of_month >= days_in_month {
                    day_of_month -= 7;
                }
                days_to_month + day_of_month
            }
        };

        year_epoch_seconds + days * SECONDS_PER_DAY + self.time - offset.0
    }
}

/// The daylight saving portion of a recurring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightRule {
    pub offset: UtcOffsetSeconds,
    pub start: TransitionDate,
    pub end: TransitionDate,
}

/// A recurring rule that applies after the last explicit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringRule {
    pub standard_offset: UtcOffsetSeconds,
    pub daylight: Option<DaylightRule>,
}

impl RecurringRule {
    pub const fn fixed(offset: UtcOffsetSeconds) -> Self {
        Self {
            standard_offset: offset,
            daylight: None,
        }
    }

    pub const fn with_daylight(standard_offset: UtcOffsetSeconds, daylight: DaylightRule) -> Self {
        Self {
            standard_offset,
            daylight: Some(daylight),
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.daylight.is_none()
    }

    /// Resolves the offset in effect at `epoch_seconds`.
    pub fn offset_at(&self, epoch_seconds: i64) -> UtcOffsetSeconds {
        let Some(daylight) = self.daylight else {
            return self.standard_offset;
        };
        let local_days = (epoch_seconds + self.standard_offset.0).div_euclid(SECONDS_PER_DAY);
        let (year, _, _) = utils::ymd_from_epoch_days(local_days);

        let start = daylight
            .start
            .epoch_seconds_for_year(year, self.standard_offset);
        let end = daylight.end.epoch_seconds_for_year(year, daylight.offset);

        let in_daylight = if start < end {
            (start..end).contains(&epoch_seconds)
        } else {
            // Southern hemisphere, daylight saving spans the new year.
            !(end..start).contains(&epoch_seconds)
        };

        if in_daylight {
            daylight.offset
        } else {
            self.standard_offset
        }
    }
}
