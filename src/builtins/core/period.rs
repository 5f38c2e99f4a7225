//! This module implements `Period`, a date based amount.

use alloc::{vec, vec::Vec};
use core::fmt;

use writeable::{LengthHint, Writeable};

use crate::{
    fields::{unsupported_unit, ChronoUnit, TemporalAmount, Unit},
    utils::{checked_add, checked_mul, checked_sub, to_i32},
    TemporalResult,
};

/// An amount of years, months and days, such as `P1Y2M3D`.
///
/// The three parts are independent and may carry different signs. Adding a
/// period adds the years and months together first, then the days.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    pub const ZERO: Self = Self::of(0, 0, 0);

    #[must_use]
    pub const fn of(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    #[must_use]
    pub const fn of_years(years: i32) -> Self {
        Self::of(years, 0, 0)
    }

    #[must_use]
    pub const fn of_months(months: i32) -> Self {
        Self::of(0, months, 0)
    }

    pub fn of_weeks(weeks: i32) -> TemporalResult<Self> {
        Ok(Self::of(0, 0, checked_mul(weeks, 7)?))
    }

    #[must_use]
    pub const fn of_days(days: i32) -> Self {
        Self::of(0, 0, days)
    }

    #[inline]
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns whether any part is negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    pub fn plus(&self, other: &Self) -> TemporalResult<Self> {
        Ok(Self::of(
            checked_add(self.years, other.years)?,
            checked_add(self.months, other.months)?,
            checked_add(self.days, other.days)?,
        ))
    }

    pub fn minus(&self, other: &Self) -> TemporalResult<Self> {
        Ok(Self::of(
            checked_sub(self.years, other.years)?,
            checked_sub(self.months, other.months)?,
            checked_sub(self.days, other.days)?,
        ))
    }

    pub fn negated(&self) -> TemporalResult<Self> {
        self.multiplied_by(-1)
    }

    pub fn multiplied_by(&self, scalar: i32) -> TemporalResult<Self> {
        Ok(Self::of(
            checked_mul(self.years, scalar)?,
            checked_mul(self.months, scalar)?,
            checked_mul(self.days, scalar)?,
        ))
    }

    /// Returns the years and months as a total number of months.
    #[must_use]
    pub fn to_total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    /// Moves whole years out of the months, the days are left untouched.
    pub fn normalized(&self) -> TemporalResult<Self> {
        let total = self.to_total_months();
        Ok(Self::of(to_i32(total / 12)?, to_i32(total % 12)?, self.days))
    }
}

impl TemporalAmount for Period {
    fn units(&self) -> Vec<Unit> {
        vec![
            ChronoUnit::Years.into(),
            ChronoUnit::Months.into(),
            ChronoUnit::Days.into(),
        ]
    }

    fn get(&self, unit: Unit) -> TemporalResult<i64> {
        match unit {
            Unit::Chrono(ChronoUnit::Years) => Ok(i64::from(self.years)),
            Unit::Chrono(ChronoUnit::Months) => Ok(i64::from(self.months)),
            Unit::Chrono(ChronoUnit::Days) => Ok(i64::from(self.days)),
            _ => Err(unsupported_unit(unit)),
        }
    }
}

impl Writeable for Period {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.is_zero() {
            return sink.write_str("P0D");
        }
        sink.write_char('P')?;
        for (value, designator) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if value != 0 {
                value.write_to(sink)?;
                sink.write_char(designator)?;
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::between(3, 37)
    }
}

writeable::impl_display_with_writeable!(Period);
