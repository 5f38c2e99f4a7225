//! The `ValueRange` of a field.

use alloc::format;
use core::fmt;

use crate::{fields::Field, TemporalError, TemporalResult};

/// The range of valid values for a field.
///
/// A range may be variable: the smallest maximum of `DayOfMonth` is 28 and
/// its largest maximum is 31, which the value type refines through
/// [`TemporalAccessor::range`][crate::fields::TemporalAccessor::range].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min_smallest: i64,
    min_largest: i64,
    max_smallest: i64,
    max_largest: i64,
}

impl ValueRange {
    /// Creates a fixed range from `min` to `max`, inclusive.
    pub const fn of(min: i64, max: i64) -> Self {
        Self {
            min_smallest: min,
            min_largest: min,
            max_smallest: max,
            max_largest: max,
        }
    }

    /// Creates a range with a fixed minimum and a variable maximum.
    pub const fn of_variable_max(min: i64, max_smallest: i64, max_largest: i64) -> Self {
        Self {
            min_smallest: min,
            min_largest: min,
            max_smallest,
            max_largest,
        }
    }

    /// Creates a fully variable range.
    pub fn try_of_variable(
        min_smallest: i64,
        min_largest: i64,
        max_smallest: i64,
        max_largest: i64,
    ) -> TemporalResult<Self> {
        if min_smallest > min_largest {
            return Err(TemporalError::illegal_argument()
                .with_message("Smallest minimum value must be less than largest minimum value"));
        }
        if max_smallest > max_largest {
            return Err(TemporalError::illegal_argument()
                .with_message("Smallest maximum value must be less than largest maximum value"));
        }
        if min_largest > max_largest {
            return Err(TemporalError::illegal_argument()
                .with_message("Minimum value must be less than maximum value"));
        }
        Ok(Self {
            min_smallest,
            min_largest,
            max_smallest,
            max_largest,
        })
    }

    pub const fn minimum(&self) -> i64 {
        self.min_smallest
    }

    pub const fn largest_minimum(&self) -> i64 {
        self.min_largest
    }

    pub const fn smallest_maximum(&self) -> i64 {
        self.max_smallest
    }

    pub const fn maximum(&self) -> i64 {
        self.max_largest
    }

    /// Returns whether the range has a single minimum and maximum.
    pub const fn is_fixed(&self) -> bool {
        self.min_smallest == self.min_largest && self.max_smallest == self.max_largest
    }

    /// Returns whether every value in the range fits in an `i32`.
    pub const fn is_int_value(&self) -> bool {
        self.min_smallest >= i32::MIN as i64 && self.max_largest <= i32::MAX as i64
    }

    /// Returns whether `value` lies within the outer bounds of the range.
    pub const fn is_valid_value(&self, value: i64) -> bool {
        value >= self.min_smallest && value <= self.max_largest
    }

    pub const fn is_valid_int_value(&self, value: i64) -> bool {
        self.is_int_value() && self.is_valid_value(value)
    }

    /// Checks that `value` is valid for `field`, failing with a range error.
    pub fn check_valid_value(&self, value: i64, field: Field) -> TemporalResult<i64> {
        if !self.is_valid_value(value) {
            return Err(self.invalid_value(value, field));
        }
        Ok(value)
    }

    /// Checks that `value` is valid for `field` and fits in an `i32`.
    pub fn check_valid_int_value(&self, value: i64, field: Field) -> TemporalResult<i32> {
        if !self.is_valid_int_value(value) {
            return Err(self.invalid_value(value, field));
        }
        // NOTE: cast is safe, the range is an int range.
        Ok(value as i32)
    }

    fn invalid_value(&self, value: i64, field: Field) -> TemporalError {
        TemporalError::range().with_message(format!(
            "Invalid value for {} (valid values {self}): {value}",
            field.name()
        ))
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.min_smallest)?;
        if self.min_smallest != self.min_largest {
            write!(f, "/{}", self.min_largest)?;
        }
        write!(f, " - {}", self.max_smallest)?;
        if self.max_smallest != self.max_largest {
            write!(f, "/{}", self.max_largest)?;
        }
        Ok(())
    }
}
