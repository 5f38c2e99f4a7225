//! Utility arithmetic and date equations

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, ToPrimitive};

use crate::{TemporalError, TemporalResult};

#[doc(hidden)]
pub(crate) use timezone_provider::utils::{
    epoch_days_from_gregorian_date, is_leap, iso_day_of_week, iso_days_in_month, month_to_day,
    ymd_from_epoch_days,
};

/// Adds with overflow detection, failing with an arithmetic error.
#[inline]
pub(crate) fn checked_add<T: CheckedAdd>(lhs: T, rhs: T) -> TemporalResult<T> {
    lhs.checked_add(&rhs).ok_or_else(TemporalError::arithmetic)
}

/// Subtracts with overflow detection, failing with an arithmetic error.
#[inline]
pub(crate) fn checked_sub<T: CheckedSub>(lhs: T, rhs: T) -> TemporalResult<T> {
    lhs.checked_sub(&rhs).ok_or_else(TemporalError::arithmetic)
}

/// Multiplies with overflow detection, failing with an arithmetic error.
#[inline]
pub(crate) fn checked_mul<T: CheckedMul>(lhs: T, rhs: T) -> TemporalResult<T> {
    lhs.checked_mul(&rhs).ok_or_else(TemporalError::arithmetic)
}

/// Narrows to an `i32`, failing with an arithmetic error.
#[inline]
pub(crate) fn to_i32<T: ToPrimitive>(value: T) -> TemporalResult<i32> {
    value.to_i32().ok_or_else(TemporalError::arithmetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(checked_add(1i64, 2), Ok(3));
        assert_eq!(
            checked_add(i64::MAX, 1).map_err(|e| e.kind()),
            Err(ErrorKind::Arithmetic)
        );
        assert_eq!(
            checked_mul(i64::MAX / 10 + 1, 10).map_err(|e| e.kind()),
            Err(ErrorKind::Arithmetic)
        );
        assert_eq!(checked_sub(i64::MIN + 1, 1), Ok(i64::MIN));
        assert!(to_i32(i64::from(i32::MAX) + 1).is_err());
    }
}
