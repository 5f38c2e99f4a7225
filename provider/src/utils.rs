//! Gregorian Date Calculations
//!
//! The epoch day conversions below follow Cassio Neri and Lorenz Schneider's
//! [Euclidean affine functions and their application to calendar algorithms][eaf-calendar-algorithms].
//!
//! Unlike a fixed cycle shift, the computational year is floored with
//! euclidean division, which keeps the equations valid over the whole
//! `i64` year range used by the value types (years ±999_999_999).
//!
//! [eaf-calendar-algorithms]: https://onlinelibrary.wiley.com/doi/full/10.1002/spe.3172

pub const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
pub const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

const TWO_POWER_SIXTEEN: i64 = 65_536; // 2^16 constant

/// Returns whether the proleptic ISO year is a leap year.
#[inline]
#[must_use]
pub const fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the provided ISO month.
#[must_use]
pub const fn iso_days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap(year) => 29,
        _ => 28,
    }
}

/// Returns the number of days before the zero based `month` index.
#[must_use]
pub const fn month_to_day(month_index: u8, is_leap: bool) -> u16 {
    let leap_day = is_leap as u16;
    match month_index {
        0 => 0,
        1 => 31,
        2 => 59 + leap_day,
        3 => 90 + leap_day,
        4 => 120 + leap_day,
        5 => 151 + leap_day,
        6 => 181 + leap_day,
        7 => 212 + leap_day,
        8 => 243 + leap_day,
        9 => 273 + leap_day,
        10 => 304 + leap_day,
        _ => 334 + leap_day,
    }
}

/// Calculate the epoch days for a proleptic gregorian date.
#[must_use]
pub const fn epoch_days_from_gregorian_date(year: i64, month: u8, day: u8) -> i64 {
    let j = (month <= 2) as i64;
    let comp_year = year - j;
    let comp_month = month as i64 + 12 * j;
    let comp_day = day as i64 - 1;
    let century = comp_year.div_euclid(100);
    let y_star = (1461 * comp_year).div_euclid(4) - century + century.div_euclid(4);
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day - EPOCH_COMPUTATIONAL_RATA_DIE
}

/// Calculate the epoch days of the first day of `year`.
#[inline]
#[must_use]
pub const fn epoch_days_for_year(year: i64) -> i64 {
    epoch_days_from_gregorian_date(year, 1, 1)
}

/// Calculates the proleptic gregorian year, month, and day for epoch days.
#[must_use]
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i64, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE;
    let n_one = 4 * rata_die + 3;
    let century = n_one.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let n_two = (n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE) / 4) * 4 + 3;
    let year_of_century = n_two / 1461;
    let day_of_year = (n_two % 1461) / 4;
    let n_three = 2141 * day_of_year + 197_913;
    let comp_month = n_three / TWO_POWER_SIXTEEN;
    let comp_day = (n_three % TWO_POWER_SIXTEEN) / 2141;
    let j = (day_of_year >= 306) as i64;
    (
        100 * century + year_of_century + j,
        (comp_month - 12 * j) as u8,
        (comp_day + 1) as u8,
    )
}

/// Returns the ISO day of week for epoch days, Monday = 1 through Sunday = 7.
#[inline]
#[must_use]
pub const fn iso_day_of_week(epoch_days: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    ((epoch_days + 3).rem_euclid(7) + 1) as u8
}
