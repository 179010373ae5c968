//! Utility date equations for the proleptic Gregorian calendar.
//!
//! The conversions between epoch days and calendar fields follow the
//! Euclidean affine functions described by Cassio Neri and Lorenz
//! Schneider. All divisions that can observe a negative dividend are
//! floored, so the equations hold across the whole representable range.

use crate::MS_PER_DAY;

/// The computational rata die of 1970-01-01, counted from 0000-03-01.
const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

// ==== Begin Date Equations ====

/// Returns the epoch day number of the first day of `month` (1-12) in `year`.
///
/// Functionally the same as Date's abstract operation `MakeDay` with a date of 1.
pub(crate) fn epoch_days_for_month_start(year: i64, month: u8) -> i64 {
    debug_assert!((1..=12).contains(&month));
    // Shift January and February to the end of the previous computational year.
    let j = i64::from(month <= 2);
    let computational_year = year - j;
    let computational_month = i64::from(month) + 12 * j;
    let century = computational_year.div_euclid(100);

    let y_star = (1461 * computational_year).div_euclid(4) - century + century.div_euclid(4);
    let m_star = (979 * computational_month - 2919) / 32;

    y_star + m_star - EPOCH_COMPUTATIONAL_RATA_DIE
}

/// Returns the Gregorian `(year, month, day)` for an epoch day number.
///
/// `month` is in the range 1-12.
pub(crate) fn ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE;

    // Century and the day within the century.
    let n_one = 4 * rata_die + 3;
    let century = n_one.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let century_rem = n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE) as u32;

    // Year of the century and the computational day of the year.
    let n_two = century_rem | 3;
    let year_of_century = (376_287_347 * u64::from(n_two) / TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;

    // Computational month and day.
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    // Shift January and February back into the following Gregorian year.
    let j = u32::from(day_of_year >= 306);
    let year = 100 * century + i64::from(year_of_century) + i64::from(j);

    (year as i32, (month - 12 * j) as u8, (day + 1) as u8)
}

/// `EpochDaysToEpochMS` for a UTC midnight.
#[inline]
pub(crate) const fn epoch_days_to_epoch_ms(epoch_days: i64) -> i64 {
    epoch_days * MS_PER_DAY
}

/// `EpochTimeToDayNumber`
///
/// This equation is the equivalent to `ECMAScript`'s `Day(t)`
#[inline]
pub(crate) const fn epoch_ms_to_epoch_days(t: i64) -> i64 {
    t.div_euclid(MS_PER_DAY)
}

/// Returns the weekday for an epoch day number, where Sunday is `0`.
///
/// 1970-01-01 was a Thursday.
#[inline]
pub(crate) const fn weekday_for_epoch_days(epoch_days: i64) -> u8 {
    (epoch_days + 4).rem_euclid(7) as u8
}

// ==== End Date Equations ====

// ==== Begin Calendar Equations ====

/// Mathematically determine whether a year is a leap year.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// `ISODaysInMonth ( year, month )`
pub(crate) const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// ==== End Calendar Equations ====
