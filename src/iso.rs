//! This module implements the internal ISO date record.
//!
//! An `IsoDate` represents the `[[ISOYear]]`, `[[ISOMonth]]`, and `[[ISODay]]`
//! fields of a Gregorian calendar day. Unlike a `CalendarDate`, whose month
//! is zero based, the `IsoDate` month is in the range 1-12.

use crate::{utils, MAX_EPOCH_DAYS};

/// `IsoDate` serves as a record for the year, month, and day of a calendar date.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a balanced `IsoDate` from a possibly out of range year, month
    /// index, and day.
    ///
    /// `month_index` is zero based. Day overflow carries into the month and
    /// month overflow carries into the year, so `(2023, 12, 1)` balances to
    /// 2024-01-01 and `(2023, 2, 0)` balances to 2023-02-28.
    ///
    /// Returns `None` when the balanced date is outside of the representable
    /// range.
    pub(crate) fn balance(year: i32, month_index: i32, day: i32) -> Option<Self> {
        let epoch_days = balanced_epoch_days(year, month_index, day);
        if epoch_days.abs() > MAX_EPOCH_DAYS {
            return None;
        }
        Some(Self::from_epoch_days(epoch_days))
    }

    /// Creates an `IsoDate` from an epoch day number.
    #[inline]
    pub(crate) fn from_epoch_days(epoch_days: i64) -> Self {
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days);
        Self::new_unchecked(year, month, day)
    }

    /// Functionally the same as Date's abstract operation `MakeDay`
    ///
    /// Equivalent to `IsoDateToEpochDays`
    #[inline]
    pub(crate) fn to_epoch_days(self) -> i64 {
        utils::epoch_days_for_month_start(i64::from(self.year), self.month) + i64::from(self.day)
            - 1
    }

    /// Returns if the current `IsoDate` is valid.
    #[inline]
    pub(crate) fn is_valid(self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }
}

// ==== `IsoDate` specific utility functions ====

/// Returns the epoch days for a year, zero based month index, and day that
/// may each be out of range.
#[inline]
fn balanced_epoch_days(year: i32, month_index: i32, day: i32) -> i64 {
    // 1. Let resolvedYear be year + floor(month / 12).
    let resolved_year = i64::from(year) + i64::from(month_index.div_euclid(12));
    // 2. Let resolvedMonth be month modulo 12.
    let resolved_month = month_index.rem_euclid(12) as u8 + 1;
    // 3. Find the day number of the first day of resolvedMonth in resolvedYear.
    let month_start = utils::epoch_days_for_month_start(resolved_year, resolved_month);
    // 4. Return that day number + date - 1.
    month_start + i64::from(day) - 1
}

// Determines if the month and day are valid for the given year.
#[inline]
fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    (1..=utils::iso_days_in_month(year, month)).contains(&day)
}
