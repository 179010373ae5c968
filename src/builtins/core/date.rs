//! This module implements `CalendarDate` and any directly related algorithms.

use alloc::string::String;
use core::str::FromStr;

use num_traits::ToPrimitive;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    host::HostClock,
    iso::IsoDate,
    locale,
    options::LocaleFormatOptions,
    parsers::{self, FormattableDate},
    utils, DateError, DateResult, MAX_EPOCH_DAYS, MAX_EPOCH_MILLISECONDS,
};

#[cfg(test)]
use quickcheck::Arbitrary;

#[cfg(test)]
mod tests;

/// The input accepted by [`CalendarDate::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// An ISO 8601 date or date-time string.
    Iso(&'a str),
    /// Milliseconds since the Unix epoch.
    EpochMilliseconds(i64),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Iso(value)
    }
}

impl From<i64> for DateInput<'_> {
    fn from(value: i64) -> Self {
        Self::EpochMilliseconds(value)
    }
}

/// An immutable Gregorian calendar date without a time of day or time zone.
///
/// A `CalendarDate` is stored as the milliseconds since the Unix epoch at
/// 00:00:00.000 UTC of its day. Equality and ordering follow that instant.
///
/// ```rust
/// use iso_date::CalendarDate;
///
/// let date = CalendarDate::try_new("2023-07-17").unwrap();
/// assert_eq!(date.value_of(), 1_689_552_000_000);
/// assert_eq!(date, CalendarDate::try_new(1_689_552_000_000).unwrap());
///
/// // Calendar fields are validated, never rolled over.
/// assert!(CalendarDate::try_new("2023-07-32").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    epoch_milliseconds: i64,
}

// ==== Private API ====

impl CalendarDate {
    /// Creates a `CalendarDate` from an epoch day number.
    ///
    /// The caller must ensure the day number is within `MAX_EPOCH_DAYS`.
    #[inline]
    #[must_use]
    pub(crate) const fn from_epoch_days_unchecked(epoch_days: i64) -> Self {
        Self {
            epoch_milliseconds: utils::epoch_days_to_epoch_ms(epoch_days),
        }
    }

    #[inline]
    pub(crate) const fn epoch_days(&self) -> i64 {
        utils::epoch_ms_to_epoch_days(self.epoch_milliseconds)
    }

    /// Returns the `IsoDate` record of this date.
    #[inline]
    pub(crate) fn iso(&self) -> IsoDate {
        IsoDate::from_epoch_days(self.epoch_days())
    }

    /// Rebuilds a date from a possibly out of range year, month index, and
    /// day, carrying overflow into the larger units.
    fn from_balanced_fields(year: i32, month_index: i32, day: i32) -> DateResult<Self> {
        let Some(iso) = IsoDate::balance(year, month_index, day) else {
            #[cfg(feature = "log")]
            log::debug!("rejected date fields ({year}, {month_index}, {day}): out of range");
            return Err(DateError::invalid_date()
                .with_message("Date is outside of the representable range."));
        };
        crate::date_assert!(iso.is_valid(), "balanced date {iso:?} is not a calendar date");
        let epoch_days = iso.to_epoch_days();
        crate::date_assert!(epoch_days.abs() <= MAX_EPOCH_DAYS);
        Ok(Self::from_epoch_days_unchecked(epoch_days))
    }
}

// ==== Public API ====

impl CalendarDate {
    /// Creates a new `CalendarDate` from an ISO string or epoch milliseconds.
    ///
    /// Any time of day in the input is discarded; the result is the UTC day
    /// that contains the input instant.
    #[inline]
    pub fn try_new<'a>(input: impl Into<DateInput<'a>>) -> DateResult<Self> {
        match input.into() {
            DateInput::Iso(s) => Self::try_from_str(s),
            DateInput::EpochMilliseconds(ms) => Self::try_from_epoch_milliseconds(ms),
        }
    }

    /// Creates a new `CalendarDate` for the UTC day containing `epoch_milliseconds`.
    pub fn try_from_epoch_milliseconds(epoch_milliseconds: i64) -> DateResult<Self> {
        if epoch_milliseconds.abs() > MAX_EPOCH_MILLISECONDS {
            #[cfg(feature = "log")]
            log::debug!("rejected epoch milliseconds {epoch_milliseconds}: out of range");
            return Err(DateError::invalid_input(epoch_milliseconds));
        }
        Ok(Self::from_epoch_days_unchecked(utils::epoch_ms_to_epoch_days(
            epoch_milliseconds,
        )))
    }

    /// Parses a new `CalendarDate` from an ISO 8601 date or date-time string.
    pub fn try_from_str(s: &str) -> DateResult<Self> {
        let epoch_milliseconds = parsers::parse_epoch_milliseconds(s).map_err(|_err| {
            #[cfg(feature = "log")]
            log::debug!("rejected date string `{s}`: {_err}");
            DateError::invalid_input(s)
        })?;
        Self::try_from_epoch_milliseconds(epoch_milliseconds)
    }

    /// Creates a `CalendarDate` for the current UTC day of the provided clock.
    pub fn now_with_clock(clock: &impl HostClock) -> DateResult<Self> {
        Self::try_from_epoch_milliseconds(clock.get_host_epoch_milliseconds()?)
    }

    /// Creates a `CalendarDate` for the current UTC day of the system clock.
    #[cfg(feature = "sys")]
    pub fn today_utc() -> DateResult<Self> {
        Self::now_with_clock(&crate::UtcHostSystem)
    }

    /// Returns the year of this date.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso().year
    }

    /// Returns the zero based month of this date, where January is `0`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso().month - 1
    }

    /// Returns the one based month of this date, where January is `1`.
    #[inline]
    #[must_use]
    pub fn iso_month(&self) -> u8 {
        self.iso().month
    }

    /// Returns the day of the month of this date.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso().day
    }

    /// Returns the day of the week of this date, where Sunday is `0` and
    /// Saturday is `6`.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> u8 {
        utils::weekday_for_epoch_days(self.epoch_days())
    }

    /// Returns the number of days in the month of this date.
    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        let iso = self.iso();
        utils::iso_days_in_month(iso.year, iso.month)
    }

    /// Returns whether this date falls in a leap year.
    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        utils::is_leap_year(self.year())
    }

    /// Returns the milliseconds since the Unix epoch at midnight UTC of this date.
    #[inline]
    #[must_use]
    pub const fn value_of(&self) -> i64 {
        self.epoch_milliseconds
    }

    /// Returns a new date with the year replaced.
    ///
    /// February 29 in a year that is not a leap year becomes March 1.
    pub fn with_year(&self, year: i32) -> DateResult<Self> {
        let iso = self.iso();
        Self::from_balanced_fields(year, i32::from(iso.month) - 1, i32::from(iso.day))
    }

    /// Returns a new date with the zero based month replaced.
    ///
    /// Months outside of `0..=11` carry into the year, so `12` is January of
    /// the following year and `-1` is December of the previous year.
    pub fn with_month(&self, month: i32) -> DateResult<Self> {
        let iso = self.iso();
        Self::from_balanced_fields(iso.year, month, i32::from(iso.day))
    }

    /// Returns a new date with the day of the month replaced.
    ///
    /// Days outside of the month carry into the month and year, so `0` is
    /// the last day of the previous month.
    pub fn with_day(&self, day: i32) -> DateResult<Self> {
        let iso = self.iso();
        Self::from_balanced_fields(iso.year, i32::from(iso.month) - 1, day)
    }

    /// Returns the ISO 8601 representation of this date: `YYYY-MM-DD`.
    #[inline]
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.write_to_string().into_owned()
    }

    /// Returns the JSON representation of this date, which is the same as
    /// [`Self::to_iso_string`].
    #[inline]
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_iso_string()
    }

    /// Formats this date for the first well formed locale in `locales`.
    ///
    /// An empty list formats with the root locale. A malformed locale tag
    /// returns a `Range` error.
    ///
    /// ```rust
    /// use iso_date::{options::{LocaleFormatOptions, MonthStyle, NumericStyle}, CalendarDate};
    ///
    /// let date = CalendarDate::try_new("2023-07-17").unwrap();
    /// let options = LocaleFormatOptions::new()
    ///     .with_year(NumericStyle::Numeric)
    ///     .with_month(MonthStyle::Long)
    ///     .with_day(NumericStyle::Numeric);
    /// let formatted = date.to_locale_string(&["en-US"], options).unwrap();
    /// assert!(formatted.contains("July"));
    /// ```
    pub fn to_locale_string(
        &self,
        locales: &[&str],
        options: LocaleFormatOptions,
    ) -> DateResult<String> {
        locale::format_date(self.iso(), locales, options)
    }
}

// ==== Trait impls ====

impl Writeable for CalendarDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let iso = self.iso();
        FormattableDate(iso.year, iso.month, iso.day).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let iso = self.iso();
        FormattableDate(iso.year, iso.month, iso.day).writeable_length_hint()
    }
}

impl_display_with_writeable!(CalendarDate);

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl TryFrom<&str> for CalendarDate {
    type Error = DateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_str(value)
    }
}

impl TryFrom<i64> for CalendarDate {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from_epoch_milliseconds(value)
    }
}

impl TryFrom<f64> for CalendarDate {
    type Error = DateError;

    /// Converts a floating point number of epoch milliseconds, truncating
    /// toward zero. `NaN` and infinities are rejected.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let Some(epoch_milliseconds) = value.to_i64() else {
            #[cfg(feature = "log")]
            log::debug!("rejected epoch milliseconds {value}: not representable");
            return Err(DateError::invalid_input(value));
        };
        Self::try_from_epoch_milliseconds(epoch_milliseconds)
            .map_err(|_| DateError::invalid_input(value))
    }
}

impl From<CalendarDate> for i64 {
    fn from(value: CalendarDate) -> Self {
        value.value_of()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarDate {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarDate {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de;

        struct CalendarDateVisitor;

        impl de::Visitor<'_> for CalendarDateVisitor {
            type Value = CalendarDate;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("an ISO 8601 date string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<CalendarDate, E> {
                let s = core::str::from_utf8(value).map_err(de::Error::custom)?;
                self.visit_str(s)
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<CalendarDate, E> {
                CalendarDate::try_from_str(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(CalendarDateVisitor)
    }
}

#[cfg(test)]
impl Arbitrary for CalendarDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let epoch_days = i64::arbitrary(g).rem_euclid(2 * MAX_EPOCH_DAYS + 1) - MAX_EPOCH_DAYS;
        Self::from_epoch_days_unchecked(epoch_days)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            self.epoch_days()
                .shrink()
                .map(Self::from_epoch_days_unchecked),
        )
    }
}
