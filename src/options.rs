//! Native implementation of the locale display options.
//!
//! The knobs mirror the date components of `Intl.DateTimeFormat`: each
//! component may be omitted, shown numerically, or shown as text.

use core::{fmt, str::FromStr};

/// The options accepted by [`CalendarDate::to_locale_string`][crate::CalendarDate::to_locale_string].
///
/// When every component is `None`, the year, month, and day are shown
/// numerically.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormatOptions {
    pub weekday: Option<TextStyle>,
    pub year: Option<NumericStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumericStyle>,
}

impl LocaleFormatOptions {
    /// Creates a new set of options with every component omitted.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weekday: None,
            year: None,
            month: None,
            day: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_weekday(mut self, style: TextStyle) -> Self {
        self.weekday = Some(style);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_year(mut self, style: NumericStyle) -> Self {
        self.year = Some(style);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_month(mut self, style: MonthStyle) -> Self {
        self.month = Some(style);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_day(mut self, style: NumericStyle) -> Self {
        self.day = Some(style);
        self
    }

    /// Returns whether no component was requested.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.weekday.is_none() && self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// Fills in the numeric year, month, and day when no component was requested.
    #[must_use]
    pub(crate) const fn with_defaults(self) -> Self {
        if self.is_empty() {
            return Self::new()
                .with_year(NumericStyle::Numeric)
                .with_month(MonthStyle::Numeric)
                .with_day(NumericStyle::Numeric);
        }
        self
    }
}

/// The style of a textual component, such as the weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// `Monday`, formatted with the long length.
    Long,
    /// `Mon`, formatted with the medium length.
    Short,
    /// Formatted with the short length.
    Narrow,
}

/// A parsing error for `TextStyle`.
#[derive(Debug, Clone, Copy)]
pub struct ParseTextStyleError;

impl fmt::Display for ParseTextStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid text style")
    }
}

impl FromStr for TextStyle {
    type Err = ParseTextStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            "narrow" => Ok(Self::Narrow),
            _ => Err(ParseTextStyleError),
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => "long",
            Self::Short => "short",
            Self::Narrow => "narrow",
        }
        .fmt(f)
    }
}

/// The style of a numeric component, such as the year or day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    /// `7`
    Numeric,
    /// `07`
    TwoDigit,
}

/// A parsing error for `NumericStyle`.
#[derive(Debug, Clone, Copy)]
pub struct ParseNumericStyleError;

impl fmt::Display for ParseNumericStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid numeric style")
    }
}

impl FromStr for NumericStyle {
    type Err = ParseNumericStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(Self::Numeric),
            "2-digit" => Ok(Self::TwoDigit),
            _ => Err(ParseNumericStyleError),
        }
    }
}

impl fmt::Display for NumericStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => "numeric",
            Self::TwoDigit => "2-digit",
        }
        .fmt(f)
    }
}

/// The style of the month component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// `7`
    Numeric,
    /// `07`
    TwoDigit,
    /// `July`, formatted with the long length.
    Long,
    /// `Jul`, formatted with the medium length.
    Short,
    /// Formatted with the medium length, the same as `Short`.
    Narrow,
}

/// A parsing error for `MonthStyle`.
#[derive(Debug, Clone, Copy)]
pub struct ParseMonthStyleError;

impl fmt::Display for ParseMonthStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid month style")
    }
}

impl FromStr for MonthStyle {
    type Err = ParseMonthStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(Self::Numeric),
            "2-digit" => Ok(Self::TwoDigit),
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            "narrow" => Ok(Self::Narrow),
            _ => Err(ParseMonthStyleError),
        }
    }
}

impl fmt::Display for MonthStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => "numeric",
            Self::TwoDigit => "2-digit",
            Self::Long => "long",
            Self::Short => "short",
            Self::Narrow => "narrow",
        }
        .fmt(f)
    }
}
