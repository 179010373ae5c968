//! This module implements `DateError`.

use alloc::borrow::Cow;
use core::fmt;

/// `DateError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be resolved to a valid calendar date.
    #[default]
    InvalidDate,
    /// A value was outside of the range an operation supports.
    Range,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate => "InvalidDate",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `iso_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl DateError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create an invalid date error.
    #[inline]
    #[must_use]
    pub fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an invalid date error that reports the offending input.
    #[inline]
    #[must_use]
    pub fn invalid_input(input: impl fmt::Display) -> Self {
        Self::invalid_date().with_message(alloc::format!("invalid date `{input}`"))
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub(crate) fn assert() -> Self {
        Self::new(ErrorKind::Assert)
            .with_message("Implementation error: an internal date invariant did not hold.")
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for DateError {}
