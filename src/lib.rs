//! The `iso_date` crate implements an immutable calendar date: a year, month,
//! and day with no time of day and no time zone.
//!
//! ```rust
//! use iso_date::CalendarDate;
//! use core::str::FromStr;
//!
//! let date = CalendarDate::from_str("2023-07-17").unwrap();
//! assert_eq!(date.year(), 2023);
//! // Months are zero based.
//! assert_eq!(date.month(), 6);
//! assert_eq!(date.value_of(), 1_689_552_000_000);
//!
//! // Field updates carry overflow into the next larger unit.
//! let next_year = date.with_month(12).unwrap();
//! assert_eq!(next_year.to_iso_string(), "2024-01-17");
//!
//! // The original value is untouched.
//! assert_eq!(date.to_string(), "2023-07-17");
//! ```
//!
//! A `CalendarDate` stores a single canonical instant: the milliseconds since
//! the Unix epoch at 00:00:00.000 UTC of its day. Construction is strict and
//! rejects any string that does not name a real calendar day, while the
//! `with_*` methods normalize out of range fields by carrying them into the
//! adjacent month or year.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Calendar fields are narrowed after range validation.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod iso;
pub mod options;
pub mod parsers;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;
mod locale;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::{DateError, ErrorKind};

/// The `iso_date` result type
pub type DateResult<T> = Result<T, DateError>;

pub use crate::builtins::{CalendarDate, DateInput};

#[cfg(feature = "sys")]
pub use crate::sys::UtcHostSystem;

#[doc(hidden)]
#[macro_export]
macro_rules! date_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DateError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DateError::assert());
        }
    };
}

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// The largest number of days a date may lie from the Unix epoch.
pub const MAX_EPOCH_DAYS: i64 = 100_000_000;
/// The largest number of milliseconds a date may lie from the Unix epoch: 8.64e+15
pub const MAX_EPOCH_MILLISECONDS: i64 = MAX_EPOCH_DAYS * MS_PER_DAY;
