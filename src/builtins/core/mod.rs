//! The core implementation of the `iso_date` builtins.

mod date;

#[doc(inline)]
pub use date::{CalendarDate, DateInput};
