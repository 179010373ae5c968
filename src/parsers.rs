//! This module implements ISO 8601 date string parsing and formatting.
//!
//! Parsing is backed by `ixdtf`, which validates every calendar field of the
//! source string. A date such as `2023-07-32` is rejected here and never rolls
//! over into the next month.

use crate::{utils, DateError, DateResult, MAX_EPOCH_MILLISECONDS};
use alloc::{format, string::String};
use ixdtf::{
    encoding::Utf8,
    parsers::IxdtfParser,
    records::{DateRecord, IxdtfParseRecord, TimeRecord, UtcOffsetRecordOrZ},
    ParseError,
};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Maps an `ixdtf` `ParseError` to a `DateError` with a readable message.
fn map_parse_error(err: ParseError) -> DateError {
    let message: String = match err {
        ParseError::InvalidMonthRange => "Month is outside of the range 1-12.".into(),
        ParseError::InvalidDayRange => "Day does not exist in the given month.".into(),
        ParseError::AbruptEnd { location } => format!("Date string ended while parsing {location}."),
        _ => format!("Malformed date string: {err:?}"),
    };
    DateError::invalid_date().with_message(message)
}

/// Parses an ISO 8601 date or date-time string into its epoch milliseconds.
///
/// The returned instant keeps any time of day present in the source and is
/// shifted to UTC when the source carries a UTC offset. A date-time without
/// an offset is read as UTC.
pub(crate) fn parse_epoch_milliseconds(source: &str) -> DateResult<i64> {
    let record = parse_ixdtf(source.as_bytes())?;

    if record.tz.is_some() || record.calendar.is_some() {
        return Err(DateError::invalid_date()
            .with_message("Annotations are not supported in date strings."));
    }

    let Some(date) = record.date else {
        return Err(
            DateError::invalid_date().with_message("Date strings must contain a date value.")
        );
    };

    let time_ms = record.time.map(time_record_to_ms).transpose()?.unwrap_or(0);
    let offset_ms = record.offset.map_or(0, offset_record_to_ms);

    let epoch_ms = date_record_to_epoch_ms(date) + time_ms - offset_ms;
    if epoch_ms.abs() > MAX_EPOCH_MILLISECONDS {
        return Err(DateError::invalid_date()
            .with_message("Date is outside of the representable range."));
    }
    Ok(epoch_ms)
}

/// Runs the full date-time grammar first, then falls back to the year-month
/// grammar so that `2023-07` resolves to the first of July.
#[inline]
fn parse_ixdtf(source: &[u8]) -> DateResult<IxdtfParseRecord<'_, Utf8>> {
    let err = match IxdtfParser::from_utf8(source).parse() {
        Ok(record) => return Ok(record),
        Err(err) => err,
    };

    match IxdtfParser::from_utf8(source).parse_year_month() {
        Ok(mut record) => {
            // The year-month grammar has no day; pin it to the first.
            if let Some(date) = record.date.as_mut() {
                date.day = 1;
            }
            Ok(record)
        }
        // Report the error from the full date-time grammar.
        Err(_) => Err(map_parse_error(err)),
    }
}

fn date_record_to_epoch_ms(record: DateRecord) -> i64 {
    let month_start = utils::epoch_days_for_month_start(i64::from(record.year), record.month);
    utils::epoch_days_to_epoch_ms(month_start + i64::from(record.day) - 1)
}

fn time_record_to_ms(record: TimeRecord) -> DateResult<i64> {
    if record.second > 59 {
        return Err(DateError::invalid_date().with_message("Leap seconds are not supported."));
    }
    let fraction_ms = record
        .fraction
        .and_then(|fraction| fraction.to_nanoseconds())
        .map_or(0, |nanos| i64::from(nanos / 1_000_000));

    Ok(i64::from(record.hour) * MS_PER_HOUR
        + i64::from(record.minute) * MS_PER_MINUTE
        + i64::from(record.second) * MS_PER_SECOND
        + fraction_ms)
}

fn offset_record_to_ms(record: UtcOffsetRecordOrZ) -> i64 {
    match record {
        UtcOffsetRecordOrZ::Z => 0,
        UtcOffsetRecordOrZ::Offset(offset) => {
            let magnitude = i64::from(offset.hour()) * MS_PER_HOUR
                + i64::from(offset.minute()) * MS_PER_MINUTE
                + i64::from(offset.second().unwrap_or(0)) * MS_PER_SECOND;
            magnitude * offset.sign() as i64
        }
    }
}

// ==== Formatting ====

/// A `Writeable` ISO 8601 calendar date: `YYYY-MM-DD`.
///
/// The year is written without padding, so it may be negative or have more
/// than four digits. Month and day are zero padded to two digits.
#[derive(Debug, Clone, Copy)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.0.write_to(sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.0.writeable_length_hint() + 6
    }
}

impl_display_with_writeable!(FormattableDate);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}
