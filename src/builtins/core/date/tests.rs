use alloc::string::ToString;
use core::str::FromStr;

use writeable::assert_writeable_eq;

use super::{CalendarDate, DateInput};
use crate::{
    host::HostClock,
    options::{LocaleFormatOptions, MonthStyle, NumericStyle, TextStyle},
    DateResult, ErrorKind, MAX_EPOCH_MILLISECONDS, MS_PER_DAY,
};

const JULY_17: i64 = 1_689_552_000_000;

fn date(s: &str) -> CalendarDate {
    CalendarDate::from_str(s).unwrap()
}

fn fields(date: CalendarDate) -> (i32, u8, u8) {
    (date.year(), date.month(), date.day())
}

#[test]
fn construct_from_string() {
    let d = date("2023-07-17");
    assert_eq!(d.value_of(), JULY_17);
    assert_eq!(fields(d), (2023, 6, 17));
    assert_eq!(d.iso_month(), 7);

    assert_eq!(CalendarDate::try_new("2023-07-17"), Ok(d));
    assert_eq!(CalendarDate::try_from("2023-07-17"), Ok(d));
    assert_eq!(CalendarDate::try_new(DateInput::Iso("2023-07-17")), Ok(d));
}

#[test]
fn construct_from_epoch_milliseconds() {
    let d = CalendarDate::try_new(JULY_17).unwrap();
    assert_eq!(d, date("2023-07-17"));
    assert_eq!(CalendarDate::try_from(JULY_17), Ok(d));
    assert_eq!(CalendarDate::try_from(JULY_17 as f64), Ok(d));
    assert_eq!(i64::from(d), JULY_17);

    // A time of day is discarded.
    let afternoon = CalendarDate::try_new(JULY_17 + 15 * 3_600_000 + 1).unwrap();
    assert_eq!(afternoon, d);
    assert_eq!(afternoon.value_of(), JULY_17);

    // Before the epoch, the containing UTC day is used.
    let before = CalendarDate::try_new(-1).unwrap();
    assert_eq!(before.value_of(), -MS_PER_DAY);
    assert_eq!(before.to_string(), "1969-12-31");

    // Floating point input is truncated toward zero.
    assert_eq!(CalendarDate::try_from(JULY_17 as f64 + 0.9).unwrap(), d);
    assert_eq!(CalendarDate::try_from(-0.5).unwrap().value_of(), 0);
}

#[test]
fn construct_from_date_time_strings() {
    assert_eq!(date("2023-07-17T10:30:00Z"), date("2023-07-17"));
    assert_eq!(date("2023-07-17T23:59:59.999"), date("2023-07-17"));
    // The offset moves the instant into the next UTC day.
    assert_eq!(date("2023-07-17T23:30:00-03:00"), date("2023-07-18"));
    assert_eq!(date("2023-07-17T01:00:00+02:00"), date("2023-07-16"));
    assert_eq!(date("2023-07"), date("2023-07-01"));
}

#[test]
fn invalid_inputs() {
    for s in ["2023-07-32", "2023-02-29", "2023-13-01", "hello", "", "2023-07-17[u-ca=iso8601]"] {
        let err = CalendarDate::try_new(s).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate, "{s}");
        assert!(err.message().contains(s), "{s}: {err}");
    }

    for ms in [MAX_EPOCH_MILLISECONDS + 1, -MAX_EPOCH_MILLISECONDS - 1, i64::MIN, i64::MAX] {
        let err = CalendarDate::try_new(ms).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
    }

    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 8.64e15 + 1.0, 1e300] {
        let err = CalendarDate::try_from(value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
    }

    let err = CalendarDate::try_new("2023-07-32").unwrap_err();
    assert_eq!(err.message(), "invalid date `2023-07-32`");
}

#[test]
fn representable_limits() {
    let max = CalendarDate::try_new(MAX_EPOCH_MILLISECONDS).unwrap();
    assert_eq!(fields(max), (275_760, 8, 13));
    assert_eq!(max.to_string(), "275760-09-13");
    assert_eq!(date("+275760-09-13"), max);

    let min = CalendarDate::try_new(-MAX_EPOCH_MILLISECONDS).unwrap();
    assert_eq!(fields(min), (-271_821, 3, 20));
    assert_eq!(min.to_string(), "-271821-04-20");
    assert_eq!(date("-271821-04-20"), min);

    // Both ends are reachable, but one more day is not.
    assert_eq!(max.with_day(14).unwrap_err().kind(), ErrorKind::InvalidDate);
    assert_eq!(min.with_day(19).unwrap_err().kind(), ErrorKind::InvalidDate);
    assert_eq!(max.with_year(i32::MAX).unwrap_err().kind(), ErrorKind::InvalidDate);
    assert_eq!(min.with_month(i32::MIN).unwrap_err().kind(), ErrorKind::InvalidDate);
}

#[test]
fn accessors() {
    assert_eq!(date("2023-01-17").month(), 0);
    assert_eq!(date("2023-12-17").month(), 11);

    assert_eq!(date("2023-07-16").weekday(), 0);
    assert_eq!(date("2023-07-15").weekday(), 6);
    assert_eq!(date("2023-07-17").weekday(), 1);
    assert_eq!(date("1970-01-01").weekday(), 4);
    assert_eq!(date("1969-12-28").weekday(), 0);

    assert_eq!(date("2024-02-10").days_in_month(), 29);
    assert_eq!(date("2023-02-10").days_in_month(), 28);
    assert_eq!(date("2023-04-10").days_in_month(), 30);
    assert!(date("2024-07-17").in_leap_year());
    assert!(!date("1900-07-17").in_leap_year());
}

#[test]
fn with_year() {
    let d = date("2023-07-17");
    let next = d.with_year(2024).unwrap();
    assert_eq!(fields(next), (2024, 6, 17));
    // The original value is untouched.
    assert_eq!(d.year(), 2023);

    // February 29 carries into March in a common year.
    let leap = date("2024-02-29");
    assert_eq!(leap.with_year(2023).unwrap().to_string(), "2023-03-01");
    assert_eq!(leap.with_year(2028).unwrap().to_string(), "2028-02-29");
    assert_eq!(d.with_year(-1).unwrap().to_string(), "-1-07-17");
}

#[test]
fn with_month_carry() {
    let d = date("2023-07-17");
    assert_eq!(fields(d.with_month(12).unwrap()), (2024, 0, 17));
    assert_eq!(fields(d.with_month(13).unwrap()), (2024, 1, 17));
    assert_eq!(fields(d.with_month(-1).unwrap()), (2022, 11, 17));
    assert_eq!(fields(d.with_month(0).unwrap()), (2023, 0, 17));
    assert_eq!(d.month(), 6);

    // Day overflow of the target month carries as well.
    let end_of_month = date("2023-01-31");
    assert_eq!(end_of_month.with_month(1).unwrap().to_string(), "2023-03-03");
    assert_eq!(end_of_month.with_month(3).unwrap().to_string(), "2023-05-01");
}

#[test]
fn with_day_carry() {
    assert_eq!(fields(date("2023-03-01").with_day(32).unwrap()), (2023, 3, 1));
    assert_eq!(fields(date("2023-04-01").with_day(34).unwrap()), (2023, 4, 4));
    assert_eq!(fields(date("2023-12-01").with_day(32).unwrap()), (2024, 0, 1));
    assert_eq!(fields(date("2023-03-15").with_day(0).unwrap()), (2023, 1, 28));
    assert_eq!(fields(date("2024-03-15").with_day(0).unwrap()), (2024, 1, 29));
    assert_eq!(fields(date("2023-01-15").with_day(-1).unwrap()), (2022, 11, 30));
    assert_eq!(fields(date("2023-01-15").with_day(365).unwrap()), (2023, 11, 31));
}

#[test]
fn serialization() {
    let d = date("2023-07-17");
    assert_eq!(d.to_iso_string(), "2023-07-17");
    assert_eq!(d.to_string(), d.to_iso_string());
    assert_eq!(d.to_json(), d.to_iso_string());
    assert_writeable_eq!(d, "2023-07-17");
    assert_writeable_eq!(date("0999-01-05"), "999-01-05");
    assert_writeable_eq!(date("+012345-11-30"), "12345-11-30");
    assert_writeable_eq!(date("-000001-01-01"), "-1-01-01");
}

#[test]
fn iso_string_round_trip() {
    for s in [
        "1000-01-01",
        "1582-10-15",
        "1969-12-31",
        "1970-01-01",
        "2000-02-29",
        "2023-07-17",
        "2023-12-31",
        "9999-12-31",
    ] {
        assert_eq!(date(s).to_iso_string(), s);
    }
}

#[test]
fn ordering_follows_the_instant() {
    let earlier = date("2023-07-16");
    let later = date("2023-07-17");
    assert!(earlier < later);
    assert_eq!(later.value_of() - earlier.value_of(), MS_PER_DAY);
    assert_eq!(earlier.with_day(17).unwrap(), later);
}

#[test]
fn locale_string() {
    let d = date("2023-07-17");
    let options = LocaleFormatOptions::new()
        .with_weekday(TextStyle::Long)
        .with_year(NumericStyle::Numeric)
        .with_month(MonthStyle::Long)
        .with_day(NumericStyle::Numeric);
    let formatted = d.to_locale_string(&["en-US"], options).unwrap();
    assert!(formatted.contains("Monday"), "{formatted}");
    assert!(formatted.contains("July"), "{formatted}");

    let err = d
        .to_locale_string(&["$$"], LocaleFormatOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

struct FixedClock(i64);

impl HostClock for FixedClock {
    fn get_host_epoch_milliseconds(&self) -> DateResult<i64> {
        Ok(self.0)
    }
}

#[test]
fn host_clock() {
    let d = CalendarDate::now_with_clock(&FixedClock(JULY_17 + 3_600_000)).unwrap();
    assert_eq!(d, date("2023-07-17"));
    assert_eq!(CalendarDate::now_with_clock(&()).unwrap().value_of(), 0);
    assert!(CalendarDate::now_with_clock(&FixedClock(i64::MAX)).is_err());
}

#[cfg(feature = "sys")]
#[test]
fn today_utc() {
    let today = CalendarDate::today_utc().unwrap();
    assert!(today.year() >= 2024);
    assert_eq!(today.value_of() % MS_PER_DAY, 0);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let d = date("2023-07-17");
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"2023-07-17\"");
    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);

    assert!(serde_json::from_str::<CalendarDate>("\"2023-07-32\"").is_err());
    assert!(serde_json::from_str::<CalendarDate>("1689552000000").is_err());
}

quickcheck::quickcheck! {
    fn prop_canonical_instant(d: CalendarDate) -> bool {
        d.value_of() % MS_PER_DAY == 0 && d.value_of().abs() <= MAX_EPOCH_MILLISECONDS
    }

    fn prop_builder_fixed_point(d: CalendarDate) -> bool {
        // Rebuilding a date from its own fields yields the same date.
        d.with_day(i32::from(d.day())) == Ok(d)
            && d.with_month(i32::from(d.month())) == Ok(d)
            && d.with_year(d.year()) == Ok(d)
    }

    fn prop_builder_output_is_stable(d: CalendarDate, month: i16, day: i16) -> quickcheck::TestResult {
        let Ok(built) = d
            .with_month(i32::from(month))
            .and_then(|d| d.with_day(i32::from(day)))
        else {
            return quickcheck::TestResult::discard();
        };
        let (year, month, day) = fields(built);
        let rebuilt = built
            .with_year(year)
            .and_then(|d| d.with_month(i32::from(month)))
            .and_then(|d| d.with_day(i32::from(day)));
        quickcheck::TestResult::from_bool(rebuilt.map(fields) == Ok((year, month, day)))
    }

    fn prop_iso_string_round_trip(d: CalendarDate) -> bool {
        CalendarDate::from_str(&d.to_iso_string()).is_ok_and(|parsed| parsed == d)
            || !(1000..=9999).contains(&d.year())
    }
}
