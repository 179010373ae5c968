//! Locale aware date formatting backed by `icu_datetime`.

use crate::{
    iso::IsoDate,
    options::{LocaleFormatOptions, MonthStyle, NumericStyle, TextStyle},
    DateError, DateResult,
};
use alloc::{
    format,
    string::{String, ToString},
};
use icu_datetime::{
    fieldsets::builder::{DateFields, FieldSetBuilder},
    options::{Alignment, Length, YearStyle},
    DateTimeFormatter,
};
use icu_locale::Locale;

/// Formats `iso` for the first of `locales`, or for the root locale when the
/// list is empty.
///
/// Every tag is validated, so a malformed tag anywhere in the list is an
/// error even if an earlier tag is usable.
pub(crate) fn format_date(
    iso: IsoDate,
    locales: &[&str],
    options: LocaleFormatOptions,
) -> DateResult<String> {
    let locale = resolve_locale(locales)?;
    let options = options.with_defaults();

    let builder = field_set_builder(options);
    let field_set = builder
        .build_date()
        .map_err(|_| DateError::range().with_message("Unsupported combination of date fields."))?;

    let formatter = DateTimeFormatter::try_new(locale.into(), field_set).map_err(|_| {
        DateError::range().with_message("No formatting data available for the locale.")
    })?;

    let date = icu_calendar::Date::try_new_iso(iso.year, iso.month, iso.day)
        .map_err(|_| DateError::range().with_message("Date cannot be formatted."))?;

    Ok(formatter.format(&date).to_string())
}

fn resolve_locale(locales: &[&str]) -> DateResult<Locale> {
    let mut parsed = locales.iter().map(|tag| {
        tag.parse::<Locale>().map_err(|_| {
            DateError::range().with_message(format!("Incorrect locale information provided: `{tag}`"))
        })
    });

    let Some(first) = parsed.next().transpose()? else {
        #[cfg(feature = "log")]
        log::debug!("no locale requested, formatting with the root locale");
        return Ok(Locale::default());
    };

    // The remaining tags are fallbacks; they still have to be well formed.
    for locale in parsed {
        locale?;
    }
    Ok(first)
}

fn field_set_builder(options: LocaleFormatOptions) -> FieldSetBuilder {
    let mut builder = FieldSetBuilder::default();

    let fields = date_fields(options);
    builder.date_fields = Some(fields);
    builder.length = Some(length(options));

    if fields != DateFields::E && wants_column_alignment(options) {
        builder.alignment = Some(Alignment::Column);
    }

    if matches!(fields, DateFields::YMD | DateFields::YMDE | DateFields::YM | DateFields::Y) {
        builder.year_style = Some(match options.year {
            Some(NumericStyle::TwoDigit) => YearStyle::Auto,
            Some(NumericStyle::Numeric) | None => YearStyle::Full,
        });
    }

    builder
}

fn date_fields(options: LocaleFormatOptions) -> DateFields {
    let year = options.year.is_some();
    let month = options.month.is_some();
    let day = options.day.is_some();

    match (options.weekday.is_some(), year, month, day) {
        (false, true, _, true) => DateFields::YMD,
        (false, true, true, false) => DateFields::YM,
        (false, true, false, false) => DateFields::Y,
        (false, false, true, true) => DateFields::MD,
        (false, false, true, false) => DateFields::M,
        (false, false, false, _) => DateFields::D,
        // A weekday can only be shown alongside a day of the month.
        (true, true, _, _) => DateFields::YMDE,
        (true, false, true, _) => DateFields::MDE,
        (true, false, false, true) => DateFields::DE,
        (true, false, false, false) => DateFields::E,
    }
}

fn length(options: LocaleFormatOptions) -> Length {
    match options.month {
        Some(MonthStyle::Long) => return Length::Long,
        Some(MonthStyle::Short | MonthStyle::Narrow) => return Length::Medium,
        Some(MonthStyle::Numeric | MonthStyle::TwoDigit) => return Length::Short,
        None => {}
    }
    match options.weekday {
        Some(TextStyle::Long) => Length::Long,
        Some(TextStyle::Short) => Length::Medium,
        Some(TextStyle::Narrow) | None => Length::Short,
    }
}

fn wants_column_alignment(options: LocaleFormatOptions) -> bool {
    options.month == Some(MonthStyle::TwoDigit) || options.day == Some(NumericStyle::TwoDigit)
}
