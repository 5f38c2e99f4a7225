use alloc::{string::String, string::ToString};

use super::{DateTimeFormatter, DateTimeFormatterBuilder, SignStyle};
use crate::{
    builtins::core::{PlainDate, Year},
    error::ErrorKind,
    fields::{ChronoField, Field, TemporalAccessor},
    TemporalResult,
};

const YEAR: Field = Field::Chrono(ChronoField::Year);
const MONTH: Field = Field::Chrono(ChronoField::MonthOfYear);
const DAY: Field = Field::Chrono(ChronoField::DayOfMonth);

fn iso_date() -> DateTimeFormatter {
    DateTimeFormatterBuilder::new()
        .append_value_with_style(YEAR, 4, 10, SignStyle::ExceedsPad)
        .unwrap()
        .append_literal('-')
        .append_value_fixed(MONTH, 2)
        .unwrap()
        .append_literal('-')
        .append_value_fixed(DAY, 2)
        .unwrap()
        .to_formatter()
}

fn to_date(temporal: &dyn TemporalAccessor) -> TemporalResult<PlainDate> {
    PlainDate::of(
        temporal.get_long(YEAR)?,
        temporal.get(MONTH)? as u8,
        temporal.get(DAY)? as u8,
    )
}

#[test]
fn rule_display() {
    assert_eq!(
        DateTimeFormatter::ISO_YEAR.to_string(),
        "Value(Year,4,10,EXCEEDS_PAD)"
    );
    let formatter = DateTimeFormatterBuilder::new()
        .append_value(YEAR)
        .append_literal('\'')
        .append_value_fixed(MONTH, 2)
        .unwrap()
        .parse_lenient()
        .append_literal_str("T'x")
        .append_literal_str("")
        .to_formatter();
    assert_eq!(
        formatter.to_string(),
        "Value(Year)''Value(MonthOfYear,2)ParseStrict(false)'T''x'"
    );
    assert_eq!(formatter.printer_parsers().len(), 5);
}

#[test]
fn builder_widths() {
    let err = DateTimeFormatterBuilder::new()
        .append_value_fixed(YEAR, 0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalArgument);
    assert_eq!(
        err.message(),
        "The width must be from 1 to 19 inclusive but was 0"
    );
    let err = DateTimeFormatterBuilder::new()
        .append_value_with_style(YEAR, 1, 20, SignStyle::Normal)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "The maximum width must be from 1 to 19 inclusive but was 20"
    );
    let err = DateTimeFormatterBuilder::new()
        .append_value_with_style(YEAR, 5, 3, SignStyle::Normal)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "The maximum width must exceed or equal the minimum width but 3 < 5"
    );
    assert!(!err.is_date_time_error());
}

#[test]
fn print_dates() {
    let formatter = iso_date();
    let date = PlainDate::of(2007, 12, 3).unwrap();
    assert_eq!(formatter.format(&date).unwrap(), "2007-12-03");
    assert_eq!(
        formatter.format(&PlainDate::of(-12_345, 1, 1).unwrap()).unwrap(),
        "-12345-01-01"
    );

    let mut buf = String::from("date: ");
    formatter.format_to(&date, &mut buf).unwrap();
    assert_eq!(buf, "date: 2007-12-03");

    let err = formatter.format(&Year::of(2007).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedTemporalType);
}

#[test]
fn print_sign_styles() {
    let year = |style| {
        DateTimeFormatterBuilder::new()
            .append_value_with_style(YEAR, 2, 19, style)
            .unwrap()
            .to_formatter()
    };
    let positive = Year::of(5).unwrap();
    let negative = Year::of(-5).unwrap();
    assert_eq!(year(SignStyle::Normal).format(&positive).unwrap(), "05");
    assert_eq!(year(SignStyle::Normal).format(&negative).unwrap(), "-05");
    assert_eq!(year(SignStyle::Always).format(&positive).unwrap(), "+05");
    assert_eq!(year(SignStyle::Never).format(&negative).unwrap(), "05");
    assert_eq!(year(SignStyle::ExceedsPad).format(&positive).unwrap(), "05");
    assert_eq!(
        year(SignStyle::ExceedsPad).format(&Year::of(123).unwrap()).unwrap(),
        "+123"
    );

    let err = year(SignStyle::NotNegative).format(&negative).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateTime);
    assert_eq!(
        err.message(),
        "Field Year cannot be printed as the value -5 cannot be negative according to the SignStyle"
    );
}

#[test]
fn parse_dates() {
    let formatter = iso_date();
    assert_eq!(
        formatter.parse("2007-12-03", to_date).unwrap(),
        PlainDate::of(2007, 12, 3).unwrap()
    );
    assert_eq!(
        formatter.parse("+12345-06-01", to_date).unwrap(),
        PlainDate::of(12_345, 6, 1).unwrap()
    );

    let err = formatter.parse("2007-1-03", to_date).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.error_index(), Some(5));
    assert_eq!(err.parsed_text(), Some("2007-1-03"));

    let err = formatter.parse("2007/12/03", to_date).unwrap_err();
    assert_eq!(err.error_index(), Some(4));
}

#[test]
fn resolution_failures_are_parse_errors() {
    let formatter = iso_date();
    let err = formatter.parse("2007-13-03", to_date).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.error_index(), Some(0));
    assert_eq!(
        err.message(),
        "Text '2007-13-03' could not be parsed: Invalid value for MonthOfYear (valid values 1 - 12): 13"
    );
    assert_eq!(err.cause().map(|cause| cause.kind()), Some(ErrorKind::Range));

    let err = formatter.parse("2007-02-30", to_date).unwrap_err();
    assert_eq!(err.error_index(), Some(0));
    assert_eq!(err.cause().map(|cause| cause.kind()), Some(ErrorKind::DateTime));

    let year = formatter.parse("2007-02-03", Year::from_temporal).unwrap();
    assert_eq!(year.value(), 2007);
    let month_only = DateTimeFormatterBuilder::new()
        .append_value_fixed(MONTH, 2)
        .unwrap()
        .to_formatter();
    let err = month_only.parse("02", Year::from_temporal).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err
        .message()
        .starts_with("Text '02' could not be parsed: Unable to obtain Year from TemporalAccessor"));
}

#[test]
fn strict_and_lenient_numbers() {
    let strict = DateTimeFormatterBuilder::new()
        .append_value_with_style(YEAR, 4, 10, SignStyle::Normal)
        .unwrap()
        .to_formatter();
    assert_eq!(strict.parse("+2020", Year::from_temporal).unwrap_err().error_index(), Some(0));
    assert_eq!(strict.parse("20", Year::from_temporal).unwrap_err().error_index(), Some(0));
    assert_eq!(strict.parse("-0000", Year::from_temporal).unwrap_err().error_index(), Some(0));

    let lenient = DateTimeFormatterBuilder::new()
        .parse_lenient()
        .append_value_with_style(YEAR, 4, 10, SignStyle::Normal)
        .unwrap()
        .to_formatter();
    assert_eq!(lenient.parse("+2020", Year::from_temporal).unwrap().value(), 2020);
    assert_eq!(lenient.parse("20", Year::from_temporal).unwrap().value(), 20);
    assert_eq!(lenient.parse("-0", Year::from_temporal).unwrap().value(), 0);

    let exceeds_pad = DateTimeFormatter::ISO_YEAR;
    assert_eq!(exceeds_pad.parse("+0999", Year::from_temporal).unwrap_err().error_index(), Some(0));
    assert_eq!(exceeds_pad.parse("+10000", Year::from_temporal).unwrap().value(), 10_000);
}

#[test]
fn number_overflow() {
    let formatter = DateTimeFormatterBuilder::new().append_value(YEAR).to_formatter();
    let err = formatter.parse_unresolved("99999999999999999999").unwrap_err();
    assert_eq!(err.error_index(), Some(0));
    let parsed = formatter.parse_unresolved("999999999999").unwrap();
    assert_eq!(parsed.value(YEAR), Some(999_999_999_999));
    let err = formatter.parse("999999999999", Year::from_temporal).unwrap_err();
    assert_eq!(err.cause().map(|cause| cause.kind()), Some(ErrorKind::Range));
}

#[test]
fn literals() {
    let formatter = DateTimeFormatterBuilder::new()
        .append_value(YEAR)
        .append_literal_str(" AD")
        .to_formatter();
    assert_eq!(formatter.format(&Year::of(2020).unwrap()).unwrap(), "2020 AD");
    assert_eq!(formatter.parse("2020 ad", Year::from_temporal).unwrap_err().error_index(), Some(4));

    let lenient = DateTimeFormatterBuilder::new()
        .append_value(YEAR)
        .parse_lenient()
        .append_literal_str(" AD")
        .append_literal('!')
        .parse_strict()
        .to_formatter();
    assert_eq!(lenient.parse("2020 ad!", Year::from_temporal).unwrap().value(), 2020);
    let err = lenient.parse("2020 ad?", Year::from_temporal).unwrap_err();
    assert_eq!(err.error_index(), Some(7));
    assert_eq!(err.message(), "Text '2020 ad?' could not be parsed at index 7");
}

#[test]
fn unparsed_text() {
    let err = DateTimeFormatter::ISO_YEAR
        .parse_unresolved("2020-01")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.error_index(), Some(4));
    assert_eq!(
        err.message(),
        "Text '2020-01' could not be parsed, unparsed text found at index 4"
    );
}

#[test]
fn long_texts_are_abbreviated() {
    let text = "x".repeat(70);
    let err = DateTimeFormatter::ISO_YEAR.parse_unresolved(&text).unwrap_err();
    let expected = alloc::format!("Text '{}...' could not be parsed at index 0", "x".repeat(64));
    assert_eq!(err.message(), expected);
    assert_eq!(err.parsed_text(), Some(text.as_str()));
}

#[test]
fn duplicate_fields() {
    let formatter = DateTimeFormatterBuilder::new()
        .append_value(YEAR)
        .append_literal('/')
        .append_value(YEAR)
        .to_formatter();
    assert_eq!(formatter.parse("2020/2020", Year::from_temporal).unwrap().value(), 2020);
    let err = formatter.parse("2020/2021", Year::from_temporal).unwrap_err();
    assert_eq!(err.error_index(), Some(5));
}

#[test]
fn eras_resolve_into_years() {
    let formatter = DateTimeFormatterBuilder::new()
        .append_value(ChronoField::YearOfEra.into())
        .append_literal(' ')
        .append_value(ChronoField::Era.into())
        .to_formatter();
    assert_eq!(formatter.parse("5 0", Year::from_temporal).unwrap().value(), -4);
    assert_eq!(formatter.parse("5 1", Year::from_temporal).unwrap().value(), 5);

    let has_era = formatter.parse("5 0", |temporal: &dyn TemporalAccessor| -> TemporalResult<bool> {
        Ok(temporal.is_supported(ChronoField::Era.into()))
    });
    assert!(!has_era.unwrap());

    let with_year = DateTimeFormatterBuilder::new()
        .append_value(YEAR)
        .append_literal(' ')
        .append_value(ChronoField::YearOfEra.into())
        .append_literal(' ')
        .append_value(ChronoField::Era.into())
        .to_formatter();
    assert_eq!(with_year.parse("2020 2020 1", Year::from_temporal).unwrap().value(), 2020);
    let err = with_year.parse("2020 2019 1", Year::from_temporal).unwrap_err();
    assert_eq!(
        err.message(),
        "Text '2020 2019 1' could not be parsed: Conflict found: Year 2020 differs from Year 2019 while resolving YearOfEra"
    );

    let year_and_era = DateTimeFormatterBuilder::new()
        .append_value(YEAR)
        .append_literal(' ')
        .append_value(ChronoField::Era.into())
        .to_formatter();
    assert!(year_and_era.parse("2020 0", Year::from_temporal).is_err());
    assert_eq!(year_and_era.parse("2020 1", Year::from_temporal).unwrap().value(), 2020);
}

#[test]
fn unresolved_fields() {
    let parsed = iso_date().parse_unresolved("2020-07-04").unwrap();
    assert_eq!(parsed.value(YEAR), Some(2020));
    assert_eq!(parsed.value(MONTH), Some(7));
    assert_eq!(parsed.fields().len(), 3);
    assert!(parsed.is_supported(DAY));
    assert!(!parsed.is_supported(ChronoField::DayOfWeek.into()));
    assert_eq!(
        parsed.get(ChronoField::DayOfWeek.into()).unwrap_err().kind(),
        ErrorKind::UnsupportedTemporalType
    );
}
