use alloc::string::ToString;

use timezone_provider::epoch_nanoseconds::NS_MIN_INSTANT;

use super::Year;
use crate::{
    builtins::core::{FixedClock, Month, PlainDate, PlainMonthDay, ZoneId, ZoneOffset},
    error::ErrorKind,
    fields::{
        tests::{Fortnights, Quarters, YEAR_OF_DECADE},
        ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
    },
    format::{DateTimeFormatterBuilder, SignStyle},
    time::EpochNanoseconds,
};

#[test]
fn leap_years() {
    for (year, leap) in [(1904, true), (1900, false), (2000, true), (1999, false), (0, true), (-4, true), (-100, false)] {
        assert_eq!(Year::of(year).unwrap().is_leap(), leap, "{year}");
        assert_eq!(Year::is_leap_year(year), leap, "{year}");
    }
    assert_eq!(Year::of(1900).unwrap().length(), 365);
    assert_eq!(Year::of(2000).unwrap().length(), 366);
}

#[test]
fn bounds() {
    assert!(Year::of(i64::from(Year::MAX_VALUE)).is_ok());
    assert!(Year::of(i64::from(Year::MIN_VALUE)).is_ok());
    let err = Year::of(i64::from(Year::MAX_VALUE) + 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(
        err.message(),
        "Invalid value for Year (valid values -999999999 - 999999999): 1000000000"
    );

    let max = Year::of(i64::from(Year::MAX_VALUE)).unwrap();
    assert_eq!(max.plus_years(1).unwrap_err().kind(), ErrorKind::Range);
    let min = Year::of(i64::from(Year::MIN_VALUE)).unwrap();
    assert_eq!(min.minus_years(1).unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn year_arithmetic() {
    let year = Year::of(2007).unwrap();
    assert_eq!(year.plus_years(0).unwrap(), year);
    for n in [1, -1, 17, -2_000, 999_000_000] {
        assert_eq!(year.plus_years(n).unwrap().minus_years(n).unwrap(), year, "{n}");
    }
    assert_eq!(year.minus_years(7).unwrap().value(), 2000);

    // The most negative amount is subtracted in two steps.
    let zero = Year::of(0).unwrap();
    assert_eq!(zero.minus_years(i64::MIN).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(year.plus_years(i64::MAX).unwrap_err().kind(), ErrorKind::Arithmetic);
}

#[test]
fn unit_arithmetic() {
    let year = Year::of(2007).unwrap();
    assert_eq!(year.plus(1, ChronoUnit::Years.into()).unwrap().value(), 2008);
    assert_eq!(year.plus(2, ChronoUnit::Decades.into()).unwrap().value(), 2027);
    assert_eq!(year.minus(3, ChronoUnit::Centuries.into()).unwrap().value(), 1707);
    assert_eq!(year.plus(-2, ChronoUnit::Millennia.into()).unwrap().value(), 7);
    assert_eq!(year.minus(1, ChronoUnit::Eras.into()).unwrap().value(), -2006);
    assert_eq!(
        year.plus(1, ChronoUnit::Eras.into()).unwrap_err().kind(),
        ErrorKind::Range
    );
    assert_eq!(
        year.plus(i64::MAX, ChronoUnit::Decades.into()).unwrap_err().kind(),
        ErrorKind::Arithmetic
    );

    let err = year.plus(1, ChronoUnit::Months.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedTemporalType);
    assert_eq!(err.message(), "Unsupported unit: Months");
    assert!(year.is_supported_unit(ChronoUnit::Eras.into()));
    assert!(!year.is_supported_unit(ChronoUnit::Days.into()));
}

#[test]
fn era_fields() {
    let bce = Year::of(-5).unwrap();
    assert_eq!(bce.get(ChronoField::YearOfEra.into()).unwrap(), 6);
    assert_eq!(bce.get(ChronoField::Era.into()).unwrap(), 0);
    assert_eq!(
        bce.range(ChronoField::YearOfEra.into()).unwrap().maximum(),
        1_000_000_000
    );
    let ce = Year::of(2007).unwrap();
    assert_eq!(ce.get(ChronoField::Era.into()).unwrap(), 1);
    assert_eq!(
        ce.range(ChronoField::YearOfEra.into()).unwrap().maximum(),
        999_999_999
    );

    assert_eq!(bce.with(ChronoField::YearOfEra.into(), 10).unwrap().value(), -9);
    assert_eq!(ce.with(ChronoField::YearOfEra.into(), 10).unwrap().value(), 10);
    assert_eq!(ce.with(ChronoField::Era.into(), 0).unwrap().value(), -2006);
    assert_eq!(ce.with(ChronoField::Era.into(), 1).unwrap(), ce);
    assert_eq!(ce.with(ChronoField::Year.into(), 1).unwrap().value(), 1);
    assert_eq!(
        ce.with(ChronoField::Era.into(), 2).unwrap_err().kind(),
        ErrorKind::Range
    );

    let err = ce.get(ChronoField::MonthOfYear.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedTemporalType);
    assert!(!ce.is_supported(ChronoField::DayOfMonth.into()));
}

#[test]
fn custom_fields_and_units() {
    let year = Year::of(2007).unwrap();
    let field = Field::Custom(&YEAR_OF_DECADE);
    assert!(year.is_supported(field));
    assert_eq!(year.get(field).unwrap(), 7);
    assert_eq!(year.with(field, 3).unwrap().value(), 2003);
    assert_eq!(year.with(field, 10).unwrap_err().kind(), ErrorKind::Range);

    let quarters = Quarters::unit();
    assert!(year.is_supported_unit(quarters));
    let fortnights = Fortnights::unit();
    assert!(!year.is_supported_unit(fortnights));
    assert_eq!(
        year.plus(1, fortnights).unwrap_err().kind(),
        ErrorKind::UnsupportedTemporalType
    );
    // Whole years only, four quarters are a year.
    assert_eq!(year.plus(8, quarters).unwrap().value(), 2009);
    assert_eq!(year.minus(4, quarters).unwrap().value(), 2006);
    assert_eq!(year.until(&Year::of(2010).unwrap(), quarters).unwrap(), 12);
}

#[test]
fn until() {
    let start = Year::of(2007).unwrap();
    let end = Year::of(2138).unwrap();
    assert_eq!(start.until(&end, ChronoUnit::Years.into()).unwrap(), 131);
    assert_eq!(start.until(&end, ChronoUnit::Decades.into()).unwrap(), 13);
    assert_eq!(start.until(&end, ChronoUnit::Centuries.into()).unwrap(), 1);
    assert_eq!(end.until(&start, ChronoUnit::Centuries.into()).unwrap(), -1);
    assert_eq!(start.until(&end, ChronoUnit::Millennia.into()).unwrap(), 0);
    assert_eq!(
        Year::of(-1).unwrap().until(&end, ChronoUnit::Eras.into()).unwrap(),
        1
    );
    let date = PlainDate::of(2009, 6, 1).unwrap();
    assert_eq!(start.until(&date, ChronoUnit::Years.into()).unwrap(), 2);
    assert_eq!(
        start.until(&end, ChronoUnit::Days.into()).unwrap_err().kind(),
        ErrorKind::UnsupportedTemporalType
    );
}

#[test]
fn from_temporal() {
    let year = Year::of(2020).unwrap();
    assert_eq!(Year::from_temporal(&year).unwrap(), year);
    assert_eq!(year.query(Year::from_temporal).unwrap(), year);

    let date = PlainDate::of(1999, 12, 31).unwrap();
    assert_eq!(Year::from_temporal(&date).unwrap().value(), 1999);

    let err = Year::from_temporal(&ZoneOffset::UTC).unwrap_err();
    assert!(err.is_date_time_error());
    assert!(err
        .message()
        .starts_with("Unable to obtain Year from TemporalAccessor: ZoneOffset"));
    assert_eq!(err.cause().map(|e| e.kind()), Some(ErrorKind::UnsupportedTemporalType));
}

#[test]
fn parse_and_format() {
    assert_eq!(Year::parse("2007").unwrap(), Year::of(2007).unwrap());
    assert_eq!(Year::parse("0999").unwrap(), Year::of(999).unwrap());
    assert_eq!(Year::parse("-0005").unwrap().value(), -5);
    assert_eq!(Year::parse("+12345").unwrap().value(), 12_345);
    assert_eq!("2024".parse::<Year>().unwrap().value(), 2024);

    let err = Year::parse("999").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.error_index(), Some(0));
    assert_eq!(err.message(), "Text '999' could not be parsed at index 0");
    assert_eq!(Year::parse("12345").unwrap_err().error_index(), Some(0));
    assert_eq!(Year::parse("2007x").unwrap_err().error_index(), Some(4));

    let formatter = crate::format::DateTimeFormatter::ISO_YEAR;
    assert_eq!(Year::of(2007).unwrap().format(&formatter).unwrap(), "2007");
    assert_eq!(Year::of(999).unwrap().format(&formatter).unwrap(), "0999");
    assert_eq!(Year::of(-5).unwrap().format(&formatter).unwrap(), "-0005");
    assert_eq!(Year::of(12_345).unwrap().format(&formatter).unwrap(), "+12345");

    let two_digits = DateTimeFormatterBuilder::new()
        .append_value_with_style(ChronoField::Year.into(), 1, 2, SignStyle::Normal)
        .unwrap()
        .to_formatter();
    let err = Year::of(2007).unwrap().format(&two_digits).unwrap_err();
    assert_eq!(
        err.message(),
        "Field Year cannot be printed as the value 2007 exceeds the maximum print width of 2"
    );
    assert_eq!(Year::of(-5).unwrap().to_string(), "-5");
}

#[test]
fn combinators() {
    let year = Year::of(2023).unwrap();
    assert_eq!(year.at_day(365).unwrap(), PlainDate::of(2023, 12, 31).unwrap());
    assert!(year.at_day(366).is_err());
    assert_eq!(year.at_month(Month::February).unwrap().length_of_month(), 28);

    let leap_day = PlainMonthDay::of(2, 29).unwrap();
    assert!(!year.is_valid_month_day(&leap_day));
    assert_eq!(year.at_month_day(&leap_day).unwrap(), PlainDate::of(2023, 2, 28).unwrap());
    let leap_year = Year::of(2024).unwrap();
    assert!(leap_year.is_valid_month_day(&leap_day));
    assert_eq!(
        leap_year.at_month_day(&leap_day).unwrap(),
        PlainDate::of(2024, 2, 29).unwrap()
    );

    let date = PlainDate::of(2024, 2, 29).unwrap();
    assert_eq!(year.adjust_into(&date).unwrap(), PlainDate::of(2023, 2, 28).unwrap());
    assert_eq!(date.with_adjuster(&year).unwrap(), PlainDate::of(2023, 2, 28).unwrap());
}

#[test]
fn ordering() {
    let a = Year::of(1999).unwrap();
    let b = Year::of(2000).unwrap();
    assert!(a.is_before(&b));
    assert!(b.is_after(&a));
    assert!(!a.is_after(&a));
    assert!(a < b);
}

#[test]
fn now_with_clock() {
    // 2019-12-31T23:30:00Z
    let instant = EpochNanoseconds::from_seconds(1_577_835_000);
    let utc = FixedClock::new(instant, ZoneId::Offset(ZoneOffset::UTC));
    assert_eq!(Year::now_with_clock(&utc).unwrap().value(), 2019);

    let plus_one = ZoneId::Offset(ZoneOffset::of_hours(1).unwrap());
    let clock = FixedClock::new(instant, plus_one);
    assert_eq!(Year::now_with_clock(&clock).unwrap().value(), 2020);
}

#[test]
fn now_with_clock_outside_the_instant_range() {
    // Past the i64 range of epoch seconds, the low bits alone read as 2019.
    let seconds = (1i128 << 64) + 1_577_835_000;
    let instant = EpochNanoseconds(seconds * 1_000_000_000);
    let clock = FixedClock::new(instant, ZoneId::Offset(ZoneOffset::UTC));
    let err = Year::now_with_clock(&clock).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(PlainDate::now_with_clock(&clock).is_err());

    let before_min = FixedClock::new(
        EpochNanoseconds(NS_MIN_INSTANT - 1),
        ZoneId::Offset(ZoneOffset::UTC),
    );
    assert!(Year::now_with_clock(&before_min).is_err());
}

#[test]
fn precision() {
    let year = Year::of(2007).unwrap();
    assert_eq!(
        year.query(crate::fields::queries::precision).unwrap(),
        Some(ChronoUnit::Years.into())
    );
    assert_eq!(year.query(crate::fields::queries::zone).unwrap(), None);
    assert_eq!(year.query(crate::fields::queries::local_date).unwrap(), None);
}
