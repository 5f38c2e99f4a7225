//! This module implements the text forms of the value types.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::Sign;

mod zone;

pub(crate) use zone::{is_valid_region_id, parse_offset_id};

/// An ISO date, `yyyy-MM-dd`.
#[derive(Debug)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        year_length_hint(self.0) + 6
    }
}

/// An ISO year month, `yyyy-MM`.
#[derive(Debug)]
pub struct FormattableYearMonth(pub i32, pub u8);

impl Writeable for FormattableYearMonth {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        year_length_hint(self.0) + 3
    }
}

/// An ISO month day, `--MM-dd`.
#[derive(Debug)]
pub struct FormattableMonthDay(pub u8, pub u8);

impl Writeable for FormattableMonthDay {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str("--")?;
        write_padded_u8(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(7)
    }
}

/// A canonical offset id, `Z` or `±hh:mm[:ss]`.
#[derive(Debug)]
pub struct FormattableOffset {
    pub sign: Sign,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.sign == Sign::Zero {
            return sink.write_char('Z');
        }
        match self.sign {
            Sign::Negative => sink.write_char('-')?,
            _ => sink.write_char('+')?,
        }
        write_padded_u8(self.hours, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minutes, sink)?;
        if self.seconds != 0 {
            sink.write_char(':')?;
            write_padded_u8(self.seconds, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match (self.sign, self.seconds) {
            (Sign::Zero, _) => LengthHint::exact(1),
            (_, 0) => LengthHint::exact(6),
            _ => LengthHint::exact(9),
        }
    }
}

impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableYearMonth);
impl_display_with_writeable!(FormattableMonthDay);
impl_display_with_writeable!(FormattableOffset);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn year_length_hint(year: i32) -> LengthHint {
    if (0..=9999).contains(&year) {
        LengthHint::exact(4)
    } else {
        LengthHint::between(6, 11)
    }
}

// Years outside of 0..=9999 are signed and padded to at least four digits.
fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if !(0..=9999).contains(&year) {
        let sign = if year < 0 { '-' } else { '+' };
        sink.write_char(sign)?;
    }
    let abs = year.unsigned_abs();
    for divisor in [1000, 100, 10] {
        if abs < divisor {
            sink.write_char('0')?;
        }
    }
    abs.write_to(sink)
}
