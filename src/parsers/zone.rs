use alloc::format;
use core::{iter::Peekable, str::Chars};

use crate::{TemporalError, TemporalResult};

/// Parses an offset id into its hours, minutes and seconds, all carrying the sign.
///
/// The accepted forms are `±h`, `±hh`, `±hh:mm`, `±hhmm`, `±hh:mm:ss` and `±hhmmss`.
pub(crate) fn parse_offset_id(source: &str) -> TemporalResult<(i32, i32, i32)> {
    if !source.is_ascii() {
        return Err(invalid_offset(source));
    }
    let mut cursor = source.chars().peekable();
    let sign = match cursor.next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Err(invalid_offset(source)),
    };

    let (hours, minutes, seconds) = match source.len() {
        2 => (parse_digit(&mut cursor, source)?, 0, 0),
        3 => (parse_digit_pair(&mut cursor, source)?, 0, 0),
        5 => (
            parse_digit_pair(&mut cursor, source)?,
            parse_digit_pair(&mut cursor, source)?,
            0,
        ),
        6 => (
            parse_digit_pair(&mut cursor, source)?,
            parse_separated_pair(&mut cursor, source)?,
            0,
        ),
        7 => (
            parse_digit_pair(&mut cursor, source)?,
            parse_digit_pair(&mut cursor, source)?,
            parse_digit_pair(&mut cursor, source)?,
        ),
        9 => (
            parse_digit_pair(&mut cursor, source)?,
            parse_separated_pair(&mut cursor, source)?,
            parse_separated_pair(&mut cursor, source)?,
        ),
        _ => return Err(invalid_offset(source)),
    };

    if cursor.peek().is_some() {
        return Err(invalid_offset(source));
    }

    Ok((hours * sign, minutes * sign, seconds * sign))
}

/// Returns whether `source` matches `[A-Za-z][A-Za-z0-9~/._+-]+`.
pub(crate) fn is_valid_region_id(source: &str) -> bool {
    let mut chars = source.chars();
    if !chars.next().is_some_and(|ch| ch.is_ascii_alphabetic()) {
        return false;
    }
    let mut rest = chars.peekable();
    rest.peek().is_some() && rest.all(is_region_char)
}

fn is_region_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '~' | '/' | '.' | '_' | '+' | '-')
}

fn parse_separated_pair(chars: &mut Peekable<Chars<'_>>, source: &str) -> TemporalResult<i32> {
    if chars.next() != Some(':') {
        return Err(invalid_offset(source));
    }
    parse_digit_pair(chars, source)
}

fn parse_digit_pair(chars: &mut Peekable<Chars<'_>>, source: &str) -> TemporalResult<i32> {
    let tens = parse_digit(chars, source)?;
    let ones = parse_digit(chars, source)?;
    Ok(tens * 10 + ones)
}

fn parse_digit(chars: &mut Peekable<Chars<'_>>, source: &str) -> TemporalResult<i32> {
    chars
        .next()
        .and_then(|ch| ch.to_digit(10))
        .map(|digit| digit as i32)
        .ok_or_else(|| invalid_offset(source))
}

fn invalid_offset(source: &str) -> TemporalError {
    TemporalError::format().with_message(format!(
        "Invalid ID for ZoneOffset, invalid format: {source}"
    ))
}
