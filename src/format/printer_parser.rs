//! The rules a formatter is made of.

use alloc::{borrow::Cow, format, string::String};
use core::fmt::{self, Write};

use crate::{
    fields::{Field, TemporalAccessor},
    format::parsed::ParseContext,
    TemporalError, TemporalResult,
};

/// The maximum number of digits of a numeric rule.
pub const MAX_WIDTH: u8 = 19;

/// The smallest value with more than `n` digits.
const EXCEED_POINTS: [u64; 20] = {
    let mut points = [0u64; 20];
    let mut n = 1;
    let mut value = 1u64;
    while n < 20 {
        value *= 10;
        points[n] = value;
        n += 1;
    }
    points
};

/// When a numeric rule prints and accepts a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignStyle {
    /// Negative values only.
    Normal,
    /// Always, positive values included.
    Always,
    /// Never, the absolute value is printed.
    Never,
    /// Negative values are rejected.
    NotNegative,
    /// Negative values, and positive values with more digits than the
    /// minimum width.
    ExceedsPad,
}

impl SignStyle {
    /// Returns whether a sign may be parsed.
    pub(crate) fn accepts_sign(self, positive: bool, strict: bool, fixed_width: bool) -> bool {
        match self {
            Self::Normal => !positive || !strict,
            Self::Always | Self::ExceedsPad => true,
            Self::Never | Self::NotNegative => !strict && !fixed_width,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Always => "ALWAYS",
            Self::Never => "NEVER",
            Self::NotNegative => "NOT_NEGATIVE",
            Self::ExceedsPad => "EXCEEDS_PAD",
        }
    }
}

impl fmt::Display for SignStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule that prints a field as digits and parses it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberPrinterParser {
    pub(crate) field: Field,
    pub(crate) min_width: u8,
    pub(crate) max_width: u8,
    pub(crate) sign_style: SignStyle,
}

impl NumberPrinterParser {
    pub(crate) const fn new(field: Field, min_width: u8, max_width: u8, sign_style: SignStyle) -> Self {
        Self {
            field,
            min_width,
            max_width,
            sign_style,
        }
    }

    fn is_fixed_width(&self) -> bool {
        self.min_width == self.max_width
    }

    fn print(&self, temporal: &dyn TemporalAccessor, buf: &mut String) -> TemporalResult<()> {
        let value = temporal.get_long(self.field)?;
        let digits = value.unsigned_abs();
        let digit_count = digits.checked_ilog10().map_or(1, |log| log + 1);
        if digit_count > u32::from(self.max_width) {
            return Err(TemporalError::general(format!(
                "Field {} cannot be printed as the value {value} exceeds the maximum print width of {}",
                self.field, self.max_width
            )));
        }

        if value >= 0 {
            let exceeds_pad = self.min_width < MAX_WIDTH
                && digits >= EXCEED_POINTS[usize::from(self.min_width)];
            match self.sign_style {
                SignStyle::ExceedsPad if exceeds_pad => buf.push('+'),
                SignStyle::Always => buf.push('+'),
                _ => {}
            }
        } else {
            match self.sign_style {
                SignStyle::Normal | SignStyle::ExceedsPad | SignStyle::Always => buf.push('-'),
                SignStyle::NotNegative => {
                    return Err(TemporalError::general(format!(
                        "Field {} cannot be printed as the value {value} cannot be negative according to the SignStyle",
                        self.field
                    )));
                }
                SignStyle::Never => {}
            }
        }

        for _ in digit_count..u32::from(self.min_width) {
            buf.push('0');
        }
        write!(buf, "{digits}").map_err(|_| TemporalError::assert())
    }

    /// Parses digits at `position`, returning the new position or the
    /// error position.
    fn parse(&self, context: &mut ParseContext, text: &str, position: usize) -> Result<usize, usize> {
        let bytes = text.as_bytes();
        let Some(&sign) = bytes.get(position) else {
            return Err(position);
        };
        let strict = context.is_strict();
        let fixed_width = self.is_fixed_width();
        let mut negative = false;
        let mut positive = false;
        let mut start = position;
        match sign {
            b'+' => {
                if !self.sign_style.accepts_sign(true, strict, fixed_width) {
                    return Err(position);
                }
                positive = true;
                start += 1;
            }
            b'-' => {
                if !self.sign_style.accepts_sign(false, strict, fixed_width) {
                    return Err(position);
                }
                negative = true;
                start += 1;
            }
            _ if self.sign_style == SignStyle::Always && strict => return Err(position),
            _ => {}
        }

        let (min_width, max_width) = if strict || fixed_width {
            (self.min_width, self.max_width)
        } else {
            (1, MAX_WIDTH)
        };
        let max_end = bytes.len().min(start + usize::from(max_width));
        let mut end = start;
        let mut total: i64 = 0;
        while end < max_end {
            let byte = bytes[end];
            if !byte.is_ascii_digit() {
                break;
            }
            total = total
                .checked_mul(10)
                .and_then(|total| total.checked_add(i64::from(byte - b'0')))
                .ok_or(start)?;
            end += 1;
        }
        if end - start < usize::from(min_width) {
            return Err(start);
        }

        if negative {
            if total == 0 && strict {
                // Minus zero is not accepted.
                return Err(position);
            }
            total = -total;
        } else if self.sign_style == SignStyle::ExceedsPad && strict {
            let parsed_len = end - start;
            if positive && parsed_len <= usize::from(self.min_width) {
                // A '+' is only parsed when the minimum width is exceeded.
                return Err(position);
            }
            if !positive && parsed_len > usize::from(self.min_width) {
                // A '+' must be parsed when the minimum width is exceeded.
                return Err(position);
            }
        }
        context.set_parsed_field(self.field, total, position, end)
    }
}

impl fmt::Display for NumberPrinterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min_width == 1 && self.max_width == MAX_WIDTH && self.sign_style == SignStyle::Normal {
            write!(f, "Value({})", self.field)
        } else if self.is_fixed_width() && self.sign_style == SignStyle::NotNegative {
            write!(f, "Value({},{})", self.field, self.min_width)
        } else {
            write!(
                f,
                "Value({},{},{},{})",
                self.field, self.min_width, self.max_width, self.sign_style
            )
        }
    }
}

/// One rule of a formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterParser {
    Number(NumberPrinterParser),
    CharLiteral(char),
    StringLiteral(Cow<'static, str>),
    /// Switches parsing between strict and lenient, prints nothing.
    Strict(bool),
}

impl PrinterParser {
    pub(crate) fn print(&self, temporal: &dyn TemporalAccessor, buf: &mut String) -> TemporalResult<()> {
        match self {
            Self::Number(number) => number.print(temporal, buf),
            Self::CharLiteral(literal) => {
                buf.push(*literal);
                Ok(())
            }
            Self::StringLiteral(literal) => {
                buf.push_str(literal);
                Ok(())
            }
            Self::Strict(_) => Ok(()),
        }
    }

    pub(crate) fn parse(
        &self,
        context: &mut ParseContext,
        text: &str,
        position: usize,
    ) -> Result<usize, usize> {
        match self {
            Self::Number(number) => number.parse(context, text, position),
            Self::CharLiteral(literal) => {
                let ch = text
                    .get(position..)
                    .and_then(|rest| rest.chars().next())
                    .ok_or(position)?;
                if !context.char_equals(*literal, ch) {
                    return Err(position);
                }
                Ok(position + literal.len_utf8())
            }
            Self::StringLiteral(literal) => {
                let candidate = text
                    .get(position..position + literal.len())
                    .ok_or(position)?;
                if !context.str_equals(literal, candidate) {
                    return Err(position);
                }
                Ok(position + literal.len())
            }
            Self::Strict(strict) => {
                context.set_strict(*strict);
                Ok(position)
            }
        }
    }
}

impl fmt::Display for PrinterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => fmt::Display::fmt(number, f),
            Self::CharLiteral('\'') => f.write_str("''"),
            Self::CharLiteral(literal) => write!(f, "'{literal}'"),
            Self::StringLiteral(literal) => write!(f, "'{}'", literal.replace('\'', "''")),
            Self::Strict(strict) => write!(f, "ParseStrict({strict})"),
        }
    }
}
