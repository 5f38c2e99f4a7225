//! A field based formatter and parser.
//!
//! A [`DateTimeFormatter`] is an immutable sequence of rules assembled by a
//! [`DateTimeFormatterBuilder`]. The same rules print a value by reading its
//! fields through [`TemporalAccessor`], and parse text into [`Parsed`] field
//! values that a [`TemporalQuery`] turns back into a value.
//!
//! ```rust
//! use isotemporal::fields::ChronoField;
//! use isotemporal::format::{DateTimeFormatterBuilder, SignStyle};
//! use isotemporal::Year;
//!
//! let formatter = DateTimeFormatterBuilder::new()
//!     .append_value_with_style(ChronoField::Year.into(), 4, 10, SignStyle::ExceedsPad)
//!     .unwrap()
//!     .to_formatter();
//!
//! let year = Year::parse_with("0999", &formatter).unwrap();
//! assert_eq!(year.value(), 999);
//! assert_eq!(year.format(&formatter).unwrap(), "0999");
//! ```

use alloc::{borrow::Cow, format, string::String, vec::Vec};
use core::fmt;

use crate::{
    fields::{ChronoField, Field, TemporalAccessor, TemporalQuery},
    TemporalError, TemporalResult,
};

mod parsed;
mod printer_parser;

#[cfg(test)]
mod tests;

pub use parsed::Parsed;
pub use printer_parser::{NumberPrinterParser, PrinterParser, SignStyle, MAX_WIDTH};

use parsed::ParseContext;

/// Texts longer than this are abbreviated in parse errors.
const MAX_ERROR_TEXT: usize = 64;

const ISO_YEAR_RULES: &[PrinterParser] = &[PrinterParser::Number(NumberPrinterParser::new(
    Field::Chrono(ChronoField::Year),
    4,
    10,
    SignStyle::ExceedsPad,
))];

// ==== DateTimeFormatter ====

/// An immutable formatter and parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatter {
    printer_parsers: Cow<'static, [PrinterParser]>,
}

impl DateTimeFormatter {
    /// The formatter of a year: at least 4 digits, at most 10, with a sign
    /// when more than 4 digits are needed.
    pub const ISO_YEAR: Self = Self {
        printer_parsers: Cow::Borrowed(ISO_YEAR_RULES),
    };

    /// Returns the rules of this formatter.
    #[must_use]
    pub fn printer_parsers(&self) -> &[PrinterParser] {
        &self.printer_parsers
    }

    /// Formats `temporal`.
    pub fn format(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<String> {
        let mut buf = String::new();
        self.format_to(temporal, &mut buf)?;
        Ok(buf)
    }

    /// Formats `temporal` onto the end of `buf`.
    pub fn format_to(&self, temporal: &dyn TemporalAccessor, buf: &mut String) -> TemporalResult<()> {
        self.printer_parsers
            .iter()
            .try_for_each(|printer_parser| printer_parser.print(temporal, buf))
    }

    /// Parses `text` completely and resolves the fields with `query`.
    ///
    /// Any failure after the text has been consumed, such as a field out of
    /// range or a query that cannot be satisfied, is reported as a parse
    /// error at index 0 with the failure as its cause.
    pub fn parse<R>(&self, text: &str, query: impl TemporalQuery<R>) -> TemporalResult<R> {
        let parsed = self.parse_unresolved(text)?;
        parsed
            .resolve()
            .and_then(|parsed| query.query_from(&parsed))
            .map_err(|err| {
                if err.kind() == crate::error::ErrorKind::Parse {
                    return err;
                }
                TemporalError::parse(text, 0)
                    .with_message(format!(
                        "Text '{}' could not be parsed: {}",
                        abbreviate(text),
                        err.message()
                    ))
                    .with_cause(err)
            })
    }

    /// Parses `text` completely into its field values without resolving them.
    pub fn parse_unresolved(&self, text: &str) -> TemporalResult<Parsed> {
        let mut context = ParseContext::new();
        let mut position = 0;
        for printer_parser in self.printer_parsers.iter() {
            position = printer_parser
                .parse(&mut context, text, position)
                .map_err(|index| {
                    #[cfg(feature = "log")]
                    log::debug!("parsing failed at index {index}");
                    TemporalError::parse(text, index).with_message(format!(
                        "Text '{}' could not be parsed at index {index}",
                        abbreviate(text)
                    ))
                })?;
        }
        if position < text.len() {
            return Err(TemporalError::parse(text, position).with_message(format!(
                "Text '{}' could not be parsed, unparsed text found at index {position}",
                abbreviate(text)
            )));
        }
        Ok(context.into_parsed())
    }
}

fn abbreviate(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_ERROR_TEXT) {
        Some((end, _)) => Cow::Owned(format!("{}...", &text[..end])),
        None => Cow::Borrowed(text),
    }
}

impl fmt::Display for DateTimeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer_parsers
            .iter()
            .try_for_each(|printer_parser| fmt::Display::fmt(printer_parser, f))
    }
}

// ==== DateTimeFormatterBuilder ====

/// Assembles the rules of a [`DateTimeFormatter`].
#[derive(Debug, Clone, Default)]
pub struct DateTimeFormatterBuilder {
    printer_parsers: Vec<PrinterParser>,
}

impl DateTimeFormatterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `field` as 1 to 19 digits, signed when negative.
    #[must_use]
    pub fn append_value(self, field: Field) -> Self {
        self.append_number(NumberPrinterParser::new(field, 1, MAX_WIDTH, SignStyle::Normal))
    }

    /// Appends `field` as exactly `width` digits, rejecting negative values.
    pub fn append_value_fixed(self, field: Field, width: u8) -> TemporalResult<Self> {
        check_width("width", width)?;
        Ok(self.append_number(NumberPrinterParser::new(
            field,
            width,
            width,
            SignStyle::NotNegative,
        )))
    }

    /// Appends `field` as `min_width` to `max_width` digits, signed per `sign_style`.
    pub fn append_value_with_style(
        self,
        field: Field,
        min_width: u8,
        max_width: u8,
        sign_style: SignStyle,
    ) -> TemporalResult<Self> {
        check_width("minimum width", min_width)?;
        check_width("maximum width", max_width)?;
        if max_width < min_width {
            return Err(TemporalError::illegal_argument().with_message(format!(
                "The maximum width must exceed or equal the minimum width but {max_width} < {min_width}"
            )));
        }
        Ok(self.append_number(NumberPrinterParser::new(
            field, min_width, max_width, sign_style,
        )))
    }

    #[must_use]
    pub fn append_literal(mut self, literal: char) -> Self {
        self.printer_parsers.push(PrinterParser::CharLiteral(literal));
        self
    }

    /// Appends a literal, an empty literal appends nothing.
    #[must_use]
    pub fn append_literal_str(mut self, literal: &str) -> Self {
        let mut chars = literal.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {}
            (Some(ch), None) => self.printer_parsers.push(PrinterParser::CharLiteral(ch)),
            _ => self
                .printer_parsers
                .push(PrinterParser::StringLiteral(Cow::Owned(literal.into()))),
        }
        self
    }

    /// Parses the rules that follow strictly, which is the default.
    #[must_use]
    pub fn parse_strict(mut self) -> Self {
        self.printer_parsers.push(PrinterParser::Strict(true));
        self
    }

    /// Parses the rules that follow leniently: literals ignore ASCII case and
    /// numbers accept any width and sign.
    #[must_use]
    pub fn parse_lenient(mut self) -> Self {
        self.printer_parsers.push(PrinterParser::Strict(false));
        self
    }

    #[must_use]
    pub fn to_formatter(self) -> DateTimeFormatter {
        DateTimeFormatter {
            printer_parsers: Cow::Owned(self.printer_parsers),
        }
    }

    fn append_number(mut self, number: NumberPrinterParser) -> Self {
        self.printer_parsers.push(PrinterParser::Number(number));
        self
    }
}

fn check_width(name: &str, width: u8) -> TemporalResult<()> {
    if !(1..=MAX_WIDTH).contains(&width) {
        return Err(TemporalError::illegal_argument().with_message(format!(
            "The {name} must be from 1 to {MAX_WIDTH} inclusive but was {width}"
        )));
    }
    Ok(())
}
