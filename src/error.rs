//! This module implements `TemporalError`.

use alloc::{
    borrow::Cow,
    boxed::Box,
    string::{String, ToString},
};
use core::fmt;

use timezone_provider::TimeZoneProviderError;

/// `TemporalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A generic calendrical invariant violation.
    #[default]
    DateTime,
    /// A value outside of its valid range.
    Range,
    /// Text that does not match the expected format.
    Format,
    /// Text that could not be parsed, see [`TemporalError::parsed_text`].
    Parse,
    /// A field or unit that the value type does not support.
    UnsupportedTemporalType,
    /// A region identifier that no rules could be found for.
    ZoneRulesNotFound,
    /// Integer overflow in calendrical math.
    Arithmetic,
    /// A structurally invalid argument.
    IllegalArgument,
    /// A violated call contract.
    IllegalState,
    /// An internal assertion failed.
    Assert,
}

impl ErrorKind {
    /// Returns whether this kind belongs to the date time family of errors.
    pub fn is_date_time(self) -> bool {
        matches!(
            self,
            Self::DateTime
                | Self::Range
                | Self::Format
                | Self::Parse
                | Self::UnsupportedTemporalType
                | Self::ZoneRulesNotFound
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateTime => "DateTimeError",
            Self::Range => "RangeError",
            Self::Format => "FormatError",
            Self::Parse => "ParseError",
            Self::UnsupportedTemporalType => "UnsupportedTemporalTypeError",
            Self::ZoneRulesNotFound => "ZoneRulesError",
            Self::Arithmetic => "ArithmeticError",
            Self::IllegalArgument => "IllegalArgumentError",
            Self::IllegalState => "IllegalStateError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ParseFailure {
    text: String,
    index: usize,
}

/// The error type for `isotemporal`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
    parse: Option<Box<ParseFailure>>,
    cause: Option<Box<TemporalError>>,
}

impl TemporalError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
            parse: None,
            cause: None,
        }
    }

    /// Create a generic date time error.
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::DateTime).with_message(msg)
    }

    /// Create a range error.
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a format error.
    #[must_use]
    pub fn format() -> Self {
        Self::new(ErrorKind::Format)
    }

    /// Create a parse error for `text` failing at `index`.
    #[must_use]
    pub fn parse(text: &str, index: usize) -> Self {
        Self {
            parse: Some(Box::new(ParseFailure {
                text: text.to_string(),
                index,
            })),
            ..Self::new(ErrorKind::Parse)
        }
    }

    /// Create an unsupported temporal type error.
    #[must_use]
    pub fn unsupported() -> Self {
        Self::new(ErrorKind::UnsupportedTemporalType)
    }

    /// Create a zone rules not found error.
    #[must_use]
    pub fn zone_rules() -> Self {
        Self::new(ErrorKind::ZoneRulesNotFound)
    }

    /// Create an arithmetic overflow error.
    #[must_use]
    pub fn arithmetic() -> Self {
        Self::new(ErrorKind::Arithmetic).with_message("integer overflow")
    }

    /// Create an illegal argument error.
    #[must_use]
    pub fn illegal_argument() -> Self {
        Self::new(ErrorKind::IllegalArgument)
    }

    /// Create an illegal state error.
    #[must_use]
    pub fn illegal_state() -> Self {
        Self::new(ErrorKind::IllegalState)
    }

    /// Create an assertion error.
    #[must_use]
    pub fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error occurred.")
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Chain an underlying error as the cause of this error.
    #[must_use]
    pub fn with_cause(mut self, cause: TemporalError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the underlying error, if any.
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&TemporalError> {
        self.cause.as_deref()
    }

    /// Returns whether this is an error of the date time family.
    #[inline]
    #[must_use]
    pub fn is_date_time_error(&self) -> bool {
        self.kind.is_date_time()
    }

    /// Returns the text that failed to parse, for parse errors.
    #[must_use]
    pub fn parsed_text(&self) -> Option<&str> {
        self.parse.as_ref().map(|p| p.text.as_str())
    }

    /// Returns the index in the text at which parsing failed, for parse errors.
    #[must_use]
    pub fn error_index(&self) -> Option<usize> {
        self.parse.as_ref().map(|p| p.index)
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        if let Some(cause) = &self.cause {
            write!(f, "\nCaused by: {cause}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TemporalError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl From<TimeZoneProviderError> for TemporalError {
    fn from(value: TimeZoneProviderError) -> Self {
        let kind = match value {
            TimeZoneProviderError::NotFound(_) => ErrorKind::ZoneRulesNotFound,
            TimeZoneProviderError::Range(_) | TimeZoneProviderError::InstantOutOfRange => {
                ErrorKind::Range
            }
            TimeZoneProviderError::Malformed(_) => ErrorKind::DateTime,
            TimeZoneProviderError::Assert(_) => ErrorKind::Assert,
        };
        Self::new(kind).with_message(value.to_string())
    }
}
