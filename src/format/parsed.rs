//! The field values accumulated while parsing.

use alloc::{format, vec::Vec};

use crate::{
    enum_map::EnumMap,
    fields::{unsupported_field, ChronoField, Field, TemporalAccessor, ValueRange},
    TemporalError, TemporalResult,
};

/// The state of a single parse.
#[derive(Debug)]
pub(crate) struct ParseContext {
    strict: bool,
    parsed: Parsed,
}

impl ParseContext {
    pub(crate) fn new() -> Self {
        Self {
            strict: true,
            parsed: Parsed::default(),
        }
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.strict
    }

    pub(crate) fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub(crate) fn char_equals(&self, expected: char, actual: char) -> bool {
        if self.strict {
            expected == actual
        } else {
            expected.eq_ignore_ascii_case(&actual)
        }
    }

    pub(crate) fn str_equals(&self, expected: &str, actual: &str) -> bool {
        if self.strict {
            expected == actual
        } else {
            expected.eq_ignore_ascii_case(actual)
        }
    }

    /// Stores a parsed value, a different earlier value for the same field
    /// fails at `error_position`.
    pub(crate) fn set_parsed_field(
        &mut self,
        field: Field,
        value: i64,
        error_position: usize,
        success_position: usize,
    ) -> Result<usize, usize> {
        match self.parsed.fields.put(field, value) {
            Some(previous) if previous != value => Err(error_position),
            _ => Ok(success_position),
        }
    }

    pub(crate) fn into_parsed(self) -> Parsed {
        self.parsed
    }
}

/// The field values parsed from a text.
///
/// `Parsed` is a [`TemporalAccessor`] over exactly the parsed fields, which
/// is what the query of [`DateTimeFormatter::parse`][crate::format::DateTimeFormatter::parse]
/// receives once the fields are resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    fields: EnumMap<Field, i64>,
}

impl Parsed {
    /// Returns the parsed value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<i64> {
        self.fields.get(field).copied()
    }

    /// Returns the parsed fields and their values.
    pub fn fields(&self) -> &EnumMap<Field, i64> {
        &self.fields
    }

    /// Validates the standard fields and combines `YearOfEra` with `Era`
    /// into `Year`.
    pub(crate) fn resolve(mut self) -> TemporalResult<Self> {
        for (field, value) in self.fields.iter() {
            if let Field::Chrono(chrono) = field {
                chrono.range().check_valid_value(*value, field)?;
            }
        }

        let year_field = Field::from(ChronoField::Year);
        let year_of_era = self.fields.remove(ChronoField::YearOfEra.into());
        let era = self.fields.get(ChronoField::Era.into()).copied();
        if let Some(year_of_era) = year_of_era {
            let year = match (era, self.value(year_field)) {
                (Some(1), _) => year_of_era,
                (Some(_), _) => 1 - year_of_era,
                (None, Some(year)) if year < 1 => 1 - year_of_era,
                (None, _) => year_of_era,
            };
            if let Some(previous) = self.fields.put(year_field, year) {
                if previous != year {
                    return Err(TemporalError::general(format!(
                        "Conflict found: Year {previous} differs from Year {year} while resolving YearOfEra"
                    )));
                }
            }
        } else if let (Some(era), Some(year)) = (era, self.value(year_field)) {
            let year_era = i64::from(year >= 1);
            if era != year_era {
                return Err(TemporalError::general(format!(
                    "Conflict found: Era {era} differs from Era {year_era} while resolving Year"
                )));
            }
        }
        // The era is either combined into the year or confirmed by it.
        if self.value(year_field).is_some() {
            self.fields.remove(ChronoField::Era.into());
        }
        let live: Vec<Field> = self.fields.keys().collect();
        self.fields.retain_all(&live);
        Ok(self)
    }
}

impl TemporalAccessor for Parsed {
    fn is_supported(&self, field: Field) -> bool {
        self.fields.contains_key(field)
    }

    fn range(&self, field: Field) -> TemporalResult<ValueRange> {
        if !self.is_supported(field) {
            return Err(unsupported_field(field));
        }
        Ok(field.range())
    }

    fn get_long(&self, field: Field) -> TemporalResult<i64> {
        self.value(field).ok_or_else(|| unsupported_field(field))
    }
}
