//! The field and unit protocol.
//!
//! Every value type answers field queries through [`TemporalAccessor`] and
//! accepts adjustments and arithmetic through [`Temporal`]. Fields and units
//! are closed tagged variants: the standard [`ChronoField`] and [`ChronoUnit`]
//! members are matched exhaustively by the value types, while custom members
//! implement [`TemporalField`] or [`TemporalUnit`] and are dispatched back to.
//!
//! ```rust
//! use isotemporal::fields::{ChronoField, ChronoUnit, Temporal, TemporalAccessor};
//! use isotemporal::Year;
//!
//! let year = Year::of(2024).unwrap();
//! assert_eq!(year.get(ChronoField::YearOfEra.into()).unwrap(), 2024);
//!
//! let next_decade = year.plus(1, ChronoUnit::Decades.into()).unwrap();
//! assert_eq!(next_decade.value(), 2034);
//! ```

use alloc::{format, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{builtins::ZoneId, TemporalError, TemporalResult};

mod chrono;
pub mod queries;
mod range;

pub use chrono::{ChronoField, ChronoUnit, UnitDuration};
pub use range::ValueRange;

// ==== Field ====

/// A field of a temporal value, either a standard [`ChronoField`] or a custom
/// [`TemporalField`].
///
/// Fields are identified by their name.
#[derive(Clone, Copy)]
pub enum Field {
    Chrono(ChronoField),
    Custom(&'static dyn TemporalField),
}

impl Field {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chrono(field) => field.name(),
            Self::Custom(field) => field.name(),
        }
    }

    #[must_use]
    pub fn base_unit(&self) -> Unit {
        match self {
            Self::Chrono(field) => Unit::Chrono(field.base_unit()),
            Self::Custom(field) => field.base_unit(),
        }
    }

    #[must_use]
    pub fn range_unit(&self) -> Unit {
        match self {
            Self::Chrono(field) => Unit::Chrono(field.range_unit()),
            Self::Custom(field) => field.range_unit(),
        }
    }

    /// Returns the outer range of the field, irrespective of any value.
    #[must_use]
    pub fn range(&self) -> ValueRange {
        match self {
            Self::Chrono(field) => field.range(),
            Self::Custom(field) => field.range(),
        }
    }

    #[must_use]
    pub fn is_date_based(&self) -> bool {
        match self {
            Self::Chrono(field) => field.is_date_based(),
            Self::Custom(field) => field.is_date_based(),
        }
    }

    #[must_use]
    pub fn is_time_based(&self) -> bool {
        match self {
            Self::Chrono(field) => field.is_time_based(),
            Self::Custom(field) => field.is_time_based(),
        }
    }

    /// Returns the standard field, if this is one.
    #[must_use]
    pub fn as_chrono(&self) -> Option<ChronoField> {
        match self {
            Self::Chrono(field) => Some(*field),
            Self::Custom(_) => None,
        }
    }

    /// Checks `value` against the outer range of this field.
    pub fn check_valid_value(&self, value: i64) -> TemporalResult<i64> {
        self.range().check_valid_value(value, *self)
    }

    /// Checks `value` against the outer range of this field as an `i32`.
    pub fn check_valid_int_value(&self, value: i64) -> TemporalResult<i32> {
        self.range().check_valid_int_value(value, *self)
    }
}

impl From<ChronoField> for Field {
    fn from(value: ChronoField) -> Self {
        Self::Chrono(value)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrono(field) => f.debug_tuple("Chrono").field(field).finish(),
            Self::Custom(field) => f.debug_tuple("Custom").field(&field.name()).finish(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==== Unit ====

/// A unit of temporal arithmetic, either a standard [`ChronoUnit`] or a
/// custom [`TemporalUnit`].
#[derive(Clone, Copy)]
pub enum Unit {
    Chrono(ChronoUnit),
    Custom(&'static dyn TemporalUnit),
}

impl Unit {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chrono(unit) => unit.name(),
            Self::Custom(unit) => unit.name(),
        }
    }

    #[must_use]
    pub fn duration(&self) -> UnitDuration {
        match self {
            Self::Chrono(unit) => unit.duration(),
            Self::Custom(unit) => unit.duration(),
        }
    }

    #[must_use]
    pub fn is_duration_estimated(&self) -> bool {
        match self {
            Self::Chrono(unit) => unit.is_duration_estimated(),
            Self::Custom(unit) => unit.is_duration_estimated(),
        }
    }

    #[must_use]
    pub fn is_date_based(&self) -> bool {
        match self {
            Self::Chrono(unit) => unit.is_date_based(),
            Self::Custom(unit) => unit.is_date_based(),
        }
    }

    #[must_use]
    pub fn is_time_based(&self) -> bool {
        match self {
            Self::Chrono(unit) => unit.is_time_based(),
            Self::Custom(unit) => unit.is_time_based(),
        }
    }

    #[must_use]
    pub fn as_chrono(&self) -> Option<ChronoUnit> {
        match self {
            Self::Chrono(unit) => Some(*unit),
            Self::Custom(_) => None,
        }
    }
}

impl From<ChronoUnit> for Unit {
    fn from(value: ChronoUnit) -> Self {
        Self::Chrono(value)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrono(unit) => f.debug_tuple("Chrono").field(unit).finish(),
            Self::Custom(unit) => f.debug_tuple("Custom").field(&unit.name()).finish(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==== Capability traits ====

/// A field defined outside of the standard set.
///
/// Value types do not know about custom fields, so every query on a custom
/// field is dispatched back to the field itself.
pub trait TemporalField: Send + Sync {
    fn name(&self) -> &'static str;

    fn base_unit(&self) -> Unit;

    fn range_unit(&self) -> Unit;

    fn range(&self) -> ValueRange;

    fn is_date_based(&self) -> bool {
        false
    }

    fn is_time_based(&self) -> bool {
        false
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool;

    /// Returns the range of the field, refined by the value of `temporal`.
    fn range_refined_by(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<ValueRange> {
        let _ = temporal;
        Ok(self.range())
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<i64>;

    fn adjust_into(&self, temporal: &mut dyn DynTemporal, new_value: i64) -> TemporalResult<()>;
}

/// A unit defined outside of the standard set.
pub trait TemporalUnit: Send + Sync {
    fn name(&self) -> &'static str;

    fn duration(&self) -> UnitDuration;

    fn is_duration_estimated(&self) -> bool;

    fn is_date_based(&self) -> bool;

    fn is_time_based(&self) -> bool;

    /// Returns whether this unit can be added to `temporal`.
    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool;

    fn add_to(&self, temporal: &mut dyn DynTemporal, amount: i64) -> TemporalResult<()>;

    /// Returns the amount of this unit between two temporals.
    fn between(
        &self,
        start: &dyn TemporalAccessor,
        end: &dyn TemporalAccessor,
    ) -> TemporalResult<i64>;
}

/// Read access to the fields of a temporal value.
pub trait TemporalAccessor: fmt::Debug {
    fn is_supported(&self, field: Field) -> bool;

    /// Returns the range of valid values for `field`, refined by this value.
    fn range(&self, field: Field) -> TemporalResult<ValueRange>;

    /// Returns the value of `field`, checked against [`TemporalAccessor::range`].
    fn get(&self, field: Field) -> TemporalResult<i32> {
        let value = self.get_long(field)?;
        self.range(field)?.check_valid_int_value(value, field)
    }

    /// Returns the unchecked value of `field`.
    fn get_long(&self, field: Field) -> TemporalResult<i64>;

    /// Returns the zone of this value, if it has one.
    fn zone(&self) -> Option<ZoneId> {
        None
    }

    /// Returns the smallest unit this value is precise to.
    fn precision(&self) -> Option<Unit> {
        None
    }

    /// Returns the concrete type name, used in diagnostics.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Runs `query` against this value.
    fn query<R>(&self, query: impl TemporalQuery<R>) -> TemporalResult<R>
    where
        Self: Sized,
    {
        query.query_from(self)
    }
}

/// A temporal value that can be adjusted and used in arithmetic.
///
/// Every operation returns a new value.
pub trait Temporal: TemporalAccessor + Clone + Sized {
    fn is_supported_unit(&self, unit: Unit) -> bool;

    /// Returns a copy of this value with `field` set to `new_value`.
    fn with(&self, field: Field, new_value: i64) -> TemporalResult<Self>;

    /// Returns a copy of this value with `amount` of `unit` added.
    fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self>;

    /// Returns a copy of this value with `amount` of `unit` subtracted.
    fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    fn with_adjuster(&self, adjuster: &impl TemporalAdjuster) -> TemporalResult<Self> {
        adjuster.adjust_into(self)
    }

    fn plus_amount(&self, amount: &impl TemporalAmount) -> TemporalResult<Self> {
        amount.add_to(self)
    }

    fn minus_amount(&self, amount: &impl TemporalAmount) -> TemporalResult<Self> {
        amount.subtract_from(self)
    }
}

/// The object safe face of [`Temporal`], used by custom fields and units.
pub trait DynTemporal: TemporalAccessor {
    fn as_accessor(&self) -> &dyn TemporalAccessor;

    fn with_in_place(&mut self, field: Field, new_value: i64) -> TemporalResult<()>;

    fn plus_in_place(&mut self, amount: i64, unit: Unit) -> TemporalResult<()>;
}

impl<T: Temporal> DynTemporal for T {
    fn as_accessor(&self) -> &dyn TemporalAccessor {
        self
    }

    fn with_in_place(&mut self, field: Field, new_value: i64) -> TemporalResult<()> {
        *self = self.with(field, new_value)?;
        Ok(())
    }

    fn plus_in_place(&mut self, amount: i64, unit: Unit) -> TemporalResult<()> {
        *self = self.plus(amount, unit)?;
        Ok(())
    }
}

/// A strategy for adjusting a temporal value.
pub trait TemporalAdjuster {
    fn adjust_into<T: Temporal>(&self, temporal: &T) -> TemporalResult<T>;
}

/// An amount of time made of one or more units.
pub trait TemporalAmount {
    /// The units of this amount, largest first.
    fn units(&self) -> Vec<Unit>;

    fn get(&self, unit: Unit) -> TemporalResult<i64>;

    fn add_to<T: Temporal>(&self, temporal: &T) -> TemporalResult<T> {
        self.units()
            .into_iter()
            .try_fold(temporal.clone(), |acc, unit| match self.get(unit)? {
                0 => Ok(acc),
                amount => acc.plus(amount, unit),
            })
    }

    fn subtract_from<T: Temporal>(&self, temporal: &T) -> TemporalResult<T> {
        self.units()
            .into_iter()
            .try_fold(temporal.clone(), |acc, unit| match self.get(unit)? {
                0 => Ok(acc),
                amount => acc.minus(amount, unit),
            })
    }
}

/// A query against a temporal value.
///
/// Any `Fn(&dyn TemporalAccessor) -> TemporalResult<R>` is a query, which
/// makes constructors such as [`Year::from_temporal`][crate::Year::from_temporal]
/// usable directly.
pub trait TemporalQuery<R> {
    fn query_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<R>;
}

impl<R, F> TemporalQuery<R> for F
where
    F: Fn(&dyn TemporalAccessor) -> TemporalResult<R>,
{
    fn query_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<R> {
        self(temporal)
    }
}

// ==== Shared helpers for value type implementations ====

pub(crate) fn unsupported_field(field: Field) -> TemporalError {
    TemporalError::unsupported().with_message(format!("Unsupported field: {}", field.name()))
}

pub(crate) fn unsupported_unit(unit: Unit) -> TemporalError {
    TemporalError::unsupported().with_message(format!("Unsupported unit: {}", unit.name()))
}

/// The range of `field` for accessors that do not refine the standard ranges.
pub(crate) fn default_range(
    temporal: &dyn TemporalAccessor,
    field: Field,
) -> TemporalResult<ValueRange> {
    match field {
        Field::Chrono(chrono) if temporal.is_supported(field) => Ok(chrono.range()),
        Field::Chrono(_) => Err(unsupported_field(field)),
        Field::Custom(custom) => custom.range_refined_by(temporal),
    }
}
