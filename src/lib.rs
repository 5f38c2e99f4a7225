//! The `isotemporal` crate provides immutable calendrical value types in
//! the proleptic ISO calendar, a zone identifier model and a field based
//! formatter and parser.
//!
//! ```rust
//! use isotemporal::fields::{ChronoField, ChronoUnit, Temporal, TemporalAccessor};
//! use isotemporal::{PlainMonthDay, Year};
//!
//! let year = Year::parse("2023").unwrap();
//! assert!(!year.is_leap());
//! assert_eq!(year.get(ChronoField::Era.into()).unwrap(), 1);
//!
//! let next = year.plus(1, ChronoUnit::Years.into()).unwrap();
//! let leap_day = PlainMonthDay::of(2, 29).unwrap();
//! assert!(next.is_valid_month_day(&leap_day));
//! assert_eq!(year.at_month_day(&leap_day).unwrap().to_string(), "2023-02-28");
//! ```
//!
//! Every value is read through the [`TemporalAccessor`][fields::TemporalAccessor]
//! protocol: a value reports which [`Field`][fields::Field]s it supports,
//! their ranges and their values. The standard fields and units are the
//! closed [`ChronoField`][fields::ChronoField] and
//! [`ChronoUnit`][fields::ChronoUnit] enums, custom ones are implemented
//! with [`TemporalField`][fields::TemporalField] and
//! [`TemporalUnit`][fields::TemporalUnit].
//!
//! Zones are resolved against an explicit [`ZoneContext`], which names the
//! [`TimeZoneProvider`][provider::TimeZoneProvider] to look regions up in
//! and the host that reports the system default zone. With the
//! `compiled_data` feature, [`ZoneId::of`] uses the bundled IANA database.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod enum_map;
pub mod error;
pub mod fields;
pub mod format;
pub mod host;
pub mod iso;
pub mod parsers;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;

#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::TemporalError;

/// The `isotemporal` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub mod time {
    pub use timezone_provider::epoch_nanoseconds::EpochNanoseconds;
}

pub mod provider {
    //! Re-exports of the zone rules provider contract.
    pub use timezone_provider::{
        provider::{InMemoryProvider, NeverProvider, TimeZoneProvider, UtcOffsetSeconds},
        rules::{Transition, TransitionRules},
        TimeZoneProviderError,
    };

    #[cfg(feature = "tzdb")]
    pub use timezone_provider::tzif::TzdbProvider;
}

pub mod zone {
    //! The zone identifier model.
    pub use crate::builtins::core::zone::*;
}

pub use crate::builtins::{
    Clock, FixedClock, Month, Period, PlainDate, PlainMonthDay, PlainYearMonth, SystemClock, Year,
    ZoneContext, ZoneId, ZoneOffset,
};

#[cfg(feature = "compiled_data")]
pub use crate::builtins::TZ_PROVIDER;

#[cfg(feature = "sys")]
pub use crate::sys::SystemHost;

/// A library specific trait for unwrapping assertions.
pub(crate) trait TemporalUnwrap {
    type Output;

    /// `isotemporal` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn temporal_unwrap(self) -> TemporalResult<Self::Output>;
}

impl<T> TemporalUnwrap for Option<T> {
    type Output = T;

    fn temporal_unwrap(self) -> TemporalResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(TemporalError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! temporal_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err(TemporalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err(TemporalError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl From<i32> for Sign {
    fn from(value: i32) -> Self {
        Self::from(value.signum() as i8)
    }
}
