//! Data providers for zone rules
//!
//! This crate defines the [`TimeZoneProvider`][provider::TimeZoneProvider]
//! contract that maps a region identifier to its [`TransitionRules`][rules::TransitionRules],
//! along with a couple of providers:
//!
//! - [`InMemoryProvider`][provider::InMemoryProvider], a provider built
//!   from rules registered at runtime.
//! - `TzdbProvider` (feature `tzif`), a provider over the IANA database
//!   bundled by `jiff-tzdb`.
//!
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::string::String;
use core::fmt;

pub mod epoch_nanoseconds;
pub mod posix;
pub mod provider;
pub mod rules;

#[cfg(feature = "tzif")]
pub mod tzif;

#[doc(hidden)]
pub mod utils;

/// The error type returned by zone rules providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZoneProviderError {
    /// The provider has no rules for the identifier.
    NotFound(String),
    /// A provided value was out of range.
    Range(&'static str),
    /// The underlying zone data could not be decoded.
    Malformed(&'static str),
    /// An internal invariant was violated.
    Assert(&'static str),
    /// An instant was outside the supported instant range.
    InstantOutOfRange,
}

impl fmt::Display for TimeZoneProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Unknown time-zone ID: {id}"),
            Self::Range(msg) => write!(f, "Provider range error: {msg}"),
            Self::Malformed(msg) => write!(f, "Malformed zone data: {msg}"),
            Self::Assert(msg) => write!(f, "Provider assertion failed: {msg}"),
            Self::InstantOutOfRange => f.write_str("Instant is outside the supported range."),
        }
    }
}

impl core::error::Error for TimeZoneProviderError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::TimeZoneProviderError;

    #[test]
    fn error_display() {
        assert_eq!(
            TimeZoneProviderError::NotFound("Mars/Olympus".into()).to_string(),
            "Unknown time-zone ID: Mars/Olympus"
        );
        assert_eq!(
            TimeZoneProviderError::Malformed("bad header").to_string(),
            "Malformed zone data: bad header"
        );
    }
}
