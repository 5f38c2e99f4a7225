//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::{
    builtins::core::zone::{ZoneContext, ZoneId, ZoneOffset},
    time::EpochNanoseconds,
    TemporalResult,
};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock: Send + Sync {
    fn get_host_epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds>;
}

/// The `HostTimeZone` trait defines the host's time zone.
///
/// The returned zone must not be [`ZoneId::System`].
pub trait HostTimeZone: Send + Sync {
    fn get_host_time_zone(&self, context: &ZoneContext) -> TemporalResult<ZoneId>;
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::from_seconds(0))
    }
}

impl HostTimeZone for () {
    fn get_host_time_zone(&self, _: &ZoneContext) -> TemporalResult<ZoneId> {
        Ok(ZoneId::Offset(ZoneOffset::UTC))
    }
}
