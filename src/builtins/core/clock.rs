//! This module implements the `Clock` abstraction used by the `now` family.

use crate::{
    builtins::core::{zone::ZoneId, PlainDate},
    host::HostClock,
    time::EpochNanoseconds,
    utils, TemporalResult,
};

/// A source of the current instant together with a zone.
pub trait Clock {
    /// Returns the current instant.
    fn epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds>;

    /// Returns the zone used to derive local values.
    fn zone(&self) -> ZoneId;

    /// Returns the current local date in [`Clock::zone`].
    fn local_date(&self) -> TemporalResult<PlainDate> {
        let instant = self.epoch_nanoseconds()?;
        instant.check_validity()?;
        let offset = self.zone().rules()?.offset(instant)?;
        let local_seconds = utils::checked_add(
            instant.as_epoch_seconds(),
            i64::from(offset.total_seconds()),
        )?;
        PlainDate::of_epoch_day(local_seconds.div_euclid(86_400))
    }
}

/// A clock that always returns the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: EpochNanoseconds,
    zone: ZoneId,
}

impl FixedClock {
    #[must_use]
    pub fn new(instant: EpochNanoseconds, zone: ZoneId) -> Self {
        Self { instant, zone }
    }
}

impl Clock for FixedClock {
    fn epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds> {
        Ok(self.instant)
    }

    fn zone(&self) -> ZoneId {
        self.zone.clone()
    }
}

/// A clock that reads the instant from a host.
#[derive(Debug, Clone)]
pub struct SystemClock<H: HostClock> {
    host: H,
    zone: ZoneId,
}

impl<H: HostClock> SystemClock<H> {
    pub fn new(host: H, zone: ZoneId) -> Self {
        Self { host, zone }
    }
}

impl<H: HostClock> Clock for SystemClock<H> {
    fn epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds> {
        self.host.get_host_epoch_nanoseconds()
    }

    fn zone(&self) -> ZoneId {
        self.zone.clone()
    }
}
