use crate::{
    builtins::core::{
        zone::SystemDefaultZone, PlainDate, SystemClock, Year, ZoneContext, ZoneId,
    },
    sys::SystemHost,
    TemporalResult,
};

impl SystemClock<SystemHost> {
    /// A clock over the host's current instant in `zone`.
    #[must_use]
    pub fn system(zone: ZoneId) -> Self {
        Self::new(SystemHost, zone)
    }

    /// A clock over the host's current instant in the host's default zone.
    #[must_use]
    pub fn system_default_zone() -> Self {
        Self::system(ZoneId::System(SystemDefaultZone::new(ZoneContext::default())))
    }
}

impl ZoneId {
    /// The system default zone, resolved from the host on every use.
    #[must_use]
    pub fn system_default() -> Self {
        Self::System(SystemDefaultZone::new(ZoneContext::default()))
    }
}

impl Year {
    /// The current year in the host's default zone.
    pub fn now() -> TemporalResult<Self> {
        Self::now_with_clock(&SystemClock::system_default_zone())
    }

    /// The current year in `zone`.
    pub fn now_in(zone: ZoneId) -> TemporalResult<Self> {
        Self::now_with_clock(&SystemClock::system(zone))
    }
}

impl PlainDate {
    /// The current date in the host's default zone.
    pub fn now() -> TemporalResult<Self> {
        Self::now_with_clock(&SystemClock::system_default_zone())
    }

    /// The current date in `zone`.
    pub fn now_in(zone: ZoneId) -> TemporalResult<Self> {
        Self::now_with_clock(&SystemClock::system(zone))
    }
}

#[cfg(test)]
mod tests {
    use crate::builtins::core::{PlainDate, Year, ZoneId, ZoneOffset};

    #[test]
    fn now_is_after_2020() {
        let year = Year::now_in(ZoneId::Offset(ZoneOffset::UTC)).unwrap();
        assert!(year.value() >= 2020);
        let date = PlainDate::now_in(ZoneId::Offset(ZoneOffset::UTC)).unwrap();
        assert!(date.year() >= 2020);
    }
}
