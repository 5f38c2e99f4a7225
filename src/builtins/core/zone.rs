//! This module implements `ZoneId` and its variants.
//!
//! A [`ZoneId`] is one of a fixed [`ZoneOffset`], a [`ZoneRegion`] resolved
//! against a [`TimeZoneProvider`], or the [`SystemDefaultZone`] which defers
//! to the host on every use. The provider and the host are injected through
//! a [`ZoneContext`].

use alloc::{borrow::Cow, format, string::String, sync::Arc};
use core::{
    fmt,
    hash::{Hash, Hasher},
};

use timezone_provider::provider::TimeZoneProvider;

use crate::{
    fields::{queries, TemporalAccessor},
    host::HostTimeZone,
    TemporalError, TemporalResult,
};

mod offset;
mod region;
mod rules;
mod system;

#[cfg(test)]
mod tests;

pub use offset::ZoneOffset;
pub use region::ZoneRegion;
pub use rules::ZoneRules;
pub use system::SystemDefaultZone;

// ==== ZoneContext ====

/// The collaborators zone resolution depends on: a rules provider and a
/// host that reports its default zone.
#[derive(Clone)]
pub struct ZoneContext {
    provider: Arc<dyn TimeZoneProvider>,
    host: Arc<dyn HostTimeZone>,
}

impl ZoneContext {
    pub fn new(provider: Arc<dyn TimeZoneProvider>, host: Arc<dyn HostTimeZone>) -> Self {
        Self { provider, host }
    }

    /// Creates a context whose host zone is UTC.
    pub fn with_provider(provider: Arc<dyn TimeZoneProvider>) -> Self {
        Self::new(provider, Arc::new(()))
    }

    #[inline]
    pub fn provider(&self) -> &dyn TimeZoneProvider {
        &*self.provider
    }

    #[inline]
    pub fn host(&self) -> &dyn HostTimeZone {
        &*self.host
    }
}

impl fmt::Debug for ZoneContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneContext").finish_non_exhaustive()
    }
}

// ==== ZoneId ====

/// A zone identifier.
///
/// Two ids are equal when their [`ZoneId::id`]s are equal.
#[derive(Debug, Clone)]
pub enum ZoneId {
    Offset(ZoneOffset),
    Region(ZoneRegion),
    System(SystemDefaultZone),
}

impl ZoneId {
    /// Parses `zone_id` into a zone, looking regions up with `context`.
    ///
    /// The first matching form wins:
    ///
    /// 1. `Z` is the UTC offset.
    /// 2. Any other single character is rejected.
    /// 3. A leading `+` or `-` is a fixed offset.
    /// 4. `UTC`, `GMT` and `UT` are regions with the rules of UTC.
    /// 5. `UTC±`, `GMT±` and `UT±` followed by an offset are regions with
    ///    the rules of that offset. The id drops a zero offset.
    /// 6. `SYSTEM` is the system default zone.
    /// 7. Anything else is a region resolved by the provider.
    pub fn of_with_context(zone_id: &str, context: &ZoneContext) -> TemporalResult<Self> {
        if zone_id == "Z" {
            return Ok(Self::Offset(ZoneOffset::UTC));
        }
        if zone_id.chars().count() == 1 {
            return Err(TemporalError::format()
                .with_message(format!("Invalid zone: {zone_id}")));
        }
        if zone_id.starts_with(['+', '-']) {
            return ZoneOffset::of(zone_id).map(Self::Offset);
        }
        if matches!(zone_id, "UTC" | "GMT" | "UT") {
            return Ok(Self::Region(ZoneRegion::fixed(zone_id.into(), ZoneOffset::UTC)));
        }
        let prefix_len = if ["UTC+", "UTC-", "GMT+", "GMT-"]
            .iter()
            .any(|prefix| zone_id.starts_with(prefix))
        {
            Some(3)
        } else if zone_id.starts_with("UT+") || zone_id.starts_with("UT-") {
            Some(2)
        } else {
            None
        };
        if let Some(prefix_len) = prefix_len {
            // NOTE: the prefix is ASCII, so `prefix_len` is a char boundary.
            let (prefix, offset) = zone_id.split_at(prefix_len);
            let offset = ZoneOffset::of(offset)?;
            return Ok(Self::Region(prefixed_region(prefix, offset)));
        }
        if zone_id == SystemDefaultZone::ID {
            return Ok(Self::System(SystemDefaultZone::new(context.clone())));
        }
        ZoneRegion::of_with_provider(zone_id, context.provider()).map(Self::Region)
    }

    /// Combines a prefix of `""`, `GMT`, `UTC` or `UT` with an offset.
    pub fn of_offset(prefix: &str, offset: ZoneOffset) -> TemporalResult<Self> {
        match prefix {
            "" => Ok(Self::Offset(offset)),
            "GMT" | "UTC" | "UT" => Ok(Self::Region(prefixed_region(prefix, offset))),
            _ => Err(TemporalError::illegal_argument().with_message(format!(
                "Invalid prefix, must be GMT, UTC or UT: {prefix}"
            ))),
        }
    }

    /// Obtains the zone of `temporal`, falling back to its offset.
    pub fn from_temporal(temporal: &dyn TemporalAccessor) -> TemporalResult<Self> {
        match queries::zone(temporal) {
            Ok(Some(zone)) => Ok(zone),
            Ok(None) => Err(unable_to_obtain(temporal)),
            Err(err) => Err(unable_to_obtain(temporal).with_cause(err)),
        }
    }

    /// Returns the id, the canonical offset id for an offset.
    #[must_use]
    pub fn id(&self) -> Cow<'_, str> {
        match self {
            Self::Offset(offset) => Cow::Owned(offset.id()),
            Self::Region(region) => Cow::Borrowed(region.id()),
            Self::System(_) => Cow::Borrowed(SystemDefaultZone::ID),
        }
    }

    /// Returns the rules of this zone.
    ///
    /// The system default zone asks its host on every call.
    pub fn rules(&self) -> TemporalResult<ZoneRules> {
        match self {
            Self::Offset(offset) => Ok(offset.rules()),
            Self::Region(region) => Ok(region.rules().clone()),
            Self::System(system) => system.rules(),
        }
    }

    /// Returns the offset if the rules of this zone are fixed, otherwise this zone.
    pub fn normalized(&self) -> TemporalResult<Self> {
        match self.rules()?.fixed_offset()? {
            Some(offset) => Ok(Self::Offset(offset)),
            None => Ok(self.clone()),
        }
    }
}

fn prefixed_region(prefix: &str, offset: ZoneOffset) -> ZoneRegion {
    let id = if offset.total_seconds() == 0 {
        String::from(prefix)
    } else {
        format!("{prefix}{}", offset.id())
    };
    ZoneRegion::fixed(id, offset)
}

fn unable_to_obtain(temporal: &dyn TemporalAccessor) -> TemporalError {
    TemporalError::general(format!(
        "Unable to obtain ZoneId from TemporalAccessor: {temporal:?}, type {}",
        temporal.type_name()
    ))
}

impl From<ZoneOffset> for ZoneId {
    fn from(value: ZoneOffset) -> Self {
        Self::Offset(value)
    }
}

impl PartialEq for ZoneId {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ZoneId {}

impl Hash for ZoneId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
