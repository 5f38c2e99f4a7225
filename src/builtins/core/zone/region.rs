//! This module implements `ZoneRegion`.

use alloc::{format, string::String};
use core::hash::{Hash, Hasher};

use timezone_provider::provider::TimeZoneProvider;

use crate::{
    builtins::core::zone::{ZoneOffset, ZoneRules},
    parsers::is_valid_region_id,
    TemporalError, TemporalResult,
};

/// A zone identified by a region id, e.g. `Europe/Paris` or `UTC`.
///
/// The rules are captured when the region is resolved, so a resolved
/// region is unaffected by later changes to its provider.
#[derive(Debug, Clone)]
pub struct ZoneRegion {
    id: String,
    rules: ZoneRules,
}

impl ZoneRegion {
    /// Resolves `id` against `provider`.
    pub fn of_with_provider(id: &str, provider: &dyn TimeZoneProvider) -> TemporalResult<Self> {
        if !is_valid_region_id(id) {
            return Err(TemporalError::format().with_message(format!(
                "Invalid ID for region-based ZoneId, invalid format: {id}"
            )));
        }
        let rules = provider.get_zone_rules(id).map_err(|err| {
            #[cfg(feature = "log")]
            log::debug!("zone rules lookup for {id} failed: {err}");
            TemporalError::from(err)
        })?;
        Ok(Self {
            id: id.into(),
            rules: ZoneRules::Transitions(rules),
        })
    }

    /// Creates a region with fixed rules, used for the `UTC`, `GMT` and `UT` prefixes.
    pub(crate) fn fixed(id: String, offset: ZoneOffset) -> Self {
        Self {
            id,
            rules: offset.rules(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> &ZoneRules {
        &self.rules
    }
}

impl PartialEq for ZoneRegion {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ZoneRegion {}

impl Hash for ZoneRegion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
