//! A provider over the IANA time zone database bundled by `jiff-tzdb`.
//!
//! The TZif data is decoded with the `tzif` crate into [`TransitionRules`],
//! the POSIX TZ string footer becomes the rules' [`RecurringRule`].

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use std::sync::RwLock;

use combine::Parser;
use tzif::data::{
    posix::{PosixTzString, TransitionDate as PosixTransitionDate, TransitionDay as PosixTransitionDay},
    tzif::TzifData,
};

use crate::{
    posix::{DaylightRule, RecurringRule, TransitionDate, TransitionDay},
    provider::{TimeZoneProvider, TimeZoneProviderResult, UtcOffsetSeconds},
    rules::{Transition, TransitionRules},
    TimeZoneProviderError,
};

/// A zone rules provider backed by the bundled tzdb, decoded rules are cached.
#[derive(Debug, Default)]
pub struct TzdbProvider {
    cache: RwLock<BTreeMap<String, Arc<TransitionRules>>>,
}

impl TzdbProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn cached(&self, identifier: &str) -> Option<Arc<TransitionRules>> {
        self.cache.read().ok()?.get(identifier).cloned()
    }
}

impl TimeZoneProvider for TzdbProvider {
    fn get_zone_rules(&self, identifier: &str) -> TimeZoneProviderResult<Arc<TransitionRules>> {
        if let Some(rules) = self.cached(identifier) {
            return Ok(rules);
        }
        let Some((canonical_name, data)) = jiff_tzdb::get(identifier) else {
            return Err(TimeZoneProviderError::NotFound(identifier.to_string()));
        };
        let rules = Arc::new(rules_from_tzif_bytes(data)?);
        #[cfg(feature = "log")]
        log::trace!("decoded zone rules for {identifier} ({canonical_name})");
        #[cfg(not(feature = "log"))]
        let _ = canonical_name;
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(identifier.to_string(), rules.clone());
        }
        Ok(rules)
    }

    fn available_identifiers(&self) -> Vec<String> {
        jiff_tzdb::available().map(String::from).collect()
    }
}

/// Decodes TZif bytes into [`TransitionRules`].
pub fn rules_from_tzif_bytes(data: &[u8]) -> TimeZoneProviderResult<TransitionRules> {
    let Ok((tzif, _)) = tzif::parse::tzif::tzif().parse(data) else {
        return Err(TimeZoneProviderError::Malformed("Illformed Tzif data."));
    };
    rules_from_tzif(&tzif)
}

fn rules_from_tzif(tzif: &TzifData) -> TimeZoneProviderResult<TransitionRules> {
    let block = tzif
        .data_block2
        .as_ref()
        .ok_or(TimeZoneProviderError::Malformed("missing v2 data block"))?;

    let initial = block
        .local_time_type_records
        .first()
        .map(UtcOffsetSeconds::from)
        .ok_or(TimeZoneProviderError::Malformed("missing local time types"))?;

    let transitions = block
        .transition_times
        .iter()
        .zip(block.transition_types.iter())
        .map(|(time, idx)| {
            block
                .local_time_type_records
                .get(*idx)
                .map(|record| Transition {
                    epoch_seconds: time.0,
                    offset_after: UtcOffsetSeconds::from(record),
                })
                .ok_or(TimeZoneProviderError::Malformed(
                    "transition type index out of range",
                ))
        })
        .collect::<TimeZoneProviderResult<Vec<_>>>()?;

    let recurring = tzif.footer.as_ref().map(recurring_rule).transpose()?;

    TransitionRules::try_new(initial, transitions, recurring)
}

// The POSIX tz string stores offsets as negative offsets;
// i.e. "seconds that must be added to reach UTC"
fn posix_offset(seconds: i64) -> UtcOffsetSeconds {
    UtcOffsetSeconds(-seconds)
}

fn recurring_rule(posix: &PosixTzString) -> TimeZoneProviderResult<RecurringRule> {
    let standard_offset = posix_offset(posix.std_info.offset.0);
    let Some(dst) = &posix.dst_info else {
        return Ok(RecurringRule::fixed(standard_offset));
    };
    let daylight = DaylightRule {
        offset: posix_offset(dst.variant_info.offset.0),
        start: transition_date(&dst.start_date)?,
        end: transition_date(&dst.end_date)?,
    };
    Ok(RecurringRule::with_daylight(standard_offset, daylight))
}

fn transition_date(date: &PosixTransitionDate) -> TimeZoneProviderResult<TransitionDate> {
    const MWD_RANGE: TimeZoneProviderError = TimeZoneProviderError::Malformed("invalid Mm.w.d rule");
    let day = match date.day {
        PosixTransitionDay::NoLeap(day) => TransitionDay::NoLeap(day),
        PosixTransitionDay::WithLeap(day) => TransitionDay::WithLeap(day),
        PosixTransitionDay::Mwd(month, week, day) => TransitionDay::Mwd {
            month: u8::try_from(month).map_err(|_| MWD_RANGE)?,
            week: u8::try_from(week).map_err(|_| MWD_RANGE)?,
            day: u8::try_from(day).map_err(|_| MWD_RANGE)?,
        },
    };
    Ok(TransitionDate {
        day,
        time: date.time.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_york_rules() {
        let provider = TzdbProvider::new();
        let rules = provider.get_zone_rules("America/New_York").unwrap();
        assert!(!rules.is_fixed_offset());
        // 2017-01-01T00:00:00Z
        assert_eq!(rules.offset_at(1_483_228_800), UtcOffsetSeconds(-5 * 3600));
        // 2017-07-01T00:00:00Z
        assert_eq!(rules.offset_at(1_498_867_200), UtcOffsetSeconds(-4 * 3600));
        // 2087-07-01T00:00:00Z, resolved by the POSIX footer.
        assert_eq!(rules.offset_at(3_707_856_000), UtcOffsetSeconds(-4 * 3600));
        // Served from the cache the second time.
        let again = provider.get_zone_rules("America/New_York").unwrap();
        assert!(Arc::ptr_eq(&rules, &again));
    }

    #[test]
    fn utc_is_fixed() {
        let rules = TzdbProvider::new().get_zone_rules("UTC").unwrap();
        assert!(rules.is_fixed_offset());
        assert_eq!(rules.offset_at(0), UtcOffsetSeconds(0));
    }

    #[test]
    fn unknown_identifier() {
        let provider = TzdbProvider::new();
        assert!(!provider.check_identifier("Mars/Olympus_Mons"));
        assert!(provider
            .available_identifiers()
            .iter()
            .any(|id| id == "Europe/Paris"));
    }
}
