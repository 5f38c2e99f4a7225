//! The `TimeZoneProvider` trait.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};

use crate::{rules::TransitionRules, TimeZoneProviderError};

pub type TimeZoneProviderResult<T> = Result<T, TimeZoneProviderError>;

/// `UtcOffsetSeconds` represents the amount of seconds we need to add to the UTC to reach the local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffsetSeconds(pub i64);

#[cfg(feature = "tzif")]
use tzif::data::tzif::LocalTimeTypeRecord;

#[cfg(feature = "tzif")]
impl From<&LocalTimeTypeRecord> for UtcOffsetSeconds {
    fn from(value: &LocalTimeTypeRecord) -> Self {
        Self(value.utoff.0)
    }
}

/// The `TimeZoneProvider` trait provides methods required for a provider
/// to implement in order to source zone rules from that provider.
///
/// Providers are shared across threads and are never mutated by the
/// consumer; rules handed out are immutable snapshots.
pub trait TimeZoneProvider: Send + Sync {
    /// Returns whether the provider has rules for `identifier`.
    fn check_identifier(&self, identifier: &str) -> bool {
        self.get_zone_rules(identifier).is_ok()
    }

    /// Returns the rules for the region `identifier`.
    fn get_zone_rules(&self, identifier: &str) -> TimeZoneProviderResult<Arc<TransitionRules>>;

    /// Returns the identifiers this provider knows about.
    fn available_identifiers(&self) -> Vec<String>;
}

/// A provider over rules registered at runtime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    zones: BTreeMap<String, Arc<TransitionRules>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rules` under `identifier`, replacing any previous rules.
    #[must_use]
    pub fn with_zone(mut self, identifier: &str, rules: TransitionRules) -> Self {
        self.insert(identifier, rules);
        self
    }

    pub fn insert(&mut self, identifier: &str, rules: TransitionRules) {
        self.zones.insert(identifier.to_string(), Arc::new(rules));
    }
}

impl TimeZoneProvider for InMemoryProvider {
    fn get_zone_rules(&self, identifier: &str) -> TimeZoneProviderResult<Arc<TransitionRules>> {
        self.zones
            .get(identifier)
            .cloned()
            .ok_or_else(|| TimeZoneProviderError::NotFound(identifier.to_string()))
    }

    fn available_identifiers(&self) -> Vec<String> {
        self.zones.keys().cloned().collect()
    }
}

/// A provider without any zone rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverProvider;

impl TimeZoneProvider for NeverProvider {
    fn get_zone_rules(&self, identifier: &str) -> TimeZoneProviderResult<Arc<TransitionRules>> {
        Err(TimeZoneProviderError::NotFound(identifier.to_string()))
    }

    fn available_identifiers(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_lookup() {
        let provider = InMemoryProvider::new()
            .with_zone("Etc/Test", TransitionRules::fixed(UtcOffsetSeconds(-3600)));
        assert!(provider.check_identifier("Etc/Test"));
        assert!(!provider.check_identifier("etc/test"));
        let rules = provider.get_zone_rules("Etc/Test").unwrap();
        assert_eq!(rules.offset_at(0), UtcOffsetSeconds(-3600));
        assert_eq!(provider.available_identifiers(), ["Etc/Test"]);
    }

    #[test]
    fn never_provider() {
        assert_eq!(
            NeverProvider.get_zone_rules("UTC"),
            Err(TimeZoneProviderError::NotFound("UTC".into()))
        );
        assert!(NeverProvider.available_identifiers().is_empty());
    }
}
