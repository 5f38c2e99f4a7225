//! An ordered map over a fixed key space, keyed by name.
//!
//! `EnumMap` accumulates field values while a formatter parses text. Removal
//! does not delete a slot, it clears the slot's value. The slots of removed
//! keys stay until [`EnumMap::retain_all`] rebuilds the map, so a long-lived
//! map that sees many removals should be rebuilt periodically.
//!
//! Slots are kept in a `BTreeMap` keyed by name, so iteration is in name
//! order and `put`, `get` and `contains_key` cost `O(log n)`. The key space
//! is the set of fields a single formatter touches, which stays small.

use alloc::collections::BTreeMap;

use crate::fields::Field;

/// A key of an [`EnumMap`], identified by its name.
pub trait EnumKey: Copy {
    fn name(&self) -> &'static str;
}

impl EnumKey for Field {
    fn name(&self) -> &'static str {
        Field::name(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Slot<K, V> {
    key: K,
    value: Option<V>,
}

/// A map from [`EnumKey`]s to values, ordered by key name.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMap<K: EnumKey, V> {
    slots: BTreeMap<&'static str, Slot<K, V>>,
}

impl<K: EnumKey, V> Default for EnumMap<K, V> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<K: EnumKey, V> EnumMap<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.slots.get_mut(key.name()) {
            Some(slot) => slot.value.replace(value),
            None => {
                self.slots.insert(
                    key.name(),
                    Slot {
                        key,
                        value: Some(value),
                    },
                );
                None
            }
        }
    }

    /// Sets `key` to `value`, returning the map for chaining.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.put(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: K) -> Option<&V> {
        self.slots
            .get(key.name())
            .and_then(|slot| slot.value.as_ref())
    }

    #[must_use]
    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Clears the value of `key`, keeping its slot.
    pub fn remove(&mut self, key: K) -> Option<V> {
        self.slots
            .get_mut(key.name())
            .and_then(|slot| slot.value.take())
    }

    /// Rebuilds the map with only the live entries whose key is in `keys`.
    pub fn retain_all(&mut self, keys: &[K]) {
        let slots = core::mem::take(&mut self.slots);
        self.slots = slots
            .into_iter()
            .filter(|(name, slot)| {
                slot.value.is_some() && keys.iter().any(|key| key.name() == *name)
            })
            .collect();
    }

    /// Copies every live entry of `other` into this map, `other` wins.
    pub fn put_all(&mut self, other: &Self)
    where
        V: Clone,
    {
        for (key, value) in other.iter() {
            self.put(key, value.clone());
        }
    }

    /// Returns the live keys, ordered by name.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Returns the live entries, ordered by key name.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.slots
            .values()
            .filter_map(|slot| slot.value.as_ref().map(|value| (slot.key, value)))
    }

    /// Returns the number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots, including those of removed keys.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
