//! The transition based zone rules resolved by a provider.

use alloc::vec::Vec;

use crate::{posix::RecurringRule, provider::UtcOffsetSeconds, TimeZoneProviderError};

/// A single offset change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The epoch seconds at which `offset_after` starts to apply.
    pub epoch_seconds: i64,
    pub offset_after: UtcOffsetSeconds,
}

/// The rules of a zone: an initial offset, a sorted list of explicit
/// transitions, and an optional recurring rule for instants after the
/// last explicit transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRules {
    initial: UtcOffsetSeconds,
    transitions: Vec<Transition>,
    recurring: Option<RecurringRule>,
}

impl TransitionRules {
    /// Creates rules that always resolve to `offset`.
    pub fn fixed(offset: UtcOffsetSeconds) -> Self {
        Self {
            initial: offset,
            transitions: Vec::new(),
            recurring: None,
        }
    }

    /// Creates new rules, the transitions must be strictly ascending.
    pub fn try_new(
        initial: UtcOffsetSeconds,
        transitions: Vec<Transition>,
        recurring: Option<RecurringRule>,
    ) -> Result<Self, TimeZoneProviderError> {
        if transitions
            .windows(2)
            .any(|pair| pair[0].epoch_seconds >= pair[1].epoch_seconds)
        {
            return Err(TimeZoneProviderError::Malformed(
                "transitions must be strictly ascending",
            ));
        }
        Ok(Self {
            initial,
            transitions,
            recurring,
        })
    }

    pub fn initial_offset(&self) -> UtcOffsetSeconds {
        self.initial
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn recurring_rule(&self) -> Option<&RecurringRule> {
        self.recurring.as_ref()
    }

    /// Returns whether these rules resolve to one offset for every instant.
    pub fn is_fixed_offset(&self) -> bool {
        self.transitions.is_empty() && self.recurring.is_none_or(|rule| rule.is_fixed())
    }

    /// Resolves the offset in effect at `epoch_seconds`.
    pub fn offset_at(&self, epoch_seconds: i64) -> UtcOffsetSeconds {
        let idx = self
            .transitions
            .partition_point(|transition| transition.epoch_seconds <= epoch_seconds);
        match (idx, self.transitions.last()) {
            (_, None) => self
                .recurring
                .map_or(self.initial, |rule| rule.offset_at(epoch_seconds)),
            (0, Some(_)) => self.initial,
            (idx, Some(last)) if idx == self.transitions.len() => self
                .recurring
                .map_or(last.offset_after, |rule| rule.offset_at(epoch_seconds)),
            (idx, Some(_)) => self.transitions[idx - 1].offset_after,
        }
    }
}
