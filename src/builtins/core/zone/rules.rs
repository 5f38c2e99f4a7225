//! This module implements `ZoneRules`.

use alloc::sync::Arc;

use timezone_provider::{
    epoch_nanoseconds::EpochNanoseconds,
    rules::{Transition, TransitionRules},
};

use crate::{builtins::core::zone::ZoneOffset, utils, TemporalResult};

/// The mapping from an instant to the offset in effect at that instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneRules {
    /// Rules that always resolve to one offset.
    Fixed(ZoneOffset),
    /// Rules resolved by a provider, shared with the provider's cache.
    Transitions(Arc<TransitionRules>),
}

impl ZoneRules {
    /// Returns the offset in effect at `instant`.
    pub fn offset(&self, instant: EpochNanoseconds) -> TemporalResult<ZoneOffset> {
        match self {
            Self::Fixed(offset) => Ok(*offset),
            Self::Transitions(rules) => {
                instant.check_validity()?;
                let offset = rules.offset_at(instant.as_epoch_seconds());
                ZoneOffset::of_total_seconds(utils::to_i32(offset.0)?)
            }
        }
    }

    /// Returns whether the offset never changes.
    #[must_use]
    pub fn is_fixed_offset(&self) -> bool {
        match self {
            Self::Fixed(_) => true,
            Self::Transitions(rules) => rules.is_fixed_offset(),
        }
    }

    /// Returns the offset if it never changes.
    pub fn fixed_offset(&self) -> TemporalResult<Option<ZoneOffset>> {
        match self {
            Self::Fixed(offset) => Ok(Some(*offset)),
            Self::Transitions(rules) if rules.is_fixed_offset() => {
                ZoneOffset::of_total_seconds(utils::to_i32(rules.initial_offset().0)?).map(Some)
            }
            Self::Transitions(_) => Ok(None),
        }
    }

    /// Returns the explicit transitions, empty for fixed rules.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        match self {
            Self::Fixed(_) => &[],
            Self::Transitions(rules) => rules.transitions(),
        }
    }
}
