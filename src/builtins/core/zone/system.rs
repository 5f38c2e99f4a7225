//! This module implements `SystemDefaultZone`.

use crate::{
    builtins::core::zone::{ZoneContext, ZoneId, ZoneRules},
    TemporalError, TemporalResult,
};

/// The host's default zone.
///
/// The zone is asked from the host of its [`ZoneContext`] on every call and
/// is never cached, so a change of the host zone is observed by existing
/// values.
#[derive(Debug, Clone)]
pub struct SystemDefaultZone {
    context: ZoneContext,
}

impl SystemDefaultZone {
    /// The id of the system default zone.
    pub const ID: &'static str = "SYSTEM";

    #[must_use]
    pub fn new(context: ZoneContext) -> Self {
        Self { context }
    }

    /// Resolves the zone the host currently reports.
    pub fn resolve(&self) -> TemporalResult<ZoneId> {
        match self.context.host().get_host_time_zone(&self.context)? {
            ZoneId::System(_) => {
                #[cfg(feature = "log")]
                log::warn!("host zone resolved to the system default zone");
                Err(TemporalError::illegal_state()
                    .with_message("The host zone cannot be the system default zone"))
            }
            zone => Ok(zone),
        }
    }

    /// Returns the rules of the zone the host currently reports.
    pub fn rules(&self) -> TemporalResult<ZoneRules> {
        self.resolve()?.rules()
    }

    #[must_use]
    pub fn context(&self) -> &ZoneContext {
        &self.context
    }
}
