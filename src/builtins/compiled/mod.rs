//! Entry points backed by the bundled zone database.
//!
//! These mirror the `_with_context`/`_with_clock` methods of the core
//! types, using [`TZ_PROVIDER`] and, with the `sys` feature, the host.

use alloc::sync::Arc;
use core::str::FromStr;
use std::sync::LazyLock;

use timezone_provider::{provider::TimeZoneProvider, tzif::TzdbProvider};

use crate::{
    builtins::core::{ZoneContext, ZoneId},
    host::HostTimeZone,
    TemporalError, TemporalResult,
};

/// The shared provider over the bundled IANA database.
pub static TZ_PROVIDER: LazyLock<Arc<TzdbProvider>> =
    LazyLock::new(|| Arc::new(TzdbProvider::new()));

#[cfg(feature = "sys")]
mod now;

impl Default for ZoneContext {
    /// The bundled database, with the host's zone under `sys` and UTC otherwise.
    fn default() -> Self {
        let provider: Arc<dyn TimeZoneProvider> = TZ_PROVIDER.clone();
        #[cfg(feature = "sys")]
        let host: Arc<dyn HostTimeZone> = Arc::new(crate::sys::SystemHost);
        #[cfg(not(feature = "sys"))]
        let host: Arc<dyn HostTimeZone> = Arc::new(());
        Self::new(provider, host)
    }
}

impl ZoneId {
    /// Parses `zone_id` with the default [`ZoneContext`].
    ///
    /// ```rust
    /// use isotemporal::ZoneId;
    ///
    /// assert_eq!(ZoneId::of("Z").unwrap().id(), "Z");
    /// assert_eq!(ZoneId::of("GMT+1").unwrap().id(), "GMT+01:00");
    /// assert_eq!(ZoneId::of("Europe/Paris").unwrap().id(), "Europe/Paris");
    /// ```
    pub fn of(zone_id: &str) -> TemporalResult<Self> {
        Self::of_with_context(zone_id, &ZoneContext::default())
    }
}

impl FromStr for ZoneId {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}
