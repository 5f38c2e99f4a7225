use crate::builtins::core::zone::{ZoneContext, ZoneId};
use crate::host::{HostClock, HostTimeZone};
use crate::time::EpochNanoseconds;
use crate::{TemporalError, TemporalResult};

use web_time::{SystemTime, UNIX_EPOCH};

/// The host system, backed by [`web_time::SystemTime`] for the clock and
/// [`iana_time_zone`] for the default zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostClock for SystemHost {
    fn get_host_epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

impl HostTimeZone for SystemHost {
    fn get_host_time_zone(&self, context: &ZoneContext) -> TemporalResult<ZoneId> {
        get_system_timezone(context)
    }
}

#[inline]
pub(crate) fn get_system_timezone(context: &ZoneContext) -> TemporalResult<ZoneId> {
    iana_time_zone::get_timezone()
        .map(|s| ZoneId::of_with_context(&s, context))
        .map_err(|_| TemporalError::general("Error fetching system time zone"))?
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> TemporalResult<EpochNanoseconds> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TemporalError::general("Error fetching system time"))?;
    let nanoseconds = i128::try_from(duration.as_nanos())
        .map_err(|_| TemporalError::range().with_message("System time is out of range"))?;
    Ok(EpochNanoseconds::from(nanoseconds))
}
