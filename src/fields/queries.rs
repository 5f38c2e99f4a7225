//! Standard queries, usable with [`TemporalAccessor::query`].

use crate::{
    builtins::{PlainDate, ZoneId, ZoneOffset},
    fields::{ChronoField, TemporalAccessor, Unit},
    TemporalResult,
};

/// Queries the zone of a temporal, where an offset does not count as a zone.
pub fn zone_id(temporal: &dyn TemporalAccessor) -> TemporalResult<Option<ZoneId>> {
    Ok(temporal
        .zone()
        .filter(|zone| !matches!(zone, ZoneId::Offset(_))))
}

/// Queries the zone of a temporal, falling back to its offset.
pub fn zone(temporal: &dyn TemporalAccessor) -> TemporalResult<Option<ZoneId>> {
    if let Some(zone) = temporal.zone() {
        return Ok(Some(zone));
    }
    Ok(offset(temporal)?.map(ZoneId::Offset))
}

/// Queries the offset of a temporal through its `OffsetSeconds` field.
pub fn offset(temporal: &dyn TemporalAccessor) -> TemporalResult<Option<ZoneOffset>> {
    let field = ChronoField::OffsetSeconds.into();
    if !temporal.is_supported(field) {
        return Ok(None);
    }
    ZoneOffset::of_total_seconds(temporal.get(field)?).map(Some)
}

/// Queries the smallest unit a temporal is precise to.
pub fn precision(temporal: &dyn TemporalAccessor) -> TemporalResult<Option<Unit>> {
    Ok(temporal.precision())
}

/// Queries the date of a temporal through its `EpochDay` field.
pub fn local_date(temporal: &dyn TemporalAccessor) -> TemporalResult<Option<PlainDate>> {
    let field = ChronoField::EpochDay.into();
    if !temporal.is_supported(field) {
        return Ok(None);
    }
    PlainDate::of_epoch_day(temporal.get_long(field)?).map(Some)
}
