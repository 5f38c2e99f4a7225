use alloc::{string::ToString, sync::Arc, vec};
use core::sync::atomic::{AtomicI32, Ordering};

use timezone_provider::{
    provider::{InMemoryProvider, NeverProvider, UtcOffsetSeconds},
    rules::{Transition, TransitionRules},
};

use super::{SystemDefaultZone, ZoneContext, ZoneId, ZoneOffset, ZoneRules};
use crate::{
    builtins::core::{FixedClock, PlainDate, Year},
    error::ErrorKind,
    fields::{ChronoField, TemporalAccessor},
    host::HostTimeZone,
    time::EpochNanoseconds,
};

/// A host whose zone is a fixed offset that can be changed at any time.
#[derive(Debug, Default)]
struct SwitchingHost {
    offset_seconds: AtomicI32,
}

impl HostTimeZone for SwitchingHost {
    fn get_host_time_zone(&self, _: &ZoneContext) -> crate::TemporalResult<ZoneId> {
        ZoneOffset::of_total_seconds(self.offset_seconds.load(Ordering::Relaxed)).map(ZoneId::from)
    }
}

/// A misbehaving host that reports the system default zone itself.
struct RecursiveHost;

impl HostTimeZone for RecursiveHost {
    fn get_host_time_zone(&self, context: &ZoneContext) -> crate::TemporalResult<ZoneId> {
        Ok(ZoneId::System(SystemDefaultZone::new(context.clone())))
    }
}

fn paris_rules() -> TransitionRules {
    // 2024-03-31T01:00:00Z and 2024-10-27T01:00:00Z
    TransitionRules::try_new(
        UtcOffsetSeconds(3_600),
        vec![
            Transition {
                epoch_seconds: 1_711_846_800,
                offset_after: UtcOffsetSeconds(7_200),
            },
            Transition {
                epoch_seconds: 1_729_990_800,
                offset_after: UtcOffsetSeconds(3_600),
            },
        ],
        None,
    )
    .unwrap()
}

fn context() -> ZoneContext {
    let provider = InMemoryProvider::new()
        .with_zone("Europe/Paris", paris_rules())
        .with_zone(
            "Etc/Fixed",
            TransitionRules::fixed(UtcOffsetSeconds(-5 * 3_600)),
        );
    ZoneContext::with_provider(Arc::new(provider))
}

#[test]
fn offsets() {
    let context = context();
    assert_eq!(
        ZoneId::of_with_context("Z", &context).unwrap(),
        ZoneId::Offset(ZoneOffset::UTC)
    );
    let offset = ZoneId::of_with_context("+01:30", &context).unwrap();
    assert_eq!(offset.id(), "+01:30");
    assert_eq!(ZoneId::of_with_context("-05", &context).unwrap().id(), "-05:00");
    assert_eq!(
        ZoneId::of_with_context("+0530", &context).unwrap().id(),
        "+05:30"
    );
    assert_eq!(
        ZoneId::of_with_context("+00:00", &context).unwrap().id(),
        "Z"
    );
    let err = ZoneId::of_with_context("+19:00", &context).unwrap_err();
    assert!(err.is_date_time_error());
}

#[test]
fn single_characters_are_rejected() {
    let context = context();
    for id in ["X", "+", "z"] {
        let err = ZoneId::of_with_context(id, &context).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "{id}");
    }
    assert_eq!(
        ZoneId::of_with_context("X", &context).unwrap_err().message(),
        "Invalid zone: X"
    );
}

#[test]
fn prefixed_regions() {
    let context = context();
    for prefix in ["UTC", "GMT", "UT"] {
        let zone = ZoneId::of_with_context(prefix, &context).unwrap();
        assert_eq!(zone.id(), prefix);
        assert!(matches!(zone, ZoneId::Region(_)));
        assert_eq!(zone.rules().unwrap(), ZoneRules::Fixed(ZoneOffset::UTC));
    }

    let gmt = ZoneId::of_with_context("GMT+1", &context).unwrap();
    assert_eq!(gmt.id(), "GMT+01:00");
    assert_eq!(
        gmt.rules().unwrap(),
        ZoneRules::Fixed(ZoneOffset::of_hours(1).unwrap())
    );
    assert_eq!(ZoneId::of_with_context("UT+0", &context).unwrap().id(), "UT");
    assert_eq!(
        ZoneId::of_with_context("UTC-00:00", &context).unwrap().id(),
        "UTC"
    );
    assert_eq!(
        ZoneId::of_with_context("UT-0330", &context).unwrap().id(),
        "UT-03:30"
    );
    assert!(ZoneId::of_with_context("GMT+99", &context).is_err());
}

#[test]
fn of_offset() {
    let offset = ZoneOffset::of_hours_minutes(2, 30).unwrap();
    assert_eq!(ZoneId::of_offset("", offset).unwrap(), ZoneId::Offset(offset));
    assert_eq!(ZoneId::of_offset("UTC", offset).unwrap().id(), "UTC+02:30");
    assert_eq!(ZoneId::of_offset("GMT", ZoneOffset::UTC).unwrap().id(), "GMT");

    let err = ZoneId::of_offset("BST", offset).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalArgument);
    assert_eq!(err.message(), "Invalid prefix, must be GMT, UTC or UT: BST");
}

#[test]
fn regions() {
    let context = context();
    let paris = ZoneId::of_with_context("Europe/Paris", &context).unwrap();
    assert_eq!(paris.to_string(), "Europe/Paris");

    let rules = paris.rules().unwrap();
    assert!(!rules.is_fixed_offset());
    assert_eq!(rules.transitions().len(), 2);
    let winter = EpochNanoseconds::from_seconds(1_705_276_800);
    let summer = EpochNanoseconds::from_seconds(1_721_001_600);
    assert_eq!(rules.offset(winter).unwrap(), ZoneOffset::of_hours(1).unwrap());
    assert_eq!(rules.offset(summer).unwrap(), ZoneOffset::of_hours(2).unwrap());

    let err = ZoneId::of_with_context("America/Nowhere", &context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ZoneRulesNotFound);
    assert_eq!(err.message(), "Unknown time-zone ID: America/Nowhere");

    for id in ["!Bad", "9Lives", "Europe Paris"] {
        let err = ZoneId::of_with_context(id, &context).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "{id}");
    }
    assert_eq!(
        ZoneId::of_with_context("!Bad", &context).unwrap_err().message(),
        "Invalid ID for region-based ZoneId, invalid format: !Bad"
    );
}

#[test]
fn resolved_regions_keep_their_rules() {
    let mut provider = InMemoryProvider::new().with_zone("Europe/Paris", paris_rules());
    let before = ZoneId::of_with_context(
        "Europe/Paris",
        &ZoneContext::with_provider(Arc::new(provider.clone())),
    )
    .unwrap();
    provider.insert("Europe/Paris", TransitionRules::fixed(UtcOffsetSeconds(0)));
    let after = ZoneId::of_with_context(
        "Europe/Paris",
        &ZoneContext::with_provider(Arc::new(provider)),
    )
    .unwrap();
    // Equality is by id only.
    assert_eq!(before, after);
    assert!(!before.rules().unwrap().is_fixed_offset());
    assert!(after.rules().unwrap().is_fixed_offset());
}

#[test]
fn normalized() {
    let context = context();
    let fixed = ZoneId::of_with_context("Etc/Fixed", &context).unwrap();
    assert_eq!(
        fixed.normalized().unwrap(),
        ZoneId::Offset(ZoneOffset::of_hours(-5).unwrap())
    );
    let gmt = ZoneId::of_with_context("GMT", &context).unwrap();
    assert_eq!(gmt.normalized().unwrap(), ZoneId::Offset(ZoneOffset::UTC));
    let paris = ZoneId::of_with_context("Europe/Paris", &context).unwrap();
    assert_eq!(paris.normalized().unwrap(), paris);
}

#[test]
fn system_zone_follows_the_host() {
    let host = Arc::new(SwitchingHost::default());
    let context = ZoneContext::new(Arc::new(NeverProvider), host.clone());
    let system = ZoneId::of_with_context("SYSTEM", &context).unwrap();
    assert_eq!(system.id(), "SYSTEM");
    assert_eq!(system.rules().unwrap(), ZoneRules::Fixed(ZoneOffset::UTC));

    host.offset_seconds.store(3_600, Ordering::Relaxed);
    assert_eq!(
        system.rules().unwrap(),
        ZoneRules::Fixed(ZoneOffset::of_hours(1).unwrap())
    );

    // 2019-12-31T23:30:00Z is already 2020 one hour east.
    let clock = FixedClock::new(EpochNanoseconds::from_seconds(1_577_835_000), system.clone());
    assert_eq!(Year::now_with_clock(&clock).unwrap().value(), 2020);
    host.offset_seconds.store(0, Ordering::Relaxed);
    assert_eq!(
        PlainDate::now_with_clock(&clock).unwrap(),
        PlainDate::of(2019, 12, 31).unwrap()
    );
}

#[test]
fn recursive_system_zone() {
    let context = ZoneContext::new(Arc::new(NeverProvider), Arc::new(RecursiveHost));
    let system = ZoneId::of_with_context("SYSTEM", &context).unwrap();
    let err = system.rules().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);
}

#[test]
fn from_temporal() {
    let offset = ZoneOffset::of_hours(-3).unwrap();
    assert_eq!(ZoneId::from_temporal(&offset).unwrap(), ZoneId::Offset(offset));
    assert_eq!(offset.get(ChronoField::OffsetSeconds.into()).unwrap(), -10_800);

    let year = Year::of(2020).unwrap();
    let err = ZoneId::from_temporal(&year).unwrap_err();
    assert!(err.is_date_time_error());
    assert!(err
        .message()
        .starts_with("Unable to obtain ZoneId from TemporalAccessor: Year(2020), type "));
}

#[test]
fn offset_ordering() {
    let east = ZoneOffset::of_hours(2).unwrap();
    let west = ZoneOffset::of_hours(-2).unwrap();
    assert!(east < ZoneOffset::UTC);
    assert!(ZoneOffset::UTC < west);
    assert!(ZoneOffset::MAX < ZoneOffset::MIN);
    assert_eq!(
        ZoneOffset::of_hours_minutes_seconds(18, 0, 1).unwrap_err().message(),
        "Zone offset not in valid range: -18:00 to +18:00"
    );
}
