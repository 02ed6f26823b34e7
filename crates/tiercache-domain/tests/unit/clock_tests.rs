//! Clock Tests

use chrono::{TimeDelta, TimeZone, Utc};
use std::time::Duration;
use tiercache_domain::ports::{Clock, ManualClock, SystemClock};

#[test]
fn test_manual_clock_advances() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let clock = ManualClock::new(start);

    assert_eq!(clock.now(), start);
    clock.advance(Duration::from_secs(90));
    assert_eq!(clock.now(), start + TimeDelta::seconds(90));
}

#[test]
fn test_manual_clock_can_go_back() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let clock = ManualClock::new(start);

    clock.set(start - TimeDelta::hours(1));
    assert!(clock.now() < start);
}

#[test]
fn test_system_clock_is_monotonic_enough() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}
