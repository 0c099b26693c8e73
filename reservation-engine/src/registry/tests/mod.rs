use super::*;
use crate::core::FixedClock;
use chrono::{Duration, NaiveDate};
use shared::ErrorCode;

/// 2024-05-01 at the given wall-clock time
fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn test_config() -> Config {
    Config::from_lookup(|_| None)
}

/// Registry whose clock reads 10:00 until moved through the returned handle
fn create_test_registry() -> (Registry, FixedClock) {
    let clock = FixedClock::new(at(10, 0));
    let registry = Registry::with_clock(test_config(), clock.clone());
    (registry, clock)
}

/// Registry with T1 (4 seats), T2 (2 seats), T3 (6 seats)
fn create_floor() -> (Registry, FixedClock) {
    let (mut registry, clock) = create_test_registry();
    registry.add_table("T1", 4).unwrap();
    registry.add_table("T2", 2).unwrap();
    registry.add_table("T3", 6).unwrap();
    (registry, clock)
}

fn assert_consistent(registry: &Registry) {
    if let Err(e) = registry.check_consistency() {
        panic!("registry inconsistent: {}", e);
    }
}

mod test_consistency;
