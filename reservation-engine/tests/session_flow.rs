//! 完整会话流程 - 每一步之后检查占用不变量
//!
//! 模拟一个晚市: 建桌、预订、冲突、直接占桌、取消、过期、删桌

use chrono::{Duration, NaiveDate, NaiveDateTime};
use reservation_engine::{Config, ErrorCode, FixedClock, Registry};
use shared::OccupancySummary;

fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn check(registry: &Registry) {
    registry
        .check_consistency()
        .unwrap_or_else(|e| panic!("invariant broken: {}", e));
}

#[test]
fn test_evening_service() {
    let config = Config::from_lookup(|key| (key == "LOG_LEVEL").then(|| "debug".to_string()));
    reservation_engine::init_logger_from_config(&config);

    let clock = FixedClock::new(at(17, 0));
    let mut registry = Registry::with_clock(config, clock.clone());

    for (name, seats) in [("Window", 2), ("Patio", 6)] {
        registry.add_table(name, seats).unwrap();
        check(&registry);
    }
    // Booth gets the default four seats
    registry.add_table_with_default_seats("Booth").unwrap();
    check(&registry);
    assert_eq!(
        registry.add_table("Booth", 2).unwrap_err().code,
        ErrorCode::TableNameExists
    );

    registry
        .reserve_for_period("Alice", "555-0101", at(18, 0), 2, "Booth")
        .unwrap();
    check(&registry);

    let err = registry
        .create_reservation("Bob", "555-0102", at(18, 30), at(19, 30), "Booth")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::TableOccupied);
    check(&registry);

    registry
        .create_reservation("Bob", "555-0102", at(18, 30), at(19, 30), "Patio")
        .unwrap();
    registry.take_table("Window").unwrap();
    check(&registry);

    assert_eq!(
        registry.occupancy_summary(),
        OccupancySummary {
            free_tables: 0,
            free_seats: 0,
            occupied_tables: 3,
        }
    );
    assert!(registry.available_tables().is_empty());

    // Bob calls to cancel
    let cancelled = registry.cancel_booking("Patio").unwrap();
    assert_eq!(cancelled.client_name, "Bob");
    check(&registry);

    // Walk-in ends at 18:00, Alice at 20:00
    clock.set(at(18, 1));
    let expired = registry.release_expired_bookings();
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].table_name, "Window");
    assert!(registry.release_expired_bookings().is_empty());
    check(&registry);

    let status = registry.current_status();
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].client_name, "Alice");
    assert_eq!(status[0].table_name, "Booth");

    registry.delete_table("Booth").unwrap();
    check(&registry);
    assert!(registry.bookings().is_empty());

    clock.advance(Duration::hours(3)).unwrap();
    assert!(registry.release_expired_bookings().is_empty());
    assert_eq!(
        registry.occupancy_summary(),
        OccupancySummary {
            free_tables: 2,
            free_seats: 8,
            occupied_tables: 0,
        }
    );
}
