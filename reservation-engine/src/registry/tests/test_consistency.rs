use super::*;

fn assert_internal_error(registry: &Registry, table: &str) {
    let err = registry.check_consistency().unwrap_err();
    assert_eq!(err.code, ErrorCode::InternalError);
    assert_eq!(err.detail_str("table"), Some(table));
}

fn booking_on(table_name: &str) -> Booking {
    Booking {
        client_name: "Alice".to_string(),
        phone: "555".to_string(),
        start_time: at(10, 0),
        end_time: at(11, 0),
        table_name: table_name.to_string(),
    }
}

#[test]
fn test_consistent_floor_passes() {
    let (mut registry, _clock) = create_floor();
    registry.take_table("T2").unwrap();
    assert!(registry.check_consistency().is_ok());
}

#[test]
fn test_occupied_table_without_booking() {
    let (mut registry, _clock) = create_floor();
    registry.tables[1].take();

    assert_internal_error(&registry, "T2");
}

#[test]
fn test_booking_on_free_table() {
    let (mut registry, _clock) = create_floor();
    registry.bookings.push(booking_on("T3"));

    assert_internal_error(&registry, "T3");
}

#[test]
fn test_two_bookings_on_one_table() {
    let (mut registry, _clock) = create_floor();
    registry.take_table("T1").unwrap();
    registry.bookings.push(booking_on("T1"));

    assert_internal_error(&registry, "T1");
}

#[test]
fn test_duplicate_table_name() {
    let (mut registry, _clock) = create_floor();
    registry.tables.push(Table::new("T1", 2));

    assert_internal_error(&registry, "T1");
}

#[test]
fn test_booking_for_missing_table() {
    let (mut registry, _clock) = create_floor();
    registry.bookings.push(booking_on("Patio"));

    assert_internal_error(&registry, "Patio");
}
