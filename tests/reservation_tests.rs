mod common;
use common::{memory_pool, seed_customer};
use lunchly::db::models::Reservation;
use lunchly::db::queries::{reservations_for_customer, save_reservation};
use lunchly::utils::time::parse_start_at;

#[test]
fn notes_normalize_to_empty_string() {
    let start = parse_start_at("2026-08-07T19:30").unwrap();
    let r = Reservation::new(1, start, 2, None);
    assert_eq!(r.notes, "");

    let r = Reservation::new(1, start, 2, Some("birthday".into()));
    assert_eq!(r.notes, "birthday");
}

#[test]
fn save_inserts_then_updates_in_place() {
    let pool = memory_pool();
    let customer_id = seed_customer(&pool, "Jane", None, "Doe");

    let start = parse_start_at("2026-08-07T19:30").unwrap();
    let mut reservation = Reservation::new(customer_id, start, 2, None);
    pool.with_conn(|conn| save_reservation(conn, &mut reservation))
        .unwrap();

    let id = reservation.id.expect("id assigned on insert");
    assert!(id > 0);

    // Saving again with the id set must update, not insert.
    reservation.num_guests = 6;
    pool.with_conn(|conn| save_reservation(conn, &mut reservation))
        .unwrap();

    let all = pool
        .with_conn(|conn| reservations_for_customer(conn, customer_id))
        .unwrap();
    assert_eq!(all.len(), 1, "update must not create a duplicate row");
    assert_eq!(all[0].num_guests, 6);
}

#[test]
fn lookup_by_customer_orders_by_start_time() {
    let pool = memory_pool();
    let customer_id = seed_customer(&pool, "Jane", None, "Doe");
    let other_id = seed_customer(&pool, "John", None, "Smith");

    for (when, guests) in [
        ("2026-08-09T20:00", 4),
        ("2026-08-07T19:30", 2),
        ("2026-08-08T18:00", 3),
    ] {
        let start = parse_start_at(when).unwrap();
        let mut r = Reservation::new(customer_id, start, guests, None);
        pool.with_conn(|conn| save_reservation(conn, &mut r)).unwrap();
    }

    // A reservation for someone else must not leak into the result.
    let start = parse_start_at("2026-08-07T12:00").unwrap();
    let mut r = Reservation::new(other_id, start, 1, None);
    pool.with_conn(|conn| save_reservation(conn, &mut r)).unwrap();

    let found = pool
        .with_conn(|conn| reservations_for_customer(conn, customer_id))
        .unwrap();
    assert_eq!(found.len(), 3);
    let guests: Vec<i64> = found.iter().map(|r| r.num_guests).collect();
    assert_eq!(guests, vec![2, 3, 4], "earliest reservation first");
}

#[test]
fn lookup_for_customer_without_reservations_is_empty() {
    let pool = memory_pool();
    let customer_id = seed_customer(&pool, "Jane", None, "Doe");

    let found = pool
        .with_conn(|conn| reservations_for_customer(conn, customer_id))
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn start_time_round_trips_through_storage() {
    let pool = memory_pool();
    let customer_id = seed_customer(&pool, "Jane", None, "Doe");

    let start = parse_start_at("2026-12-31T23:45").unwrap();
    let mut r = Reservation::new(customer_id, start, 8, Some("new year".into()));
    pool.with_conn(|conn| save_reservation(conn, &mut r)).unwrap();

    let found = pool
        .with_conn(|conn| reservations_for_customer(conn, customer_id))
        .unwrap();
    assert_eq!(found[0].start_at, start);
    assert_eq!(found[0].notes, "new year");
}
