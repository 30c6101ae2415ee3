#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::Router;
use lunchly::db::initialize::init_db;
use lunchly::db::models::{Customer, Reservation};
use lunchly::db::pool::DbPool;
use lunchly::db::queries::{save_customer, save_reservation};
use lunchly::utils::time::parse_start_at;
use lunchly::web::router;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

pub fn lun() -> Command {
    cargo_bin_cmd!("lunchly")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lunchly.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh in-memory database with the schema applied
pub fn memory_pool() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    pool.with_conn(init_db).expect("init schema");
    pool
}

/// Insert a customer and return its assigned id
pub fn seed_customer(pool: &DbPool, first: &str, middle: Option<&str>, last: &str) -> i64 {
    let mut customer = Customer::new(
        None,
        first.to_string(),
        middle.map(str::to_string),
        last.to_string(),
        None,
        None,
    );
    pool.with_conn(|conn| save_customer(conn, &mut customer))
        .expect("save customer");
    customer.id.expect("id assigned on insert")
}

/// Insert a reservation for the given customer
pub fn seed_reservation(pool: &DbPool, customer_id: i64, start_at: &str, guests: i64) {
    let start = parse_start_at(start_at).expect("parse start time");
    let mut reservation = Reservation::new(customer_id, start, guests, None);
    pool.with_conn(|conn| save_reservation(conn, &mut reservation))
        .expect("save reservation");
}

/// Router over a fresh in-memory database; returns the pool too for seeding
pub fn test_app() -> (Router, Arc<DbPool>) {
    let pool = Arc::new(memory_pool());
    (router(pool.clone()), pool)
}
