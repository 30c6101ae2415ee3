//! Database schema initialization.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Safe to call on every start; tables are only created when missing.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS customers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL,
            middle_name TEXT,
            last_name   TEXT NOT NULL,
            phone       TEXT,
            notes       TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS reservations (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_id INTEGER NOT NULL REFERENCES customers(id),
            start_at    TEXT NOT NULL,       -- YYYY-MM-DD HH:MM:SS
            num_guests  INTEGER NOT NULL,
            notes       TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_reservations_customer
            ON reservations(customer_id);
        ",
    )?;
    Ok(())
}
