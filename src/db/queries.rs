//! SQL operations for customers and reservations.
//! Free functions over a borrowed connection; every failure surfaces as an
//! AppError and no function retries or recovers locally.

use crate::db::models::{Customer, Reservation, map_customer_row, map_reservation_row};
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};

/// Find all customers, ordered by last then first name.
pub fn all_customers(conn: &Connection) -> AppResult<Vec<Customer>> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, middle_name, last_name, phone, notes
         FROM customers
         ORDER BY last_name, first_name",
    )?;

    let rows = stmt.query_map([], map_customer_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Get a customer by id.
pub fn get_customer(conn: &Connection, id: i64) -> AppResult<Customer> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, middle_name, last_name, phone, notes
         FROM customers
         WHERE id = ?1",
    )?;

    let customer = stmt.query_row([id], map_customer_row).optional()?;

    customer.ok_or_else(|| AppError::NotFound(format!("No such customer: {}", id)))
}

/// Search customers by any fragment of their name.
/// LIKE is case-insensitive under SQLite's default collation, so this is a
/// case-insensitive substring match across the three name fields. An empty
/// term matches everyone.
pub fn search_customers(conn: &Connection, name: &str) -> AppResult<Vec<Customer>> {
    let pattern = format!("%{}%", name);

    let mut stmt = conn.prepare(
        "SELECT id, first_name, middle_name, last_name, phone, notes
         FROM customers
         WHERE first_name LIKE ?1
            OR middle_name LIKE ?1
            OR last_name LIKE ?1",
    )?;

    let rows = stmt.query_map([&pattern], map_customer_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    if out.is_empty() {
        return Err(AppError::NotFound(format!("No such customer: {}", name)));
    }
    Ok(out)
}

/// Top 10 customers by reservation count. Ties order by customer id so the
/// leaderboard is reproducible. An empty reservations join is an operator
/// anomaly, not a normal empty result.
pub fn top_customers(conn: &Connection) -> AppResult<Vec<Customer>> {
    let mut stmt = conn.prepare(
        "SELECT customers.id, first_name, middle_name, last_name, phone, customers.notes,
                COUNT(reservations.id) AS reservation_count
         FROM customers
         JOIN reservations ON reservations.customer_id = customers.id
         GROUP BY customers.id
         ORDER BY reservation_count DESC, customers.id ASC
         LIMIT 10",
    )?;

    let rows = stmt.query_map([], map_customer_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    if out.is_empty() {
        return Err(AppError::EmptyLeaderboard);
    }
    Ok(out)
}

/// Save a customer: insert when it has no id yet, update otherwise.
/// The generated id is written back onto the value on insert.
pub fn save_customer(conn: &Connection, customer: &mut Customer) -> AppResult<()> {
    match customer.id {
        None => {
            conn.execute(
                "INSERT INTO customers (first_name, middle_name, last_name, phone, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    customer.first_name,
                    customer.middle_name,
                    customer.last_name,
                    customer.phone,
                    customer.notes,
                ],
            )?;
            customer.id = Some(conn.last_insert_rowid());
        }
        Some(id) => {
            conn.execute(
                "UPDATE customers
                 SET first_name = ?1, middle_name = ?2, last_name = ?3,
                     phone = ?4, notes = ?5
                 WHERE id = ?6",
                params![
                    customer.first_name,
                    customer.middle_name,
                    customer.last_name,
                    customer.phone,
                    customer.notes,
                    id,
                ],
            )?;
        }
    }
    Ok(())
}

/// All reservations for a customer, earliest first.
pub fn reservations_for_customer(conn: &Connection, customer_id: i64) -> AppResult<Vec<Reservation>> {
    let mut stmt = conn.prepare(
        "SELECT id, customer_id, start_at, num_guests, notes
         FROM reservations
         WHERE customer_id = ?1
         ORDER BY start_at ASC",
    )?;

    let rows = stmt.query_map([customer_id], map_reservation_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Save a reservation with the same insert/update split as customers.
pub fn save_reservation(conn: &Connection, reservation: &mut Reservation) -> AppResult<()> {
    match reservation.id {
        None => {
            conn.execute(
                "INSERT INTO reservations (customer_id, start_at, num_guests, notes)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    reservation.customer_id,
                    reservation.start_at_str(),
                    reservation.num_guests,
                    reservation.notes,
                ],
            )?;
            reservation.id = Some(conn.last_insert_rowid());
        }
        Some(id) => {
            conn.execute(
                "UPDATE reservations
                 SET customer_id = ?1, start_at = ?2, num_guests = ?3, notes = ?4
                 WHERE id = ?5",
                params![
                    reservation.customer_id,
                    reservation.start_at_str(),
                    reservation.num_guests,
                    reservation.notes,
                    id,
                ],
            )?;
        }
    }
    Ok(())
}
