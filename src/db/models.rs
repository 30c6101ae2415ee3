//! Row models for customers and reservations.
//! Optional fields are normalized once, at construction; stored values are
//! already in canonical form and there is no assignment-time coercion.

use crate::errors::AppError;
use crate::utils::time;
use chrono::NaiveDateTime;
use rusqlite::{Result as SqlResult, Row};
use serde::Serialize;

/// A customer of the restaurant.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: Option<i64>,
    pub first_name: String,
    pub middle_name: Option<String>, // None when blank
    pub last_name: String,
    pub phone: Option<String>, // None when blank
    pub notes: String,         // never null; blank input becomes ""
}

/// Collapse a blank optional field to None.
fn none_if_empty(val: Option<String>) -> Option<String> {
    val.filter(|s| !s.is_empty())
}

impl Customer {
    /// Build a customer from raw form input. Blank middle name and phone
    /// become None, absent notes become the empty string. Names are taken
    /// as-is, empty strings included.
    pub fn new(
        id: Option<i64>,
        first_name: String,
        middle_name: Option<String>,
        last_name: String,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            first_name,
            middle_name: none_if_empty(middle_name),
            last_name,
            phone: none_if_empty(phone),
            notes: notes.unwrap_or_default(),
        }
    }

    /// "First Last", with the middle name in between when present.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Decode a customer row. Columns are read by name; a missing or mistyped
/// column is an error, never a silently-defaulted field.
pub fn map_customer_row(row: &Row) -> SqlResult<Customer> {
    Ok(Customer {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        middle_name: row.get("middle_name")?,
        last_name: row.get("last_name")?,
        phone: row.get("phone")?,
        notes: row.get("notes")?,
    })
}

/// A booking tied to exactly one customer.
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    pub id: Option<i64>,
    pub customer_id: i64,
    pub start_at: NaiveDateTime,
    pub num_guests: i64,
    pub notes: String,
}

impl Reservation {
    pub fn new(
        customer_id: i64,
        start_at: NaiveDateTime,
        num_guests: i64,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            start_at,
            num_guests,
            notes: notes.unwrap_or_default(),
        }
    }

    /// Storage form of the start time.
    pub fn start_at_str(&self) -> String {
        time::format_store(&self.start_at)
    }
}

pub fn map_reservation_row(row: &Row) -> SqlResult<Reservation> {
    let start_str: String = row.get("start_at")?;
    let start_at = time::parse_store(&start_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStartAt(start_str.clone())),
        )
    })?;

    Ok(Reservation {
        id: Some(row.get("id")?),
        customer_id: row.get("customer_id")?,
        start_at,
        num_guests: row.get("num_guests")?,
        notes: row.get("notes")?,
    })
}
