//! Route handlers. Each handler marshals request input into model values,
//! calls the query layer, and renders a view or redirects; failures bubble
//! up unmodified to the AppError response mapping.

use super::{AppState, views};
use crate::db::models::{Customer, Reservation};
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::time;
use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use serde::Deserialize;

/// Customer form fields, shared by the add and edit routes. Field names
/// match the HTML inputs; missing fields decode as empty strings and the
/// Customer constructor normalizes them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

impl CustomerForm {
    fn into_customer(self, id: Option<i64>) -> Customer {
        Customer::new(
            id,
            self.first_name,
            Some(self.middle_name),
            self.last_name,
            Some(self.phone),
            Some(self.notes),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    #[serde(default)]
    pub start_at: String,
    pub num_guests: i64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchForm {
    #[serde(default)]
    pub search_name: String,
}

/// GET / — list every customer.
pub async fn homepage(State(state): State<AppState>) -> AppResult<Html<String>> {
    let customers = state.db.with_conn(queries::all_customers)?;
    Ok(Html(views::customer_list("Customers", &customers)))
}

/// GET /add/ — blank creation form.
pub async fn new_customer_form() -> Html<String> {
    Html(views::customer_new_form())
}

/// POST /add/ — create a customer, then redirect to their detail page.
pub async fn add_customer(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> AppResult<Redirect> {
    let mut customer = form.into_customer(None);
    state
        .db
        .with_conn(|conn| queries::save_customer(conn, &mut customer))?;

    let id = customer
        .id
        .ok_or_else(|| AppError::Other("insert returned no id".to_string()))?;
    Ok(Redirect::to(&format!("/{}/", id)))
}

/// GET /{id}/ — customer detail with their reservations.
pub async fn customer_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let customer = state.db.with_conn(|conn| queries::get_customer(conn, id))?;
    let reservations = state
        .db
        .with_conn(|conn| queries::reservations_for_customer(conn, id))?;

    Ok(Html(views::customer_detail(&customer, &reservations)))
}

/// GET /{id}/edit/ — pre-filled edit form.
pub async fn edit_customer_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let customer = state.db.with_conn(|conn| queries::get_customer(conn, id))?;
    Ok(Html(views::customer_edit_form(&customer)))
}

/// POST /{id}/edit/ — update an existing customer, then redirect back.
pub async fn edit_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CustomerForm>,
) -> AppResult<Redirect> {
    let mut customer = form.into_customer(Some(id));
    state
        .db
        .with_conn(|conn| queries::save_customer(conn, &mut customer))?;

    Ok(Redirect::to(&format!("/{}/", id)))
}

/// POST /{id}/add-reservation/ — book a reservation for the customer.
pub async fn add_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ReservationForm>,
) -> AppResult<Redirect> {
    let start_at = time::parse_start_at(&form.start_at)?;
    let mut reservation = Reservation::new(id, start_at, form.num_guests, Some(form.notes));
    state
        .db
        .with_conn(|conn| queries::save_reservation(conn, &mut reservation))?;

    Ok(Redirect::to(&format!("/{}/", id)))
}

/// POST /customer/search — search customers by name fragment.
pub async fn search_customers_page(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let customers = state
        .db
        .with_conn(|conn| queries::search_customers(conn, &form.search_name))?;
    Ok(Html(views::customer_list("Search results", &customers)))
}

/// GET /customers/top10 — customers with the most reservations.
pub async fn top_customers_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let customers = state.db.with_conn(queries::top_customers)?;
    Ok(Html(views::customer_list("Top 10 customers", &customers)))
}
