//! Server-rendered HTML views.
//! Plain string builders over model values; every interpolated field goes
//! through escape().

use crate::db::models::{Customer, Reservation};
use crate::utils::time;

/// Minimal HTML escaping for text interpolated into markup.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} | Lunchly</title>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Customers</a> | <a href=\"/add/\">Add a customer</a> | <a href=\"/customers/top10\">Top 10</a></nav>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        body = body,
    )
}

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "<label>{} <input type=\"text\" name=\"{}\" value=\"{}\"></label><br>\n",
        escape(label),
        name,
        escape(value),
    )
}

fn customer_fields(customer: Option<&Customer>) -> String {
    let first = customer.map(|c| c.first_name.as_str()).unwrap_or("");
    let middle = customer.and_then(|c| c.middle_name.as_deref()).unwrap_or("");
    let last = customer.map(|c| c.last_name.as_str()).unwrap_or("");
    let phone = customer.and_then(|c| c.phone.as_deref()).unwrap_or("");
    let notes = customer.map(|c| c.notes.as_str()).unwrap_or("");

    let mut out = String::new();
    out.push_str(&text_input("First name", "firstName", first));
    out.push_str(&text_input("Middle name", "middleName", middle));
    out.push_str(&text_input("Last name", "lastName", last));
    out.push_str(&text_input("Phone", "phone", phone));
    out.push_str(&text_input("Notes", "notes", notes));
    out
}

/// Customer list, shared by the homepage, search results, and top-10 pages.
pub fn customer_list(title: &str, customers: &[Customer]) -> String {
    let mut body = String::new();

    body.push_str(
        "<form method=\"post\" action=\"/customer/search\">\n\
         <input type=\"text\" name=\"searchName\" placeholder=\"Search by name\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
    );

    body.push_str("<ul>\n");
    for customer in customers {
        if let Some(id) = customer.id {
            body.push_str(&format!(
                "<li><a href=\"/{}/\">{}</a></li>\n",
                id,
                escape(&customer.full_name()),
            ));
        }
    }
    body.push_str("</ul>\n");

    layout(title, &body)
}

pub fn customer_new_form() -> String {
    let body = format!(
        "<form method=\"post\" action=\"/add/\">\n{}<button type=\"submit\">Add</button>\n</form>\n",
        customer_fields(None),
    );
    layout("Add a customer", &body)
}

pub fn customer_edit_form(customer: &Customer) -> String {
    let action = format!("/{}/edit/", customer.id.unwrap_or_default());
    let body = format!(
        "<form method=\"post\" action=\"{}\">\n{}<button type=\"submit\">Save</button>\n</form>\n",
        action,
        customer_fields(Some(customer)),
    );
    layout(&format!("Edit {}", customer.full_name()), &body)
}

pub fn customer_detail(customer: &Customer, reservations: &[Reservation]) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<p>Phone: {}</p>\n",
        escape(customer.phone.as_deref().unwrap_or("")),
    ));
    body.push_str(&format!("<p>Notes: {}</p>\n", escape(&customer.notes)));

    if let Some(id) = customer.id {
        body.push_str(&format!(
            "<p><a href=\"/{}/edit/\">Edit customer</a></p>\n",
            id,
        ));
    }

    body.push_str("<h2>Reservations</h2>\n<ul>\n");
    for reservation in reservations {
        let notes = if reservation.notes.is_empty() {
            String::new()
        } else {
            format!(": {}", escape(&reservation.notes))
        };
        body.push_str(&format!(
            "<li>{} for {} guest(s){}</li>\n",
            time::format_display(&reservation.start_at),
            reservation.num_guests,
            notes,
        ));
    }
    body.push_str("</ul>\n");

    if let Some(id) = customer.id {
        body.push_str(&format!(
            "<h2>Add a reservation</h2>\n\
             <form method=\"post\" action=\"/{}/add-reservation/\">\n\
             <label>Start <input type=\"datetime-local\" name=\"startAt\"></label><br>\n\
             <label>Guests <input type=\"number\" name=\"numGuests\" value=\"1\"></label><br>\n\
             <label>Notes <input type=\"text\" name=\"notes\"></label><br>\n\
             <button type=\"submit\">Add</button>\n\
             </form>\n",
            id,
        ));
    }

    layout(&customer.full_name(), &body)
}
