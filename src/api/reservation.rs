//! Reservation form and booking flow.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::domain::{DomainError, NewReservation};
use crate::infrastructure::AppState;

use super::availability::parse_range;
use super::pages::layout;

#[derive(Deserialize)]
pub struct ReservationQuery {
    pub room_id: Option<i32>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize)]
pub struct ReservationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    pub room_id: Option<i32>,
}

fn reservation_page(form: &ReservationForm, errors: &[String]) -> Html<String> {
    let notes: String = errors
        .iter()
        .map(|msg| format!("<li>{msg}</li>"))
        .collect();
    let notes = if notes.is_empty() {
        String::new()
    } else {
        format!("<ul>{notes}</ul>")
    };
    let room_id = form
        .room_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    layout(
        "Make a Reservation",
        &format!(
            r#"<h1>Make a Reservation</h1>
{notes}
<form method="post" action="/make-reservation">
<label>First name <input type="text" name="first_name" value="{first_name}" required></label>
<label>Last name <input type="text" name="last_name" value="{last_name}" required></label>
<label>Email <input type="email" name="email" value="{email}" required></label>
<label>Phone <input type="tel" name="phone" value="{phone}" required></label>
<label>Arrival <input type="date" name="start" value="{start}"></label>
<label>Departure <input type="date" name="end" value="{end}"></label>
<label>Room <input type="number" name="room_id" value="{room_id}"></label>
<button type="submit">Reserve</button>
</form>"#,
            first_name = form.first_name,
            last_name = form.last_name,
            email = form.email,
            phone = form.phone,
            start = form.start,
            end = form.end,
        ),
    )
}

pub async fn reservation_form(Query(query): Query<ReservationQuery>) -> Html<String> {
    let prefill = ReservationForm {
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        phone: String::new(),
        start: query.start.unwrap_or_default(),
        end: query.end.unwrap_or_default(),
        room_id: query.room_id,
    };
    reservation_page(&prefill, &[])
}

pub async fn post_reservation(
    State(state): State<AppState>,
    Form(form): Form<ReservationForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut errors = Vec::new();

    if form.first_name.trim().is_empty() {
        errors.push("first name is required".to_string());
    }
    if form.last_name.trim().is_empty() {
        errors.push("last name is required".to_string());
    }
    if !form.email.contains('@') {
        errors.push("a valid email address is required".to_string());
    }
    if form.phone.trim().is_empty() {
        errors.push("a phone number is required".to_string());
    }

    let range = if form.start.is_empty() || form.end.is_empty() {
        errors.push("please pick arrival and departure dates".to_string());
        None
    } else {
        match parse_range(&form.start, &form.end) {
            Ok(range) => Some(range),
            Err(msg) => {
                errors.push(msg);
                None
            }
        }
    };

    if form.room_id.is_none() {
        errors.push("please choose a room".to_string());
    }

    // An incomplete submission re-renders the form; still a 200, the
    // request itself was fine.
    let ((start, end), room_id) = match (range, form.room_id) {
        (Some(range), Some(room_id)) if errors.is_empty() => (range, room_id),
        _ => return Ok(reservation_page(&form, &errors)),
    };

    let room = state.room_repo.find_by_id(room_id).await.map_err(|e| match e {
        DomainError::NotFound => (StatusCode::NOT_FOUND, "no such room".to_string()),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    })?;

    let available = state
        .room_repo
        .search_availability_by_dates(start, end, room_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if !available {
        return Ok(reservation_page(
            &form,
            &[format!(
                "{} is no longer free for those dates",
                room.room_name
            )],
        ));
    }

    let reservation_id = state
        .reservation_repo
        .book_room(NewReservation {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            start_date: start,
            end_date: end,
            room_id,
        })
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(
        "reservation {} booked: {} {} to {}",
        reservation_id,
        room.room_name,
        form.start,
        form.end
    );

    Ok(layout(
        "Reservation Confirmed",
        &format!(
            r#"<h1>Reservation Confirmed</h1>
<p>Thank you, {} {}. {} is yours from {} to {}.</p>
<p>Your confirmation number is <strong>{}</strong>. A summary has been sent
to {}.</p>"#,
            form.first_name,
            form.last_name,
            room.room_name,
            form.start,
            form.end,
            reservation_id,
            form.email
        ),
    ))
}
