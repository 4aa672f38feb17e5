//! Availability search: form page, form POST and the JSON variant.

use axum::{extract::State, http::StatusCode, response::Html, Form, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::infrastructure::AppState;

use super::pages::layout;

#[derive(Deserialize)]
pub struct SearchForm {
    pub start: String,
    pub end: String,
}

#[derive(Deserialize)]
pub struct SearchJsonForm {
    pub start: String,
    pub end: String,
    /// Absent means "is any room free", present means "is this room free".
    pub room_id: Option<i32>,
}

/// Parse and order-check a submitted date range.
pub(crate) fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .map_err(|_| format!("unrecognised arrival date: {:?}", start))?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
        .map_err(|_| format!("unrecognised departure date: {:?}", end))?;
    if start >= end {
        return Err("the arrival date must fall before the departure date".to_string());
    }
    Ok((start, end))
}

fn search_page(error: Option<&str>) -> Html<String> {
    let note = match error {
        Some(msg) => format!("<p><strong>{msg}</strong></p>"),
        None => String::new(),
    };
    layout(
        "Search Availability",
        &format!(
            r#"<h1>Search for Availability</h1>
{note}
<form method="post" action="/search-availability">
<label>Arrival <input type="date" name="start" required></label>
<label>Departure <input type="date" name="end" required></label>
<button type="submit">Search</button>
</form>"#
        ),
    )
}

pub async fn search_form() -> Html<String> {
    search_page(None)
}

pub async fn post_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let (start, end) = match parse_range(&form.start, &form.end) {
        Ok(range) => range,
        Err(msg) => return Ok(search_page(Some(&msg))),
    };

    let rooms = state
        .room_repo
        .search_availability_for_all_rooms(start, end)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if rooms.is_empty() {
        tracing::info!("no availability for {} to {}", form.start, form.end);
        return Ok(layout(
            "No Availability",
            r#"<h1>No Availability</h1>
<p>Both rooms are taken for those dates. Please try another range.</p>
<p><a href="/search-availability">Search again</a></p>"#,
        ));
    }

    let items: String = rooms
        .iter()
        .map(|room| {
            format!(
                r#"<li><a href="/make-reservation?room_id={}&start={}&end={}">{}</a></li>"#,
                room.id, form.start, form.end, room.room_name
            )
        })
        .collect();

    Ok(layout(
        "Choose a Room",
        &format!("<h1>Available Rooms</h1>\n<ul>{items}</ul>"),
    ))
}

#[utoipa::path(
    post,
    path = "/search-availability-json",
    responses(
        (status = 200, description = "Availability verdict for the requested range")
    )
)]
pub async fn search_json(
    State(state): State<AppState>,
    Form(form): Form<SearchJsonForm>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let (start, end) = match parse_range(&form.start, &form.end) {
        Ok(range) => range,
        // Form-level problem, not a transport error: answer ok=false at 200.
        Err(msg) => return Ok(Json(json!({ "ok": false, "message": msg }))),
    };

    let available = match form.room_id {
        Some(room_id) => {
            state
                .room_repo
                .search_availability_by_dates(start, end, room_id)
                .await
        }
        None => state
            .room_repo
            .search_availability_for_all_rooms(start, end)
            .await
            .map(|rooms| !rooms.is_empty()),
    }
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(json!({
        "ok": available,
        "room_id": form.room_id,
        "start_date": form.start,
        "end_date": form.end,
    })))
}
