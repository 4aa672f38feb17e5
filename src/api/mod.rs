pub mod auth;
pub mod availability;
pub mod health;
pub mod pages;
pub mod reservation;
pub mod user;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/generals-quarters", get(pages::generals_quarters))
        .route("/majors-suite", get(pages::majors_suite))
        .route("/contact", get(pages::contact))
        // Availability search
        .route(
            "/search-availability",
            get(availability::search_form).post(availability::post_search),
        )
        .route("/search-availability-json", post(availability::search_json))
        // Reservations
        .route(
            "/make-reservation",
            get(reservation::reservation_form).post(reservation::post_reservation),
        )
        // JSON API
        .route("/api/health", get(health::health_check))
        .route("/api/auth/login", post(auth::login))
        .route(
            "/api/users/:id",
            get(user::get_user).put(user::update_user),
        )
        .with_state(state)
}
