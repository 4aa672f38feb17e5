use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::auth::create_jwt;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    responses(
        (status = 200, description = "Login succeeded, token returned"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    tracing::info!("login attempt for {}", payload.email);

    let credentials = match state
        .user_repo
        .authenticate(&payload.email, &payload.password)
        .await
    {
        Ok(credentials) => credentials,
        // Unknown email and wrong password get the same response: the
        // distinction stays inside the repository.
        Err(DomainError::NotFound) | Err(DomainError::IncorrectPassword) => {
            tracing::warn!("login rejected for {}", payload.email);
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("login lookup failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response();
        }
    };

    let user = match state.user_repo.find_by_id(credentials.id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("login profile fetch failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response();
        }
    };

    match create_jwt(&user.email, user.access_level) {
        Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
        Err(e) => {
            tracing::error!("token creation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}
