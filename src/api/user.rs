use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::{DomainError, UserUpdate};
use crate::infrastructure::auth::Claims;
use crate::infrastructure::AppState;

fn map_user_error(e: DomainError) -> (StatusCode, String) {
    match e {
        DomainError::NotFound => (StatusCode::NOT_FOUND, "user not found".to_string()),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub async fn get_user(
    _claims: Claims,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let user = state.user_repo.find_by_id(id).await.map_err(map_user_error)?;

    // The stored hash never leaves the repository boundary.
    Ok(Json(json!({
        "id": user.id,
        "first_name": user.first_name,
        "last_name": user.last_name,
        "email": user.email,
        "access_level": user.access_level,
        "created_at": user.created_at,
        "updated_at": user.updated_at,
    })))
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub access_level: i32,
}

pub async fn update_user(
    _claims: Claims,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state
        .user_repo
        .update_user(UserUpdate {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            access_level: payload.access_level,
        })
        .await
        .map_err(map_user_error)?;

    Ok(Json(json!({ "message": "User updated" })))
}
