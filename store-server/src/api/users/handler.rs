//! User API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult, Json};
use shared::models::{User, UserCreate, UserUpdate};

/// GET /users - list all users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user::find_all(&state.pool).await?;
    Ok(Json(users))
}

/// GET /users/:id - single user
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = user::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(user))
}

/// POST /users - register a user with a pre-computed credential pair
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = user::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id - partial profile update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    let user = user::update(&state.pool, id, payload).await?;
    Ok(Json(user))
}

/// DELETE /users/:id - delete a user, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = user::delete(&state.pool, id).await?;
    Ok(Json(user))
}
