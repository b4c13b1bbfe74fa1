// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User CRUD endpoints.
//!
//! Handlers translate transport-level requests into service calls and service
//! outcomes into status codes. No handler touches the store directly.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateUserRequest, UpdateUserRequest, User},
    state::AppState,
};

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users; empty array when none", body = [User]),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.service.get_all_users().await?;
    Ok(Json(users))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    tag = "Users",
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Non-integer id"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state.service.get_user_by_id(id).await?;
    Ok(Json(user))
}

/// Create a user. A supplied `id` in the body is ignored; the store assigns
/// one.
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user with assigned id", body = User),
        (status = 400, description = "Undecodable body"),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let user = state.service.create_user(&request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's fields. The path id identifies the row; any id in the
/// body is ignored.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Non-integer id or undecodable body"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "No such user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let user = User {
        id,
        username: request.username,
        email: request.email,
    };
    let updated = state.service.update_user(&user).await?;
    Ok(Json(updated))
}

/// Delete a user. Deletion is unconditional and irreversible.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    tag = "Users",
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Non-integer id"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "No such user")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
