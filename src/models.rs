// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response data structures for the user directory. All types
//! derive `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON
//! handling and OpenAPI documentation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record as stored and served.
///
/// The `id` is assigned by PostgreSQL on insert and is immutable afterwards.
/// `username` and `email` are caller-supplied; the core enforces no format or
/// uniqueness constraints beyond what the schema does.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Store-assigned identifier, non-zero for any persisted row.
    pub id: i64,
    /// Caller-supplied username.
    pub username: String,
    /// Caller-supplied email address.
    pub email: String,
}

/// Request to create a new user.
///
/// Carries no `id`; an `id` field in the request body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

/// Request to replace a user's fields. The id comes from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
}
