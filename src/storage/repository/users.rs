// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User repository: the query shape for the `users` table.

use async_trait::async_trait;
use sqlx::PgPool;

use super::super::{StorageError, StorageResult};
use crate::models::{CreateUserRequest, User};

/// CRUD operations over the user table.
///
/// Every targeted operation reports absence as [`StorageError::NotFound`];
/// [`StorageError::Database`] is reserved for store-level failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch one user by id.
    async fn get_by_id(&self, id: i64) -> StorageResult<User>;

    /// Fetch all users in store-default order. Empty table yields an empty
    /// vec, not an error.
    async fn get_all(&self) -> StorageResult<Vec<User>>;

    /// Insert a new user and return it with the store-assigned id.
    async fn create(&self, request: &CreateUserRequest) -> StorageResult<User>;

    /// Overwrite `username` and `email` of the row matching `user.id`.
    async fn update(&self, user: &User) -> StorageResult<User>;

    /// Remove the row matching `id`.
    async fn delete(&self, id: i64) -> StorageResult<()>;
}

/// PostgreSQL-backed [`UserRepository`].
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a repository over an established pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_by_id(&self, id: i64) -> StorageResult<User> {
        sqlx::query_as::<_, User>("SELECT id, username, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("user {id}")))
    }

    async fn get_all(&self) -> StorageResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, email FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create(&self, request: &CreateUserRequest) -> StorageResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id, username, email",
        )
        .bind(&request.username)
        .bind(&request.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update(&self, user: &User) -> StorageResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = $1, email = $2 WHERE id = $3 \
             RETURNING id, username, email",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StorageError::NotFound(format!("user {}", user.id)))
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("user {id}")));
        }
        Ok(())
    }
}
