// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # User Service
//!
//! Thin orchestration layer between the HTTP handlers and the repository.
//! Today every method forwards its arguments and outcome unchanged; this is
//! the seam where business rules (validation, scoping, event emission) attach
//! without touching the handler or repository layers.

use std::sync::Arc;

use crate::models::{CreateUserRequest, User};
use crate::storage::{StorageResult, UserRepository};

/// Pass-through service over a [`UserRepository`].
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_users(&self) -> StorageResult<Vec<User>> {
        self.repo.get_all().await
    }

    pub async fn get_user_by_id(&self, id: i64) -> StorageResult<User> {
        self.repo.get_by_id(id).await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> StorageResult<User> {
        self.repo.create(request).await
    }

    pub async fn update_user(&self, user: &User) -> StorageResult<User> {
        self.repo.update(user).await
    }

    pub async fn delete_user(&self, id: i64) -> StorageResult<()> {
        self.repo.delete(id).await
    }
}
