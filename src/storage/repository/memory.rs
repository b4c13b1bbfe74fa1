// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory [`UserRepository`] for tests and local development.
//!
//! Mirrors the PostgreSQL implementation's contract exactly: sequential id
//! assignment starting at 1, `NotFound` for targeted misses, empty vec for an
//! empty table.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::super::{StorageError, StorageResult};
use super::UserRepository;
use crate::models::{CreateUserRequest, User};

/// In-memory user table behind an async lock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    // BTreeMap keeps iteration order stable, like a serial-keyed table scan.
    rows: BTreeMap<i64, User>,
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: i64) -> StorageResult<User> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("user {id}")))
    }

    async fn get_all(&self) -> StorageResult<Vec<User>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn create(&self, request: &CreateUserRequest) -> StorageResult<User> {
        let mut table = self.inner.write().await;
        table.next_id += 1;
        let user = User {
            id: table.next_id,
            username: request.username.clone(),
            email: request.email.clone(),
        };
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> StorageResult<User> {
        let mut table = self.inner.write().await;
        match table.rows.get_mut(&user.id) {
            Some(row) => {
                row.username = user.username.clone();
                row.email = user.email.clone();
                Ok(row.clone())
            }
            None => Err(StorageError::NotFound(format!("user {}", user.id))),
        }
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let mut table = self.inner.write().await;
        match table.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(format!("user {id}"))),
        }
    }
}
