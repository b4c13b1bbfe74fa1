// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Persistence Layer
//!
//! One live PostgreSQL pool (see [`db`]) and the repositories that issue
//! parameterized statements through it (see [`repository`]).
//!
//! Absence and failure are modeled uniformly: every targeted operation
//! returns `Result<_, StorageError>`, where [`StorageError::NotFound`] is the
//! typed "no such row" outcome for reads and writes alike. Nothing in this
//! layer logs or formats user-facing messages; the handler layer translates
//! outcomes to wire format.

use thiserror::Error;

pub mod db;
pub mod repository;

pub use repository::{InMemoryUserRepository, PgUserRepository, UserRepository};

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row matched the targeted entity.
    #[error("not found: {0}")]
    NotFound(String),
    /// Connectivity or execution failure from PostgreSQL.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
