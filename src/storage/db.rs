// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Store adapter: owns the live PostgreSQL connection pool.
//!
//! The pool is constructed once at startup and verified reachable before the
//! server accepts traffic. Pooling policy is the driver default. No query
//! logic lives here; repositories issue their own statements through the
//! pool.

use sqlx::PgPool;

use super::StorageResult;
use crate::config::DatabaseConfig;

/// Open a connection pool and verify the database is reachable.
///
/// The probe runs a `SELECT 1` so a misconfigured or unreachable store fails
/// startup instead of the first request. Callers treat an error as fatal.
pub async fn connect(config: &DatabaseConfig) -> StorageResult<PgPool> {
    let pool = PgPool::connect(&config.connection_url()).await?;

    // Connectivity probe: the server must not start serving without a
    // verified store connection.
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
