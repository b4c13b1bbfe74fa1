// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Shared-secret API key authentication for the user directory.
//!
//! ## Auth Flow
//!
//! 1. Caller sends `X-API-Key: <secret>` on every request
//! 2. The [`middleware::require_api_key`] layer compares the header against
//!    the secret configured at startup
//! 3. Missing or mismatching keys terminate the request with 401 before any
//!    handler logic runs
//!
//! ## Security
//!
//! - All non-health endpoints require the key
//! - The comparison is constant-time (`ring::constant_time`)
//! - The secret is fixed at construction; there is no rotation or expiry

pub mod error;
pub mod middleware;

pub use error::AuthError;
pub use middleware::{require_api_key, ApiKeyAuth, API_KEY_HEADER};
