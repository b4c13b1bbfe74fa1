// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! API key middleware for Axum.
//!
//! Applied to the `/users` router subtree via
//! `axum::middleware::from_fn_with_state`; requests are pre-authenticated
//! before any handler executes. The `/health` route is mounted outside this
//! layer and never sees it.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::AuthError;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Holds the secret configured at startup.
#[derive(Clone)]
pub struct ApiKeyAuth {
    secret: Arc<str>,
}

impl ApiKeyAuth {
    /// Create an auth gate for the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into().into(),
        }
    }

    /// Compare a presented key against the secret in constant time.
    pub fn verify(&self, presented: &str) -> Result<(), AuthError> {
        ring::constant_time::verify_slices_are_equal(
            presented.as_bytes(),
            self.secret.as_bytes(),
        )
        .map_err(|_| AuthError::InvalidApiKey)
    }
}

/// Authentication middleware function.
///
/// Terminates the request with 401 when the key is missing or wrong; the
/// wrapped handler (and therefore the store) is never reached.
pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Response {
    let header = match request.headers().get(API_KEY_HEADER) {
        Some(value) => value,
        None => return AuthError::MissingApiKey.into_response(),
    };

    // A non-UTF-8 value is present but can never match the secret.
    let presented = match header.to_str() {
        Ok(value) => value,
        Err(_) => return AuthError::InvalidApiKey.into_response(),
    };

    if presented.is_empty() {
        return AuthError::MissingApiKey.into_response();
    }

    match auth.verify(presented) {
        Ok(()) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}
