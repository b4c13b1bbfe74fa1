// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Liveness endpoint.

/// Liveness probe handler.
///
/// Mounted outside the API key layer: health checks must not require a
/// credential. Returns a fixed body and checks no dependencies.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = String)
    )
)]
pub async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        assert_eq!(health().await, "OK");
    }
}
