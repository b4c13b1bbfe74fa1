// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use relational_user_service::{
    api::router,
    auth::ApiKeyAuth,
    config::{Config, LOG_FORMAT_ENV},
    service::UserService,
    state::AppState,
    storage::{self, PgUserRepository},
    tls,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env();

    // Install the ring crypto provider for rustls (must be done before any TLS operations)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let tls_config = tls::load_server_config(&config.tls)
        .await
        .expect("Failed to load TLS certificate material");

    // The server must not start serving without a verified store connection.
    let pool = storage::db::connect(&config.database)
        .await
        .expect("Failed to connect to database");

    let repo = Arc::new(PgUserRepository::new(pool));
    let state = AppState::new(UserService::new(repo));
    let auth = ApiKeyAuth::new(config.api_key.clone());
    let app = router(state, auth);

    let http_addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
        .parse()
        .expect("Failed to parse HTTP bind address");
    let https_addr: SocketAddr = format!("{}:{}", config.host, config.https_port)
        .parse()
        .expect("Failed to parse HTTPS bind address");

    // Plaintext listener: supervised in its own task. A failure here is
    // logged and observable but does not take the TLS listener down.
    let http_app = app.clone();
    tokio::spawn(async move {
        tracing::info!(%http_addr, "starting HTTP listener");
        if let Err(error) = axum_server::bind(http_addr)
            .serve(http_app.into_make_service())
            .await
        {
            tracing::error!(error = %error, "HTTP listener failed");
        }
    });

    // TLS listener runs in the foreground; its failure is fatal.
    tracing::info!(%https_addr, "starting HTTPS listener (docs at /docs)");
    axum_server::bind_rustls(https_addr, tls_config)
        .serve(app.into_make_service())
        .await
        .expect("HTTPS server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
