// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! TLS certificate loading for the HTTPS listener.
//!
//! Certificate material is plain PEM on disk, located via `TLS_CERT_PATH` /
//! `TLS_KEY_PATH` (see [`crate::config`]). Missing or unreadable material is
//! fatal at startup; the TLS listener never starts without it.

use std::io;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::TlsSettings;

/// Load the server certificate and private key into a rustls config.
pub async fn load_server_config(settings: &TlsSettings) -> io::Result<RustlsConfig> {
    RustlsConfig::from_pem_file(&settings.cert_path, &settings.key_path).await
}
