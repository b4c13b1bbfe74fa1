// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::service::UserService;
use crate::storage::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub service: UserService,
}

impl AppState {
    pub fn new(service: UserService) -> Self {
        Self { service }
    }

    /// Convenience constructor wiring a repository straight into the service.
    pub fn with_repository(repo: Arc<dyn UserRepository>) -> Self {
        Self::new(UserService::new(repo))
    }
}
