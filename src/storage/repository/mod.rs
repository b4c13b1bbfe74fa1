// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Repository layer providing typed access to the user table.
//!
//! [`UserRepository`] is the seam between the service layer and the store.
//! Two implementations exist: [`PgUserRepository`] against PostgreSQL and
//! [`InMemoryUserRepository`] for tests and local development.

pub mod memory;
pub mod users;

pub use memory::InMemoryUserRepository;
pub use users::{PgUserRepository, UserRepository};
