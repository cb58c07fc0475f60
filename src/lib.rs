// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Boxboard: administration dashboard for a CrossFit-style box
//!
//! This crate serves the role-scoped dashboard (admin, coach, athlete)
//! as server-rendered pages, plus a small JSON API backed by the hosted
//! auth/profile service.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod views;

use config::Config;
use services::{AuthBackend, ProfileStore, ProgramService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub auth: Arc<dyn AuthBackend>,
    pub profiles: Arc<dyn ProfileStore>,
    pub programs: ProgramService,
}
