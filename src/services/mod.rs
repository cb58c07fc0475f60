// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic and backend access.

pub mod auth;
pub mod profile;
pub mod programs;
pub mod supabase;

pub use auth::{AuthBackend, AuthSession};
pub use profile::ProfileStore;
pub use programs::{ProgramService, ProgramSource};
pub use supabase::SupabaseClient;

/// Errors returned by the hosted backend seams.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with an error status; `message` is its own text.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected backend response: {0}")]
    Decode(String),
}
