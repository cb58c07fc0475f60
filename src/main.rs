// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Boxboard server
//!
//! Serves the role-scoped box dashboard and the programs API, with sign-in
//! and profiles provided by the hosted backend.

use boxboard::{
    config::Config,
    services::{ProgramService, SupabaseClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Boxboard");

    // One HTTP client serves auth, profiles and programs
    let backend = Arc::new(SupabaseClient::new(&config)?);
    tracing::info!(
        backend = %config.supabase_url,
        timeout_secs = config.backend_timeout.as_secs(),
        "Backend client initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        auth: backend.clone(),
        profiles: backend.clone(),
        programs: ProgramService::new(backend),
    });

    // Build router
    let app = boxboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging. `RUST_LOG` overrides the default
/// filter.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boxboard=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
