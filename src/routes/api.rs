// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API routes.

use crate::error::Result;
use crate::models::Program;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes. These use the anon key and need no session.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/programs", get(list_programs))
}

// ─── Programs ────────────────────────────────────────────────

/// Program listing response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgramsResponse {
    pub ok: bool,
    pub programs: Vec<Program>,
}

/// List every program, sorted by name.
async fn list_programs(State(state): State<Arc<AppState>>) -> Result<Json<ProgramsResponse>> {
    let programs = state.programs.list().await?;

    Ok(Json(ProgramsResponse { ok: true, programs }))
}
