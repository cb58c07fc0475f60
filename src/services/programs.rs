// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Program listing: backend seam plus normalization of the raw rows.

use std::sync::Arc;

use async_trait::async_trait;

use super::BackendError;
use crate::models::{Program, ProgramRow};

#[async_trait]
pub trait ProgramSource: Send + Sync {
    /// Fetch every program row.
    async fn list_programs(&self) -> Result<Vec<ProgramRow>, BackendError>;
}

/// Lists programs with ids as text, names defaulted, sorted by name.
#[derive(Clone)]
pub struct ProgramService {
    source: Arc<dyn ProgramSource>,
}

impl ProgramService {
    pub fn new(source: Arc<dyn ProgramSource>) -> Self {
        Self { source }
    }

    pub async fn list(&self) -> Result<Vec<Program>, BackendError> {
        let rows = self.source.list_programs().await?;
        tracing::debug!(count = rows.len(), "Fetched program rows");
        Ok(normalize(rows))
    }
}

/// Convert rows and sort them by name, ignoring case; ties fall back to the
/// raw name and then the id so the order is total.
pub fn normalize(rows: Vec<ProgramRow>) -> Vec<Program> {
    let mut programs: Vec<Program> = rows.into_iter().map(Program::from).collect();
    programs.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    programs
}
