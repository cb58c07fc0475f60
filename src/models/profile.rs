// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User profile and dashboard role, as stored by the hosted backend.

use serde::{Deserialize, Serialize};

/// Profile row stored in the backend's `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub role: Role,
}

/// Dashboard role. Each role owns one route segment and one home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Coach,
    Athlete,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Coach, Role::Athlete];

    /// Lowercase name, also the first path segment of the role's pages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Coach => "coach",
            Role::Athlete => "athlete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Coach => "Coach",
            Role::Athlete => "Athlete",
        }
    }

    /// Where a signed-in user of this role lands.
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Coach => "/coach/dashboard",
            Role::Athlete => "/athlete/home",
        }
    }

    /// Role owning a route segment (`"admin"` for `/admin/...`).
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == segment)
    }

    /// Role owning a request path, if the path is under a role segment.
    pub fn for_path(path: &str) -> Option<Self> {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Self::from_segment)
    }
}
