// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Staff model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Someone who works at the box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    pub status: StaffStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Owner,
    Coach,
    Staff,
}

impl StaffRole {
    pub const ALL: [StaffRole; 3] = [StaffRole::Owner, StaffRole::Coach, StaffRole::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Owner => "Owner",
            StaffRole::Coach => "Coach",
            StaffRole::Staff => "Staff",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffStatus {
    Active,
    Inactive,
}

impl StaffStatus {
    pub const ALL: [StaffStatus; 2] = [StaffStatus::Active, StaffStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}
