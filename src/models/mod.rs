// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod class_session;
pub mod member;
pub mod payment;
pub mod profile;
pub mod program;
pub mod staff;
pub mod stats;
pub mod wod;

pub use class_session::{ClassSession, ClassStatus, DayOfWeek};
pub use member::Member;
pub use payment::{Currency, Payment, PaymentMethod, PaymentStatus};
pub use profile::{Role, UserProfile};
pub use program::{Program, ProgramRow};
pub use staff::{StaffMember, StaffRole, StaffStatus};
pub use stats::DashboardSummary;
pub use wod::Wod;
