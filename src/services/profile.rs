// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile store seam and the role-based landing decision.

use async_trait::async_trait;

use super::BackendError;
use crate::models::UserProfile;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the stored profile for `user_id`, if one exists.
    async fn get_profile(
        &self,
        access_token: &str,
        user_id: &str,
    ) -> Result<Option<UserProfile>, BackendError>;
}

/// Landing route for a signed-in user, or `None` when the sign-in form
/// should be shown instead.
///
/// Lookup errors and missing profile rows both yield `None`; the error is
/// logged but not surfaced to the user.
pub async fn landing_route(
    store: &dyn ProfileStore,
    access_token: &str,
    user_id: &str,
) -> Option<&'static str> {
    match store.get_profile(access_token, user_id).await {
        Ok(Some(profile)) => {
            tracing::debug!(user_id, role = profile.role.as_str(), "Resolved user role");
            Some(profile.role.home_route())
        }
        Ok(None) => {
            tracing::warn!(user_id, "Signed-in user has no profile row");
            None
        }
        Err(e) => {
            tracing::warn!(user_id, error = %e, "Profile lookup failed, showing sign-in form");
            None
        }
    }
}
