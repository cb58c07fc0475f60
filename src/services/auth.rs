// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication seam over the hosted backend.

use async_trait::async_trait;

use super::BackendError;

/// Result of a successful password sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    /// Backend access token, sent as a bearer token on later calls
    pub access_token: String,
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange email and password for a backend session.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, BackendError>;

    /// Replace the password of the user owning `access_token`.
    async fn update_password(&self, access_token: &str, password: &str)
        -> Result<(), BackendError>;
}
