// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the hosted auth/profile backend (Supabase-style REST).
//!
//! Handles:
//! - Password sign-in and password updates (`/auth/v1`)
//! - Profile role lookups (`/rest/v1/profiles`)
//! - Program listing (`/rest/v1/programs`)

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{AuthBackend, AuthSession, BackendError, ProfileStore, ProgramSource};
use crate::config::Config;
use crate::models::{ProgramRow, UserProfile};

/// Backend API client.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// The backend's error bodies use different keys depending on the service.
#[derive(Deserialize, Default)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl SupabaseClient {
    /// Create a new client with the configured base URL, key and timeout.
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        })
    }

    /// GET a REST resource with the given bearer token.
    async fn get_rest<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        bearer: &str,
    ) -> Result<T, BackendError> {
        let url = format!("{}/rest/v1/{}", self.base_url, path_and_query);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        check_response_json(response).await
    }
}

#[async_trait]
impl AuthBackend for SupabaseClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, BackendError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let token: TokenResponse = check_response_json(response).await?;
        Ok(AuthSession {
            email: token.user.email.unwrap_or_else(|| email.to_string()),
            user_id: token.user.id,
            access_token: token.access_token,
        })
    }

    async fn update_password(
        &self,
        access_token: &str,
        password: &str,
    ) -> Result<(), BackendError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .http
            .put(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?;

        check_response(response).await?;
        tracing::info!("Password updated");
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for SupabaseClient {
    async fn get_profile(
        &self,
        access_token: &str,
        user_id: &str,
    ) -> Result<Option<UserProfile>, BackendError> {
        let path = format!(
            "profiles?id=eq.{}&select=id,role",
            urlencoding::encode(user_id)
        );
        let rows: Vec<UserProfile> = self.get_rest(&path, access_token).await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl ProgramSource for SupabaseClient {
    async fn list_programs(&self) -> Result<Vec<ProgramRow>, BackendError> {
        self.get_rest("programs?select=id,name&order=name.asc", &self.anon_key)
            .await
    }
}

/// Check response status and return error if not successful.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| format!("HTTP {}", status));

    tracing::warn!(status = status.as_u16(), message = %message, "Backend rejected request");
    Err(BackendError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Check response and parse JSON body.
async fn check_response_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let response = check_response(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .or(parsed.error)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
}
