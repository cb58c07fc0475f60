// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
};
use boxboard::config::Config;
use boxboard::middleware::auth::{create_session_jwt, SESSION_COOKIE};
use boxboard::models::{ProgramRow, Role, UserProfile};
use boxboard::routes::create_router;
use boxboard::services::{
    AuthBackend, AuthSession, BackendError, ProfileStore, ProgramService, ProgramSource,
};
use boxboard::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ADMIN_ID: &str = "u-admin";
pub const COACH_ID: &str = "u-coach";
pub const ATHLETE_ID: &str = "u-athlete";
/// Signs in fine but has no profile row.
pub const ORPHAN_ID: &str = "u-orphan";

/// How the fake program listing fails, if it does.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum ProgramFailure {
    /// Backend answered with an error body.
    Rejected(String),
    /// Backend answered with something unreadable.
    Garbled,
}

/// In-memory stand-in for the hosted backend.
pub struct FakeBackend {
    /// email -> (password, user id)
    pub users: HashMap<String, (String, String)>,
    pub profiles: HashMap<String, Role>,
    pub profile_lookup_fails: bool,
    /// Raw JSON array of program rows
    pub programs_json: String,
    pub programs_failure: Option<ProgramFailure>,
    pub password_updates: Mutex<Vec<(String, String)>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        let users = [
            ("admin@box.test", "admin-pass", ADMIN_ID),
            ("coach@box.test", "coach-pass", COACH_ID),
            ("athlete@box.test", "athlete-pass", ATHLETE_ID),
            ("orphan@box.test", "orphan-pass", ORPHAN_ID),
        ]
        .into_iter()
        .map(|(email, password, id)| (email.to_string(), (password.to_string(), id.to_string())))
        .collect();

        let profiles = [
            (ADMIN_ID, Role::Admin),
            (COACH_ID, Role::Coach),
            (ATHLETE_ID, Role::Athlete),
        ]
        .into_iter()
        .map(|(id, role)| (id.to_string(), role))
        .collect();

        Self {
            users,
            profiles,
            profile_lookup_fails: false,
            programs_json: "[]".to_string(),
            programs_failure: None,
            password_updates: Mutex::new(Vec::new()),
        }
    }
}

/// Backend access token handed out for `user_id`.
pub fn access_token_for(user_id: &str) -> String {
    format!("token-{}", user_id)
}

#[async_trait]
impl AuthBackend for FakeBackend {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, BackendError> {
        match self.users.get(email) {
            Some((expected, user_id)) if expected == password => Ok(AuthSession {
                user_id: user_id.clone(),
                email: email.to_string(),
                access_token: access_token_for(user_id),
            }),
            _ => Err(BackendError::Rejected {
                status: 400,
                message: "Invalid login credentials".to_string(),
            }),
        }
    }

    async fn update_password(&self, access_token: &str, password: &str) -> Result<(), BackendError> {
        if password == "reused-password" {
            return Err(BackendError::Rejected {
                status: 422,
                message: "New password should be different from the old password.".to_string(),
            });
        }
        self.password_updates
            .lock()
            .unwrap()
            .push((access_token.to_string(), password.to_string()));
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for FakeBackend {
    async fn get_profile(
        &self,
        _access_token: &str,
        user_id: &str,
    ) -> Result<Option<UserProfile>, BackendError> {
        if self.profile_lookup_fails {
            return Err(BackendError::Rejected {
                status: 503,
                message: "profiles unavailable".to_string(),
            });
        }
        Ok(self.profiles.get(user_id).map(|role| UserProfile {
            id: user_id.to_string(),
            role: *role,
        }))
    }
}

#[async_trait]
impl ProgramSource for FakeBackend {
    async fn list_programs(&self) -> Result<Vec<ProgramRow>, BackendError> {
        match &self.programs_failure {
            Some(ProgramFailure::Rejected(message)) => Err(BackendError::Rejected {
                status: 400,
                message: message.clone(),
            }),
            Some(ProgramFailure::Garbled) => {
                Err(BackendError::Decode("expected an array".to_string()))
            }
            None => serde_json::from_str(&self.programs_json)
                .map_err(|e| BackendError::Decode(e.to_string())),
        }
    }
}

/// Create a test app backed by `backend`.
/// Returns the router, the shared state and the backend for inspection.
#[allow(dead_code)]
pub fn create_test_app_with(
    backend: FakeBackend,
) -> (axum::Router, Arc<AppState>, Arc<FakeBackend>) {
    let backend = Arc::new(backend);
    let state = Arc::new(AppState {
        config: Config::test_default(),
        auth: backend.clone(),
        profiles: backend.clone(),
        programs: ProgramService::new(backend.clone()),
    });

    (create_router(state.clone()), state, backend)
}

/// Create a test app with the default fake backend.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let (app, state, _) = create_test_app_with(FakeBackend::default());
    (app, state)
}

/// `Cookie` header value carrying a valid session for `user_id`.
#[allow(dead_code)]
pub fn session_cookie_for(user_id: &str, state: &AppState) -> String {
    let token = create_session_jwt(
        user_id,
        &format!("{}@box.test", user_id),
        &access_token_for(user_id),
        &state.config.jwt_signing_key,
    )
    .unwrap();
    format!("{}={}", SESSION_COOKIE, token)
}

#[allow(dead_code)]
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// URL-encoded form POST.
#[allow(dead_code)]
pub fn post_form(uri: &str, cookie: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[allow(dead_code)]
pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

#[allow(dead_code)]
pub fn find_cookie(headers: &[String], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|value| value.starts_with(&format!("{name}=")))
        .cloned()
}
