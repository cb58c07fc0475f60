// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session cookies and the role guard middleware.

use crate::config::Config;
use crate::models::{Role, UserProfile};
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "boxboard_session";

/// Route of the sign-in page.
pub const SIGNIN_ROUTE: &str = "/signin";

const SESSION_TTL_DAYS: i64 = 30;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (backend user id)
    pub sub: String,
    pub email: String,
    /// Backend access token for calls made on the user's behalf
    pub access_token: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Signed-in user extracted from the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
}

/// Session plus resolved profile, attached to requests by [`require_role`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session: SessionUser,
    pub profile: UserProfile,
}

/// Decode the session cookie, if present and valid.
pub fn session_from_jar(jar: &CookieJar, signing_key: &[u8]) -> Option<SessionUser> {
    let token = jar.get(SESSION_COOKIE)?.value().to_string();

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    match decode::<Claims>(&token, &key, &validation) {
        Ok(data) => Some(SessionUser {
            user_id: data.claims.sub,
            email: data.claims.email,
            access_token: data.claims.access_token,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session cookie");
            None
        }
    }
}

/// Middleware guarding the role areas.
///
/// Requires a valid session and a stored profile whose role matches the
/// first path segment. Users of another role are sent to their own home.
pub async fn require_role(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(session) = session_from_jar(&jar, &state.config.jwt_signing_key) else {
        return Redirect::to(SIGNIN_ROUTE).into_response();
    };

    let profile = match state
        .profiles
        .get_profile(&session.access_token, &session.user_id)
        .await
    {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::warn!(user_id = %session.user_id, "No profile for signed-in user");
            return Redirect::to(SIGNIN_ROUTE).into_response();
        }
        Err(e) => {
            tracing::warn!(user_id = %session.user_id, error = %e, "Profile lookup failed");
            return Redirect::to(SIGNIN_ROUTE).into_response();
        }
    };

    if let Some(required) = Role::for_path(request.uri().path()) {
        if profile.role != required {
            tracing::info!(
                user_id = %session.user_id,
                role = profile.role.as_str(),
                required = required.as_str(),
                "Redirecting user to their own area"
            );
            return Redirect::to(profile.role.home_route()).into_response();
        }
    }

    request
        .extensions_mut()
        .insert(CurrentUser { session, profile });

    next.run(request).await
}

/// Create a JWT for a user session.
pub fn create_session_jwt(
    user_id: &str,
    email: &str,
    access_token: &str,
    signing_key: &[u8],
) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        access_token: access_token.to_string(),
        iat: now,
        exp: now + SESSION_TTL_DAYS as usize * 24 * 60 * 60,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Session cookie carrying `token`.
pub fn session_cookie(token: String, config: &Config) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies())
        .max_age(time::Duration::days(SESSION_TTL_DAYS))
        .build()
}

/// Cookie that clears the session; attributes match [`session_cookie`].
pub fn session_removal_cookie(config: &Config) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies())
        .max_age(time::Duration::ZERO)
        .build()
}
