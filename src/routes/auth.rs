// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in, sign-out and set-password routes.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use validator::Validate;

use crate::error::AppError;
use crate::forms::{first_message, SetPasswordForm, SignInForm};
use crate::middleware::auth::{
    create_session_jwt, session_cookie, session_from_jar, session_removal_cookie, SIGNIN_ROUTE,
};
use crate::services::profile::landing_route;
use crate::services::BackendError;
use crate::views::pages::{set_password_page, signin_page};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(|| async { Redirect::to(SIGNIN_ROUTE) }))
        .route(SIGNIN_ROUTE, get(signin_form).post(signin))
        .route("/signout", post(signout))
        .route("/set-password", get(set_password_form).post(set_password))
}

/// Show the sign-in form, or send an already signed-in user to their home.
async fn signin_form(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if let Some(session) = session_from_jar(&jar, &state.config.jwt_signing_key) {
        if let Some(home) =
            landing_route(state.profiles.as_ref(), &session.access_token, &session.user_id).await
        {
            return Redirect::to(home).into_response();
        }
    }

    signin_page("", None).into_response()
}

/// Authenticate, set the session cookie and redirect by role.
async fn signin(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        let message = first_message(&errors).unwrap_or_else(|| "Check your input".to_string());
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            signin_page(&form.email, Some(&message)),
        )
            .into_response());
    }

    let session = match state
        .auth
        .sign_in_with_password(&form.email, &form.password)
        .await
    {
        Ok(session) => session,
        Err(BackendError::Rejected { message, .. }) => {
            tracing::info!(email = %form.email, reason = %message, "Sign-in rejected");
            return Ok((
                StatusCode::UNAUTHORIZED,
                signin_page(&form.email, Some(&message)),
            )
                .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %session.user_id, "User signed in");

    let token = create_session_jwt(
        &session.user_id,
        &session.email,
        &session.access_token,
        &state.config.jwt_signing_key,
    )?;
    let jar = jar.add(session_cookie(token, &state.config));

    match landing_route(state.profiles.as_ref(), &session.access_token, &session.user_id).await {
        Some(home) => Ok((jar, Redirect::to(home)).into_response()),
        None => Ok((jar, signin_page(&form.email, None)).into_response()),
    }
}

/// Clear the session and return to the sign-in page.
async fn signout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    (
        jar.add(session_removal_cookie(&state.config)),
        Redirect::to(SIGNIN_ROUTE),
    )
}

async fn set_password_form(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    match session_from_jar(&jar, &state.config.jwt_signing_key) {
        Some(_) => set_password_page(None).into_response(),
        None => Redirect::to(SIGNIN_ROUTE).into_response(),
    }
}

/// Update the signed-in user's password, then land them by role.
async fn set_password(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<SetPasswordForm>,
) -> Result<Response, AppError> {
    let Some(session) = session_from_jar(&jar, &state.config.jwt_signing_key) else {
        return Ok(Redirect::to(SIGNIN_ROUTE).into_response());
    };

    if let Err(errors) = form.validate() {
        let message = first_message(&errors).unwrap_or_else(|| "Check your input".to_string());
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            set_password_page(Some(&message)),
        )
            .into_response());
    }

    match state
        .auth
        .update_password(&session.access_token, &form.password)
        .await
    {
        Ok(()) => {}
        Err(BackendError::Rejected { message, .. }) => {
            return Ok((StatusCode::BAD_REQUEST, set_password_page(Some(&message))).into_response());
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(user_id = %session.user_id, "Password set");

    let home = landing_route(state.profiles.as_ref(), &session.access_token, &session.user_id)
        .await
        .unwrap_or(SIGNIN_ROUTE);
    Ok(Redirect::to(home).into_response())
}
