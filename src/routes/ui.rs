// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI preference routes (sidebar toggle).

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
    routing::post,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;

use super::page::{ui_state, SIDEBAR_COOKIE};
use crate::views::layout::SIDEBAR_TOGGLE_ROUTE;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(SIDEBAR_TOGGLE_ROUTE, post(toggle_sidebar))
}

#[derive(Deserialize)]
pub struct ToggleParams {
    #[serde(default)]
    return_to: String,
}

/// Flip the sidebar between expanded and collapsed, then go back.
async fn toggle_sidebar(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(params): Form<ToggleParams>,
) -> impl IntoResponse {
    let expanded = !ui_state(&jar, None).expanded;
    let cookie = Cookie::build((
        SIDEBAR_COOKIE,
        if expanded { "expanded" } else { "collapsed" },
    ))
    .path("/")
    .same_site(SameSite::Lax)
    .secure(state.config.secure_cookies())
    .max_age(time::Duration::days(365))
    .build();

    (jar.add(cookie), Redirect::to(safe_return_path(&params.return_to)))
}

/// Only same-site absolute paths are followed; anything else goes to `/`.
pub fn safe_return_path(raw: &str) -> &str {
    let is_local = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
    if is_local {
        raw
    } else {
        "/"
    }
}
