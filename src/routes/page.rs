// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-request page context shared by the role pages.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Datelike;
use serde::Deserialize;
use validator::Validate;

use crate::fixtures;
use crate::forms::invalid_fields;
use crate::middleware::auth::{CurrentUser, SIGNIN_ROUTE};
use crate::models::DayOfWeek;
use crate::views::layout::{shell, Shell, UiState};
use crate::views::{pages, tables};

/// Cookie remembering whether the desktop sidebar is expanded.
pub const SIDEBAR_COOKIE: &str = "boxboard_sidebar";

/// Read the sidebar state from the cookie jar and the `menu` query flag.
pub fn ui_state(jar: &CookieJar, query: Option<&str>) -> UiState {
    let expanded = jar
        .get(SIDEBAR_COOKIE)
        .map(|c| c.value() != "collapsed")
        .unwrap_or(true);
    let mobile_open = query
        .map(|q| q.split('&').any(|pair| pair == "menu=open"))
        .unwrap_or(false);

    UiState {
        expanded,
        hovered: false,
        mobile_open,
    }
}

/// Signed-in user, UI state and path of a role page request.
pub struct PageCtx {
    pub user: CurrentUser,
    pub ui: UiState,
    pub path: String,
    pub query: String,
}

impl<S: Send + Sync> FromRequestParts<S> for PageCtx {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Inserted by the role guard; missing means the route was mounted
        // outside the guard.
        let Some(user) = parts.extensions.get::<CurrentUser>().cloned() else {
            tracing::error!(path = %parts.uri.path(), "Role page served without a current user");
            return Err(Redirect::to(SIGNIN_ROUTE).into_response());
        };

        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self {
            user,
            ui: ui_state(&jar, parts.uri.query()),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().unwrap_or_default().to_string(),
        })
    }
}

impl PageCtx {
    /// Render `content` inside the shell of the user's role.
    pub fn render(&self, title: &str, content: &str) -> Html<String> {
        shell(
            &Shell {
                role: self.user.profile.role,
                ui: self.ui,
                path: &self.path,
                query: &self.query,
                title,
                user_email: &self.user.session.email,
            },
            content,
        )
    }

    /// Validate a form submission.
    ///
    /// Valid input is logged and answered with a redirect to `list_route`;
    /// fixtures are read-only so nothing is stored. Invalid input re-renders
    /// the form with status 422.
    pub fn submit<F: Validate>(
        &self,
        form: &F,
        title: &str,
        list_route: &str,
        render_form: impl FnOnce(&[String]) -> String,
    ) -> Response {
        match form.validate() {
            Ok(()) => {
                tracing::info!(
                    user_id = %self.user.session.user_id,
                    form = title,
                    "Form accepted (not persisted)"
                );
                Redirect::to(list_route).into_response()
            }
            Err(errors) => {
                let invalid = invalid_fields(&errors);
                tracing::debug!(form = title, ?invalid, "Form rejected");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    self.render(title, &render_form(&invalid)),
                )
                    .into_response()
            }
        }
    }
}

/// List filters. Unknown values are ignored and the full list is shown.
#[derive(Debug, Default, Deserialize)]
pub struct ListFilter {
    pub day: Option<String>,
    pub status: Option<String>,
}

/// Class table, optionally narrowed to one day.
pub fn class_list(base: &str, filter: &ListFilter) -> String {
    let day = filter.day.as_deref().and_then(DayOfWeek::parse);
    let days: Vec<&str> = DayOfWeek::ALL.iter().map(|d| d.as_str()).collect();
    format!(
        "{}{}",
        tables::filter_links(base, "day", &days, day.map(|d| d.as_str())),
        tables::classes_table(
            fixtures::classes()
                .iter()
                .filter(|c| day.is_none_or(|d| c.day == d))
        )
    )
}

/// Today's classes and the latest WOD, shared by the coach dashboard and
/// the athlete home.
pub fn today_overview() -> String {
    let today = DayOfWeek::from(chrono::Local::now().weekday());
    pages::day_overview(
        today.label(),
        &fixtures::classes_on(today),
        fixtures::latest_wod(),
    )
}
