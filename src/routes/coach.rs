// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coach area pages.

use axum::{
    extract::{Form, Query},
    response::{Html, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use super::page::{class_list, today_overview, ListFilter, PageCtx};
use crate::fixtures;
use crate::forms::WodForm;
use crate::views::{action_link, forms, tables};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/coach/dashboard", get(dashboard))
        .route("/coach/classes", get(classes))
        .route("/coach/wods", get(wods))
        .route("/coach/wods/new", get(new_wod).post(create_wod))
        .route("/coach/members", get(members))
}

async fn dashboard(ctx: PageCtx) -> Html<String> {
    ctx.render("Dashboard", &today_overview())
}

async fn classes(ctx: PageCtx, Query(filter): Query<ListFilter>) -> Html<String> {
    ctx.render("Classes", &class_list("/coach/classes", &filter))
}

async fn wods(ctx: PageCtx) -> Html<String> {
    let content = format!(
        "{}{}",
        action_link("/coach/wods/new", "Program WOD"),
        tables::wods_table(fixtures::wods_newest_first())
    );
    ctx.render("WODs", &content)
}

async fn new_wod(ctx: PageCtx) -> Html<String> {
    ctx.render(
        "New WOD",
        &forms::wod_form("/coach/wods/new", &WodForm::default(), &[]),
    )
}

async fn create_wod(ctx: PageCtx, Form(form): Form<WodForm>) -> Response {
    ctx.submit(&form, "New WOD", "/coach/wods", |invalid| {
        forms::wod_form("/coach/wods/new", &form, invalid)
    })
}

async fn members(ctx: PageCtx) -> Html<String> {
    ctx.render("Athletes", &tables::members_table(fixtures::members()))
}
