// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete area pages (read-only).

use axum::{extract::Query, response::Html, routing::get, Router};
use std::sync::Arc;

use super::page::{class_list, today_overview, ListFilter, PageCtx};
use crate::fixtures;
use crate::views::tables;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/athlete/home", get(home))
        .route("/athlete/classes", get(classes))
        .route("/athlete/wods", get(wods))
}

async fn home(ctx: PageCtx) -> Html<String> {
    ctx.render("Home", &today_overview())
}

async fn classes(ctx: PageCtx, Query(filter): Query<ListFilter>) -> Html<String> {
    ctx.render("Classes", &class_list("/athlete/classes", &filter))
}

async fn wods(ctx: PageCtx) -> Html<String> {
    ctx.render("WODs", &tables::wods_table(fixtures::wods_newest_first()))
}
