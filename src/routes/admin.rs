// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin area pages.
//!
//! Every route here sits behind the role guard (see routes/mod.rs).

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use super::page::{class_list, ListFilter, PageCtx};
use crate::fixtures;
use crate::forms::{ClassForm, MemberForm, PaymentForm, StaffForm, WodForm};
use crate::models::{DashboardSummary, PaymentStatus};
use crate::views::{action_link, alert, forms, pages, tables};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/members", get(members))
        .route("/admin/members/new", get(new_member).post(create_member))
        .route("/admin/classes", get(classes))
        .route("/admin/classes/new", get(new_class).post(create_class))
        .route("/admin/payments", get(payments))
        .route("/admin/payments/new", get(new_payment).post(create_payment))
        .route("/admin/staff", get(staff))
        .route("/admin/staff/new", get(new_staff).post(create_staff))
        .route("/admin/staff/{id}/edit", get(edit_staff).post(update_staff))
        .route("/admin/wods", get(wods))
        .route("/admin/wods/new", get(new_wod).post(create_wod))
        .route("/admin/programs", get(programs))
}

async fn dashboard(ctx: PageCtx) -> Html<String> {
    let summary = DashboardSummary::compute(
        fixtures::members(),
        fixtures::classes(),
        fixtures::payments(),
        fixtures::wods(),
    );
    ctx.render("Dashboard", &pages::admin_dashboard(&summary))
}

// ─── Members ─────────────────────────────────────────────────

async fn members(ctx: PageCtx) -> Html<String> {
    let content = format!(
        "{}{}",
        action_link("/admin/members/new", "Add member"),
        tables::members_table(fixtures::members())
    );
    ctx.render("Members", &content)
}

async fn new_member(ctx: PageCtx) -> Html<String> {
    ctx.render(
        "New member",
        &forms::member_form("/admin/members/new", &MemberForm::default(), &[]),
    )
}

async fn create_member(ctx: PageCtx, Form(form): Form<MemberForm>) -> Response {
    ctx.submit(&form, "New member", "/admin/members", |invalid| {
        forms::member_form("/admin/members/new", &form, invalid)
    })
}

// ─── Classes ─────────────────────────────────────────────────

async fn classes(ctx: PageCtx, Query(filter): Query<ListFilter>) -> Html<String> {
    let content = format!(
        "{}{}",
        action_link("/admin/classes/new", "Add class"),
        class_list("/admin/classes", &filter)
    );
    ctx.render("Classes", &content)
}

async fn new_class(ctx: PageCtx) -> Html<String> {
    ctx.render(
        "New class",
        &forms::class_form("/admin/classes/new", &ClassForm::default(), &[]),
    )
}

async fn create_class(ctx: PageCtx, Form(form): Form<ClassForm>) -> Response {
    ctx.submit(&form, "New class", "/admin/classes", |invalid| {
        forms::class_form("/admin/classes/new", &form, invalid)
    })
}

// ─── Payments ────────────────────────────────────────────────

async fn payments(ctx: PageCtx, Query(filter): Query<ListFilter>) -> Html<String> {
    let status = filter.status.as_deref().and_then(PaymentStatus::parse);
    let statuses: Vec<&str> = PaymentStatus::ALL.iter().map(|s| s.as_str()).collect();
    let content = format!(
        "{}{}{}",
        action_link("/admin/payments/new", "Record payment"),
        tables::filter_links(
            "/admin/payments",
            "status",
            &statuses,
            status.map(|s| s.as_str())
        ),
        tables::payments_table(
            fixtures::payments()
                .iter()
                .filter(|p| status.is_none_or(|s| p.status == s))
        )
    );
    ctx.render("Payments", &content)
}

async fn new_payment(ctx: PageCtx) -> Html<String> {
    ctx.render(
        "New payment",
        &forms::payment_form("/admin/payments/new", &PaymentForm::default(), &[]),
    )
}

async fn create_payment(ctx: PageCtx, Form(form): Form<PaymentForm>) -> Response {
    ctx.submit(&form, "New payment", "/admin/payments", |invalid| {
        forms::payment_form("/admin/payments/new", &form, invalid)
    })
}

// ─── Staff ───────────────────────────────────────────────────

async fn staff(ctx: PageCtx) -> Html<String> {
    let content = format!(
        "{}{}",
        action_link("/admin/staff/new", "Add staff member"),
        tables::staff_table(fixtures::staff())
    );
    ctx.render("Staff", &content)
}

async fn new_staff(ctx: PageCtx) -> Html<String> {
    ctx.render(
        "New staff member",
        &forms::staff_form("/admin/staff/new", &StaffForm::default(), &[]),
    )
}

async fn create_staff(ctx: PageCtx, Form(form): Form<StaffForm>) -> Response {
    ctx.submit(&form, "New staff member", "/admin/staff", |invalid| {
        forms::staff_form("/admin/staff/new", &form, invalid)
    })
}

fn edit_staff_route(id: &str) -> String {
    format!("/admin/staff/{}/edit", urlencoding::encode(id))
}

/// Edit form for a staff member. An unknown id gets an empty form.
async fn edit_staff(ctx: PageCtx, Path(id): Path<String>) -> Html<String> {
    let form = StaffForm::for_staff(fixtures::find_staff(&id));
    ctx.render(
        "Edit staff member",
        &forms::staff_form(&edit_staff_route(&id), &form, &[]),
    )
}

async fn update_staff(
    ctx: PageCtx,
    Path(id): Path<String>,
    Form(form): Form<StaffForm>,
) -> Response {
    let action = edit_staff_route(&id);
    ctx.submit(&form, "Edit staff member", "/admin/staff", |invalid| {
        forms::staff_form(&action, &form, invalid)
    })
}

// ─── WODs ────────────────────────────────────────────────────

async fn wods(ctx: PageCtx) -> Html<String> {
    let content = format!(
        "{}{}",
        action_link("/admin/wods/new", "Add WOD"),
        tables::wods_table(fixtures::wods_newest_first())
    );
    ctx.render("WODs", &content)
}

async fn new_wod(ctx: PageCtx) -> Html<String> {
    ctx.render(
        "New WOD",
        &forms::wod_form("/admin/wods/new", &WodForm::default(), &[]),
    )
}

async fn create_wod(ctx: PageCtx, Form(form): Form<WodForm>) -> Response {
    ctx.submit(&form, "New WOD", "/admin/wods", |invalid| {
        forms::wod_form("/admin/wods/new", &form, invalid)
    })
}

// ─── Programs ────────────────────────────────────────────────

/// Remote program list; a backend failure is shown inline.
async fn programs(State(state): State<Arc<AppState>>, ctx: PageCtx) -> Html<String> {
    let content = match state.programs.list().await {
        Ok(programs) => tables::programs_table(&programs),
        Err(e) => {
            tracing::warn!(error = %e, "Could not load programs");
            alert("error", Some(&format!("Could not load programs: {}", e)))
        }
    };
    ctx.render("Programs", &content)
}
