// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Standalone pages (sign-in, set-password) and dashboard bodies.

use axum::response::Html;

use super::{alert, document, escape, tables};
use crate::models::payment::format_amount;
use crate::models::{ClassSession, DashboardSummary, Wod};
use crate::time_utils::format_day;

/// Sign-in form. `email` is echoed back after a failed attempt.
pub fn signin_page(email: &str, error: Option<&str>) -> Html<String> {
    let body = format!(
        r#"<div class="auth">
<h1>Sign in</h1>
{alert}
<form class="form" method="post" action="/signin">
<label>Email<input type="email" name="email" value="{email}" autocomplete="username" required></label>
<label>Password<input type="password" name="password" autocomplete="current-password" required></label>
<button type="submit">Sign in</button>
</form>
</div>"#,
        alert = alert("error", error),
        email = escape(email),
    );
    document("Sign in", "", &body)
}

pub fn set_password_page(error: Option<&str>) -> Html<String> {
    let body = format!(
        r#"<div class="auth">
<h1>Choose a password</h1>
{alert}
<form class="form" method="post" action="/set-password">
<label>New password<input type="password" name="password" autocomplete="new-password" minlength="8" required></label>
<label>Confirm password<input type="password" name="confirm" autocomplete="new-password" minlength="8" required></label>
<button type="submit">Save password</button>
</form>
</div>"#,
        alert = alert("error", error),
    );
    document("Set password", "", &body)
}

fn card(label: &str, value: &str) -> String {
    format!(
        r#"<div class="card"><div class="card__label">{}</div><div class="card__value">{}</div></div>"#,
        escape(label),
        escape(value)
    )
}

fn wod_panel(wod: Option<&Wod>) -> String {
    match wod {
        Some(wod) => format!(
            r#"<section class="card"><h2>WOD · {}</h2><h3>{}</h3><p>{}</p></section>"#,
            format_day(wod.date),
            escape(&wod.title),
            escape(wod.notes.as_deref().unwrap_or(""))
        ),
        None => r#"<section class="card"><h2>WOD</h2><p>No workout programmed.</p></section>"#
            .to_string(),
    }
}

pub fn admin_dashboard(summary: &DashboardSummary) -> String {
    let mut cards = vec![
        card("Members", &summary.total_members.to_string()),
        card("Classes scheduled", &summary.scheduled_classes.to_string()),
        card("Full classes", &summary.full_classes.to_string()),
        card("Cancelled classes", &summary.cancelled_classes.to_string()),
        card("Pending payments", &summary.pending_payments.to_string()),
        card("Failed payments", &summary.failed_payments.to_string()),
    ];
    for (currency, cents) in &summary.revenue_by_currency {
        cards.push(card(
            &format!("Revenue ({})", currency.as_str()),
            &format_amount(*cents, *currency),
        ));
    }

    format!(
        r#"<div class="cards">{}</div>{}"#,
        cards.join(""),
        wod_panel(summary.latest_wod.as_ref())
    )
}

/// Coach dashboard and athlete home share the same body.
pub fn day_overview(day_label: &str, today: &[&ClassSession], latest_wod: Option<&Wod>) -> String {
    format!(
        r#"<section><h2>Today · {}</h2>{}</section>{}"#,
        escape(day_label),
        tables::classes_table(today.iter().copied()),
        wod_panel(latest_wod)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_signin_page_echoes_email_and_error() {
        let Html(page) = signin_page("a\"b@example.com", Some("Invalid login credentials"));
        assert!(page.contains(r#"value="a&quot;b@example.com""#));
        assert!(page.contains("Invalid login credentials"));
        assert!(page.contains(r#"action="/signin""#));
    }

    #[test]
    fn test_admin_dashboard_shows_revenue_per_currency() {
        let summary = DashboardSummary::compute(
            fixtures::members(),
            fixtures::classes(),
            fixtures::payments(),
            fixtures::wods(),
        );
        let html = admin_dashboard(&summary);

        assert!(html.contains(
            r#"<div class="card__label">Classes scheduled</div><div class="card__value">7</div>"#
        ));
        assert!(html.contains("Revenue (EUR)"));
        assert!(html.contains("Revenue (USD)"));
        assert!(html.contains("Partner Chipper"));
    }
}
