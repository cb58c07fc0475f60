// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Table renderers for the list pages.

use super::escape;
use crate::fixtures;
use crate::models::{ClassSession, Member, Payment, Program, StaffMember, Wod};
use crate::time_utils::{format_clock, format_day, format_utc_rfc3339};

fn table(headers: &[&str], rows: Vec<String>, empty: &str) -> String {
    if rows.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, escape(empty));
    }
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    format!(
        "<table>\n<thead><tr>{}</tr></thead>\n<tbody>\n{}\n</tbody>\n</table>",
        head,
        rows.join("\n")
    )
}

fn badge(value: &str) -> String {
    format!(
        r#"<span class="badge badge--{}">{}</span>"#,
        escape(&value.to_lowercase()),
        escape(value)
    )
}

pub fn members_table(members: &[Member]) -> String {
    let rows = members
        .iter()
        .map(|m| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&m.id),
                escape(&m.name),
                escape(&m.email)
            )
        })
        .collect();
    table(&["ID", "Name", "Email"], rows, "No members yet.")
}

pub fn classes_table<'a>(classes: impl IntoIterator<Item = &'a ClassSession>) -> String {
    let rows = classes
        .into_iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&c.name),
                c.day.label(),
                format_clock(c.time),
                badge(c.status.as_str())
            )
        })
        .collect();
    table(&["Class", "Day", "Time", "Status"], rows, "No classes.")
}

pub fn payments_table<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> String {
    let rows = payments
        .into_iter()
        .map(|p| {
            let member = fixtures::member_name(&p.member_id)
                .map(escape)
                .unwrap_or_else(|| format!("Unknown ({})", escape(&p.member_id)));
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                format_day(p.date),
                member,
                escape(&p.display_amount()),
                p.method.as_str(),
                badge(p.status.as_str()),
                p.currency.as_str(),
                escape(p.notes.as_deref().unwrap_or(""))
            )
        })
        .collect();
    table(
        &["Date", "Member", "Amount", "Method", "Status", "Currency", "Notes"],
        rows,
        "No payments.",
    )
}

pub fn staff_table(staff: &[StaffMember]) -> String {
    let rows = staff
        .iter()
        .map(|s| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href="/admin/staff/{}/edit">Edit</a></td></tr>"#,
                escape(&s.name),
                escape(&s.email),
                escape(&s.phone),
                s.role.as_str(),
                badge(s.status.as_str()),
                format_utc_rfc3339(s.created_at),
                urlencoding::encode(&s.id)
            )
        })
        .collect();
    table(
        &["Name", "Email", "Phone", "Role", "Status", "Since", ""],
        rows,
        "No staff.",
    )
}

pub fn wods_table<'a>(wods: impl IntoIterator<Item = &'a Wod>) -> String {
    let rows = wods
        .into_iter()
        .map(|w| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                format_day(w.date),
                escape(&w.title),
                escape(w.notes.as_deref().unwrap_or(""))
            )
        })
        .collect();
    table(&["Date", "Workout", "Notes"], rows, "No workouts programmed.")
}

pub fn programs_table(programs: &[Program]) -> String {
    let rows = programs
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(&p.id),
                escape(&p.name)
            )
        })
        .collect();
    table(&["ID", "Name"], rows, "No programs.")
}

/// Filter links above a list; `current` is the selected value, if any.
pub fn filter_links(base: &str, param: &str, options: &[&str], current: Option<&str>) -> String {
    let mut links = vec![format!(
        r#"<a href="{}"{}>All</a>"#,
        escape(base),
        if current.is_none() { r#" class="is-active""# } else { "" }
    )];
    for option in options {
        links.push(format!(
            r#"<a href="{}?{}={}"{}>{}</a>"#,
            escape(base),
            escape(param),
            urlencoding::encode(option),
            if current == Some(*option) { r#" class="is-active""# } else { "" },
            escape(option)
        ));
    }
    format!(r#"<div class="filters">{}</div>"#, links.join(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_table_escapes_and_lists_all() {
        let members = vec![Member {
            id: "m1".to_string(),
            name: "<script>".to_string(),
            email: "x@example.com".to_string(),
        }];
        let html = members_table(&members);

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert_eq!(html.matches("<tr><td>").count(), 1);
    }

    #[test]
    fn test_empty_table_message() {
        assert!(members_table(&[]).contains("No members yet."));
    }

    #[test]
    fn test_payments_table_unknown_member() {
        let html = payments_table(fixtures::payments());
        assert!(html.contains("Unknown (m9)"));
        assert!(html.contains("€65.00"));
    }

    #[test]
    fn test_staff_table_links_to_edit() {
        let html = staff_table(fixtures::staff());
        assert!(html.contains(r#"href="/admin/staff/s1/edit""#));
    }

    #[test]
    fn test_filter_links_mark_current() {
        let html = filter_links("/admin/payments", "status", &["paid", "pending"], Some("paid"));
        assert!(html.contains(r#"<a href="/admin/payments?status=paid" class="is-active">paid</a>"#));
        assert!(html.contains(r#"<a href="/admin/payments">All</a>"#));
    }
}
