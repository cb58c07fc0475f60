// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form renderers. Values are rendered back as submitted.

use super::{alert, escape};
use crate::fixtures;
use crate::forms::{ClassForm, MemberForm, PaymentForm, StaffForm, WodForm};
use crate::models::{
    ClassStatus, Currency, DayOfWeek, PaymentMethod, PaymentStatus, StaffRole, StaffStatus,
};

/// Invalid fields of the current submission, empty on first render.
pub type Invalid<'a> = &'a [String];

fn invalid_class(invalid: Invalid<'_>, name: &str) -> &'static str {
    if invalid.iter().any(|f| f == name) {
        r#" class="is-invalid" aria-invalid="true""#
    } else {
        ""
    }
}

fn input(kind: &str, name: &str, label: &str, value: &str, invalid: Invalid<'_>) -> String {
    format!(
        r#"<label>{label}<input type="{kind}" name="{name}" value="{value}"{class}></label>"#,
        label = escape(label),
        kind = kind,
        name = name,
        value = escape(value),
        class = invalid_class(invalid, name),
    )
}

fn textarea(name: &str, label: &str, value: &str, invalid: Invalid<'_>) -> String {
    format!(
        r#"<label>{}<textarea name="{}"{}>{}</textarea></label>"#,
        escape(label),
        name,
        invalid_class(invalid, name),
        escape(value)
    )
}

/// Select with a placeholder option so an empty value stays representable.
fn select(
    name: &str,
    label: &str,
    options: &[(&str, &str)],
    value: &str,
    invalid: Invalid<'_>,
) -> String {
    let mut opts = vec![format!(
        r#"<option value=""{}>Choose…</option>"#,
        if value.is_empty() { " selected" } else { "" }
    )];
    for (option_value, option_label) in options {
        opts.push(format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape(option_value),
            if *option_value == value { " selected" } else { "" },
            escape(option_label)
        ));
    }
    format!(
        r#"<label>{}<select name="{}"{}>{}</select></label>"#,
        escape(label),
        name,
        invalid_class(invalid, name),
        opts.join("")
    )
}

fn form(action: &str, submit: &str, invalid: Invalid<'_>, fields: &[String]) -> String {
    let message = if invalid.is_empty() {
        None
    } else {
        Some(format!("Please check: {}", invalid.join(", ")))
    };
    format!(
        r#"{alert}<form class="form" method="post" action="{action}">
{fields}
<button type="submit">{submit}</button>
</form>"#,
        alert = alert("error", message.as_deref()),
        action = escape(action),
        fields = fields.join("\n"),
        submit = escape(submit),
    )
}

fn same<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, &'a str)> {
    values.into_iter().map(|v| (v, v)).collect()
}

pub fn member_form(action: &str, data: &MemberForm, invalid: Invalid<'_>) -> String {
    form(
        action,
        "Save member",
        invalid,
        &[
            input("text", "name", "Name", &data.name, invalid),
            input("email", "email", "Email", &data.email, invalid),
        ],
    )
}

pub fn class_form(action: &str, data: &ClassForm, invalid: Invalid<'_>) -> String {
    let days: Vec<_> = DayOfWeek::ALL.iter().map(|d| (d.as_str(), d.label())).collect();
    form(
        action,
        "Save class",
        invalid,
        &[
            input("text", "name", "Name", &data.name, invalid),
            select("day", "Day", &days, &data.day, invalid),
            input("time", "time", "Time", &data.time, invalid),
            select(
                "status",
                "Status",
                &same(ClassStatus::ALL.iter().map(|s| s.as_str())),
                &data.status,
                invalid,
            ),
        ],
    )
}

pub fn payment_form(action: &str, data: &PaymentForm, invalid: Invalid<'_>) -> String {
    let members: Vec<_> = fixtures::members()
        .iter()
        .map(|m| (m.id.as_str(), m.name.as_str()))
        .collect();
    form(
        action,
        "Record payment",
        invalid,
        &[
            select("member_id", "Member", &members, &data.member_id, invalid),
            input("text", "amount", "Amount", &data.amount, invalid),
            select(
                "currency",
                "Currency",
                &same(Currency::ALL.iter().map(|c| c.as_str())),
                &data.currency,
                invalid,
            ),
            select(
                "method",
                "Method",
                &same(PaymentMethod::ALL.iter().map(|m| m.as_str())),
                &data.method,
                invalid,
            ),
            select(
                "status",
                "Status",
                &same(PaymentStatus::ALL.iter().map(|s| s.as_str())),
                &data.status,
                invalid,
            ),
            input("date", "date", "Date", &data.date, invalid),
            textarea("notes", "Notes", &data.notes, invalid),
        ],
    )
}

pub fn staff_form(action: &str, data: &StaffForm, invalid: Invalid<'_>) -> String {
    form(
        action,
        "Save staff member",
        invalid,
        &[
            input("text", "name", "Name", &data.name, invalid),
            input("email", "email", "Email", &data.email, invalid),
            input("tel", "phone", "Phone", &data.phone, invalid),
            select(
                "role",
                "Role",
                &same(StaffRole::ALL.iter().map(|r| r.as_str())),
                &data.role,
                invalid,
            ),
            select(
                "status",
                "Status",
                &same(StaffStatus::ALL.iter().map(|s| s.as_str())),
                &data.status,
                invalid,
            ),
        ],
    )
}

pub fn wod_form(action: &str, data: &WodForm, invalid: Invalid<'_>) -> String {
    form(
        action,
        "Save WOD",
        invalid,
        &[
            input("date", "date", "Date", &data.date, invalid),
            input("text", "title", "Title", &data.title, invalid),
            textarea("notes", "Notes", &data.notes, invalid),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_staff_form_has_no_selection() {
        let html = staff_form("/admin/staff/nope/edit", &StaffForm::default(), &[]);

        assert!(html.contains(r#"name="name" value="""#));
        assert!(html.contains(r#"name="email" value="""#));
        assert!(html.contains(r#"<option value="" selected>Choose…</option>"#));
        assert!(!html.contains("alert--error"));
    }

    #[test]
    fn test_invalid_fields_are_marked() {
        let data = MemberForm {
            name: "Ana".to_string(),
            email: "nope".to_string(),
        };
        let html = member_form("/admin/members/new", &data, &["email".to_string()]);

        assert!(html.contains(r#"name="email" value="nope" class="is-invalid""#));
        assert!(html.contains("Please check: email"));
    }
}
