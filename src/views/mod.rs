// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-side HTML rendering.
//!
//! Views are plain functions from data to markup; they never touch the
//! request or the backend. All text coming from data passes through
//! [`escape`].

pub mod forms;
pub mod layout;
pub mod pages;
pub mod tables;

use axum::response::Html;

/// Stylesheet served at [`STYLESHEET_ROUTE`].
pub const STYLESHEET: &str = include_str!("app.css");
pub const STYLESHEET_ROUTE: &str = "/assets/app.css";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a body in a complete HTML document.
pub fn document(title: &str, body_class: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Boxboard</title>
<link rel="stylesheet" href="{css}">
</head>
<body class="{body_class}">
{body}
</body>
</html>
"#,
        title = escape(title),
        css = STYLESHEET_ROUTE,
        body_class = escape(body_class),
        body = body,
    ))
}

/// Inline alert box; empty when there is no message.
pub fn alert(kind: &str, message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            r#"<div class="alert alert--{}" role="alert">{}</div>"#,
            escape(kind),
            escape(message)
        ),
        None => String::new(),
    }
}

/// Button-styled link shown above a list, e.g. "Add member".
pub fn action_link(href: &str, label: &str) -> String {
    format!(
        r#"<p class="actions"><a class="button" href="{}">{}</a></p>"#,
        escape(href),
        escape(label)
    )
}
