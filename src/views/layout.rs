// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role-based layout shell: sidebar navigation, header and content region.

use axum::response::Html;

use super::{document, escape};
use crate::models::Role;

/// Route that flips the sidebar between expanded and collapsed.
pub const SIDEBAR_TOGGLE_ROUTE: &str = "/ui/sidebar";

/// Sidebar UI state for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Desktop sidebar pinned open
    pub expanded: bool,
    /// Pointer over a collapsed sidebar
    pub hovered: bool,
    /// Mobile overlay open
    pub mobile_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            expanded: true,
            hovered: false,
            mobile_open: false,
        }
    }
}

/// Left margin of the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMargin {
    /// Mobile overlay open: content takes the full width
    None,
    Collapsed,
    Expanded,
}

impl ContentMargin {
    pub const COLLAPSED_PX: u32 = 80;
    pub const EXPANDED_PX: u32 = 256;

    pub fn px(&self) -> u32 {
        match self {
            ContentMargin::None => 0,
            ContentMargin::Collapsed => Self::COLLAPSED_PX,
            ContentMargin::Expanded => Self::EXPANDED_PX,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ContentMargin::None => "content--full",
            ContentMargin::Collapsed => "content--collapsed",
            ContentMargin::Expanded => "content--expanded",
        }
    }
}

/// Margin for the content region. An open mobile overlay wins over the
/// desktop expand/hover state.
pub fn content_margin(state: &UiState) -> ContentMargin {
    if state.mobile_open {
        ContentMargin::None
    } else if state.expanded || state.hovered {
        ContentMargin::Expanded
    } else {
        ContentMargin::Collapsed
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/admin/dashboard" },
    NavItem { label: "Members", href: "/admin/members" },
    NavItem { label: "Classes", href: "/admin/classes" },
    NavItem { label: "Payments", href: "/admin/payments" },
    NavItem { label: "Staff", href: "/admin/staff" },
    NavItem { label: "WODs", href: "/admin/wods" },
    NavItem { label: "Programs", href: "/admin/programs" },
];

const COACH_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/coach/dashboard" },
    NavItem { label: "Classes", href: "/coach/classes" },
    NavItem { label: "WODs", href: "/coach/wods" },
    NavItem { label: "Athletes", href: "/coach/members" },
];

const ATHLETE_NAV: &[NavItem] = &[
    NavItem { label: "Home", href: "/athlete/home" },
    NavItem { label: "Classes", href: "/athlete/classes" },
    NavItem { label: "WODs", href: "/athlete/wods" },
];

/// Navigation items for a role's sidebar.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Coach => COACH_NAV,
        Role::Athlete => ATHLETE_NAV,
    }
}

/// Whether `item` should be highlighted for `path`.
pub fn is_active(item: &NavItem, path: &str) -> bool {
    path == item.href
        || path
            .strip_prefix(item.href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Everything the shell needs besides the page body.
pub struct Shell<'a> {
    pub role: Role,
    pub ui: UiState,
    /// Current request path, for the active item and the toggle's return
    pub path: &'a str,
    /// Raw query string of the request, empty if none
    pub query: &'a str,
    pub title: &'a str,
    pub user_email: &'a str,
}

/// `path` with its query kept except for the `menu` flag, which is set
/// only when `menu_open`.
pub fn page_href(path: &str, query: &str, menu_open: bool) -> String {
    let mut pairs: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && *pair != "menu" && !pair.starts_with("menu="))
        .collect();
    if menu_open {
        pairs.push("menu=open");
    }
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, pairs.join("&"))
    }
}

/// Render a page inside the role shell.
pub fn shell(shell: &Shell<'_>, content: &str) -> Html<String> {
    let margin = content_margin(&shell.ui);
    let sidebar_class = if shell.ui.expanded || shell.ui.hovered {
        "sidebar sidebar--expanded"
    } else {
        "sidebar"
    };
    let body_class = if shell.ui.mobile_open { "menu-open" } else { "" };

    let nav: String = nav_items(shell.role)
        .iter()
        .map(|item| {
            let class = if is_active(item, shell.path) {
                r#" class="is-active""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{}>{}</a>"#, item.href, class, item.label)
        })
        .collect();

    let toggle_label = if shell.ui.expanded { "Collapse" } else { "Expand" };
    let here = page_href(shell.path, shell.query, false);
    let menu_link = if shell.ui.mobile_open {
        format!(r#"<a href="{}">Close menu</a>"#, escape(&here))
    } else {
        format!(
            r#"<a href="{}">Menu</a>"#,
            escape(&page_href(shell.path, shell.query, true))
        )
    };

    let body = format!(
        r#"<aside class="{sidebar_class}">
<div class="sidebar__brand">Boxboard · {role}</div>
<nav class="sidebar__nav">{nav}</nav>
<form class="sidebar__toggle" method="post" action="{toggle}">
<input type="hidden" name="return_to" value="{path}">
<button type="submit">{toggle_label}</button>
</form>
</aside>
<main class="content {margin}" data-margin-px="{margin_px}">
<header class="header">
<span class="header__menu">{menu_link}</span>
<h1>{title}</h1>
<span class="header__user">{email}
<form method="post" action="/signout"><button type="submit">Sign out</button></form>
</span>
</header>
{content}
</main>"#,
        sidebar_class = sidebar_class,
        role = shell.role.label(),
        nav = nav,
        toggle = SIDEBAR_TOGGLE_ROUTE,
        path = escape(&here),
        toggle_label = toggle_label,
        margin = margin.css_class(),
        margin_px = margin.px(),
        menu_link = menu_link,
        title = escape(shell.title),
        email = escape(shell.user_email),
        content = content,
    );

    document(shell.title, body_class, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui(expanded: bool, hovered: bool, mobile_open: bool) -> UiState {
        UiState {
            expanded,
            hovered,
            mobile_open,
        }
    }

    #[test]
    fn test_mobile_open_always_full_width() {
        for expanded in [false, true] {
            for hovered in [false, true] {
                assert_eq!(
                    content_margin(&ui(expanded, hovered, true)),
                    ContentMargin::None
                );
            }
        }
        assert_eq!(ContentMargin::None.px(), 0);
    }

    #[test]
    fn test_expanded_or_hovered_uses_expanded_margin() {
        assert_eq!(content_margin(&ui(true, false, false)), ContentMargin::Expanded);
        assert_eq!(content_margin(&ui(false, true, false)), ContentMargin::Expanded);
        assert_eq!(content_margin(&ui(true, true, false)), ContentMargin::Expanded);
        assert_eq!(content_margin(&ui(false, false, false)), ContentMargin::Collapsed);
    }

    #[test]
    fn test_nav_items_per_role() {
        let labels = |role| nav_items(role).iter().map(|i| i.label).collect::<Vec<_>>();

        assert_eq!(
            labels(Role::Admin),
            vec!["Dashboard", "Members", "Classes", "Payments", "Staff", "WODs", "Programs"]
        );
        assert_eq!(labels(Role::Coach), vec!["Dashboard", "Classes", "WODs", "Athletes"]);
        assert_eq!(labels(Role::Athlete), vec!["Home", "Classes", "WODs"]);

        for role in Role::ALL {
            assert!(nav_items(role)
                .iter()
                .all(|i| Role::for_path(i.href) == Some(role)));
        }
    }

    #[test]
    fn test_is_active_matches_prefix_segments_only() {
        let staff = NavItem { label: "Staff", href: "/admin/staff" };
        assert!(is_active(&staff, "/admin/staff"));
        assert!(is_active(&staff, "/admin/staff/s1/edit"));
        assert!(!is_active(&staff, "/admin/staffing"));
        assert!(!is_active(&staff, "/admin/members"));
    }

    #[test]
    fn test_shell_renders_margin_and_active_item() {
        let Html(page) = shell(
            &Shell {
                role: Role::Coach,
                ui: ui(false, false, false),
                path: "/coach/wods",
                query: "",
                title: "WODs",
                user_email: "coach@example.com",
            },
            "<p>body</p>",
        );

        assert!(page.contains("content--collapsed"));
        assert!(page.contains(r#"data-margin-px="80""#));
        assert!(page.contains(r#"<a href="/coach/wods" class="is-active">WODs</a>"#));
        assert!(!page.contains("/admin/"));
        assert!(page.contains("<p>body</p>"));
    }

    #[test]
    fn test_page_href_keeps_filters() {
        assert_eq!(page_href("/admin/payments", "", true), "/admin/payments?menu=open");
        assert_eq!(
            page_href("/admin/payments", "status=paid", true),
            "/admin/payments?status=paid&menu=open"
        );
        assert_eq!(
            page_href("/admin/payments", "status=paid&menu=open", false),
            "/admin/payments?status=paid"
        );
        assert_eq!(page_href("/athlete/classes", "menu=open", false), "/athlete/classes");
    }

    #[test]
    fn test_shell_links_carry_query() {
        let Html(page) = shell(
            &Shell {
                role: Role::Admin,
                ui: ui(true, false, false),
                path: "/admin/payments",
                query: "status=paid",
                title: "Payments",
                user_email: "admin@example.com",
            },
            "",
        );

        assert!(page.contains(r#"<a href="/admin/payments?status=paid&amp;menu=open">Menu</a>"#));
        assert!(page.contains(r#"name="return_to" value="/admin/payments?status=paid""#));
    }
}
