//! Root document component: the app shell with sidebar navigation

use super::{ICON_BUILDING, ICON_LOG_OUT, ICON_MOON, ICON_REPORT, Icon};
use crate::routes::REPORT_PATH;
use crate::styles::{DASHBOARD_CSS, DASHBOARD_SCRIPT};
use leptos::prelude::*;

/// Sidebar links as `(path, label)`
const NAV_LINKS: [(&str, &str); 1] = [(REPORT_PATH, "Bureau Usage")];

/// The complete HTML document around a page
#[component]
pub fn Document(
    /// Browser tab title
    title: String,
    /// Path of the current page, marks the active sidebar link
    active_path: String,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{DASHBOARD_CSS}</style>
            </head>
            <body>
                <div class="app-shell">
                    <aside class="app-sidebar">
                        <div class="brand">
                            <Icon path=ICON_BUILDING />
                            " "
                            <span>"Invoicify Pro"</span>
                        </div>

                        <nav class="sidebar-nav">
                            {NAV_LINKS
                                .iter()
                                .map(|(path, label)| {
                                    let class = if *path == active_path {
                                        "nav-item active"
                                    } else {
                                        "nav-item"
                                    };
                                    view! {
                                        <a class=class href=*path>
                                            <Icon path=ICON_REPORT />
                                            " "
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </nav>

                        <div class="sidebar-footer">
                            <button class="btn" type="button" data-role="theme-toggle" title="Toggle theme">
                                <Icon path=ICON_MOON />
                                "Toggle theme"
                            </button>
                            <button class="btn" type="button" aria-label="Log out">
                                <Icon path=ICON_LOG_OUT />
                                "Log out"
                            </button>
                        </div>
                    </aside>

                    <main class="app-main">{children()}</main>
                </div>
                <script>{DASHBOARD_SCRIPT}</script>
            </body>
        </html>
    }
}
