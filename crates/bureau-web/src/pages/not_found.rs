//! 404 page

use crate::routes::REPORT_PATH;
use leptos::prelude::*;

/// Shown for any path without a route
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <section class="card not-found">
            <h1 class="page-title">"404 - Page Not Found"</h1>
            <p>{format!("No page exists at {path}.")}</p>
            <a class="btn primary" href=REPORT_PATH>"Go to Bureau Usage"</a>
        </section>
    }
}
