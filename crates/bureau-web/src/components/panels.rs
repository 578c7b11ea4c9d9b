//! Status panels

use leptos::prelude::*;

/// Fetch failure; the message is shown as received
#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <section class="card panel-error" role="alert">
            <h2>"Error"</h2>
            <p>{message}</p>
        </section>
    }
}

/// The fetch returned no records
#[component]
pub fn EmptyPanel() -> impl IntoView {
    view! {
        <p class="card panel-empty">"No data available for the selected filters."</p>
    }
}
