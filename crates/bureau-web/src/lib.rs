//! Server-rendered bureau usage reporting dashboard
//!
//! Pages are rendered with Leptos on the server and served by axum. All table
//! interaction (sorting, filtering, selection, paging, column visibility) is
//! carried in the query string, so every view of the report is a plain link.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value
)]

pub mod components;
pub mod extractors;
pub mod handlers;
pub mod links;
pub mod pages;
pub mod routes;
pub mod state;
pub mod styles;
pub mod view;

pub use state::AppState;

use axum::Router;
use bureau_core::Config;
use bureau_data::{ReportSource, source_from_config};
use std::sync::Arc;

/// Build the application router, choosing the report source from configuration
///
/// # Errors
///
/// Returns an error if the configured report source cannot be constructed.
pub fn build_app(config: Config) -> bureau_core::Result<Router> {
    let source = source_from_config(&config.data)?;
    Ok(build_app_with_source(config, source))
}

/// Build the application router around an explicit report source
pub fn build_app_with_source(config: Config, source: Arc<dyn ReportSource>) -> Router {
    let state = Arc::new(AppState::new(config, source));
    routes::build_routes().with_state(state)
}
