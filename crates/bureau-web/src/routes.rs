//! Route definitions for the dashboard

use crate::{
    handlers::{api, export, health, pages},
    state::AppState,
};
use axum::{Router, routing::get};
use bureau_export::ExportFormat;
use std::sync::Arc;

/// Path of the bureau usage report page
pub const REPORT_PATH: &str = "/reports/bureau-usage";

/// Path of the JSON report endpoint
pub const REPORT_API_PATH: &str = "/api/reports/bureau-usage";

/// Download path of the report in `format`
pub fn export_path(format: ExportFormat) -> String {
    format!("{REPORT_PATH}/export/{format}")
}

/// Build the complete application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Navigation shell
        .route("/", get(pages::index))
        // Report page and downloads
        .route(REPORT_PATH, get(pages::bureau_usage_report))
        .route(
            "/reports/bureau-usage/export/:format",
            get(export::export_report),
        )
        // JSON API
        .route(REPORT_API_PATH, get(api::bureau_usage_report))
        // Health check
        .route("/health", get(health::health_check))
        .fallback(pages::not_found)
}
