//! Page handlers rendering the dashboard HTML

use crate::{
    extractors::TableQuery,
    pages::{render_not_found, render_report_page},
    routes::REPORT_PATH,
    state::AppState,
    view::{ReportBody, ReportPage, TableView},
};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect},
};
use bureau_table::{bureau_usage_columns, chart_bars, unique_user_ids};
use std::sync::Arc;
use tracing::{debug, warn};

/// `/` opens the bureau usage report
pub async fn index() -> Redirect {
    Redirect::to(REPORT_PATH)
}

/// Bureau usage report page: filter form, chart and table
pub async fn bureau_usage_report(
    State(state): State<Arc<AppState>>,
    query: TableQuery,
) -> Html<String> {
    let report = &state.config.report;

    let body = match state.load_report(&query.request, query.refresh).await {
        Ok(records) => {
            let columns = bureau_usage_columns(&unique_user_ids(&records));
            let table = query.build_table(&records, &columns);
            debug!(
                rows = records.len(),
                page = table.state().pagination.page_index + 1,
                "Rendering report table"
            );
            ReportBody::Loaded {
                fetched: records.len(),
                chart: chart_bars(&records),
                table: Box::new(TableView::build(
                    &table,
                    &query.request,
                    &report.page_size_options,
                )),
            }
        }
        Err(e) => {
            warn!(error = %e, "Report fetch failed");
            ReportBody::Failed(e.to_string())
        }
    };

    Html(render_report_page(ReportPage {
        title: report.title.clone(),
        request: query.request,
        body,
    }))
}

/// Any unknown path
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!(path = %uri.path(), "No route");
    (StatusCode::NOT_FOUND, Html(render_not_found(uri.path())))
}
