//! Report downloads

use crate::{
    extractors::{ExtractorError, TableQuery},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use bureau_export::{ExportFormat, export_columns, export_rows};
use bureau_table::{bureau_usage_columns, unique_user_ids};
use std::sync::Arc;
use tracing::{info, warn};

/// Download the report in the format named by the path.
///
/// Exports the selected rows that pass the filters, or every filtered row
/// when none is selected. Columns follow the first fetched record.
pub async fn export_report(
    State(state): State<Arc<AppState>>,
    Path(format): Path<String>,
    query: TableQuery,
) -> Result<Response, ExtractorError> {
    let format: ExportFormat = format
        .parse()
        .map_err(|e: bureau_export::ExportError| ExtractorError::bad_request(e.to_string()))?;

    let records = state
        .load_report(&query.request, query.refresh)
        .await
        .map_err(|e| {
            warn!(error = %e, "Report fetch failed during export");
            ExtractorError::bad_gateway(e.to_string())
        })?;

    let columns = bureau_usage_columns(&unique_user_ids(&records));
    let table = query.build_table(&records, &columns);
    let rows = export_rows(&table);
    let fields = export_columns(&records);

    let download = format
        .render(&rows, &fields, &state.config.report.title)
        .map_err(|e| {
            warn!(error = %e, format = %format, "Export failed");
            ExtractorError::internal_error(format!("Failed to export report: {e}"))
        })?;

    info!(
        format = %format,
        rows = rows.len(),
        bytes = download.bytes.len(),
        "Report exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, download.content_type.to_string()),
            (header::CONTENT_DISPOSITION, download.content_disposition()),
        ],
        download.bytes,
    )
        .into_response())
}
