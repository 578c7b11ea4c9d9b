//! JSON report endpoint
//!
//! Serves the same records the page renders, so one deployment can act as
//! the remote source of another.

use crate::{
    extractors::{ExtractorError, table_query::is_truthy},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    response::Json,
};
use bureau_core::{Record, ReportRequest};
use std::sync::Arc;
use tracing::warn;

/// Query keys: `SearchCriteria`, `Category`, `DateFrom`, `DateTo`, and
/// `refresh` to bypass the cache
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ReportQuery {
    /// Report filters
    #[serde(flatten)]
    pub request: ReportRequest,
    /// Bypass the cache
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Report records as a JSON array
pub async fn bureau_usage_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<Record>>, ExtractorError> {
    let refresh = query.refresh.as_deref().is_some_and(is_truthy);

    match state.load_report(&query.request, refresh).await {
        Ok(records) => Ok(Json(records.as_ref().clone())),
        Err(e) => {
            warn!(error = %e, "Report fetch failed");
            Err(ExtractorError::bad_gateway(e.to_string()))
        }
    }
}
