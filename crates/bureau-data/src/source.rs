//! The report source trait and source selection

use crate::{HttpReportSource, StubReportSource};
use async_trait::async_trait;
use bureau_core::{
    Record, ReportRequest, Result,
    config::{DataConfig, DataSourceKind},
};
use std::sync::Arc;

/// Backend that produces bureau usage records for a filter request
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the records matching `request`.
    ///
    /// Implementations may ignore parts of the request the backend does not
    /// understand. Failures surface as [`bureau_core::Error::DataSource`].
    async fn fetch_report(&self, request: &ReportRequest) -> Result<Vec<Record>>;

    /// Short backend name used in logs
    fn name(&self) -> &'static str;
}

/// Fetch a report through any source
pub async fn fetch_report(
    source: &dyn ReportSource,
    request: &ReportRequest,
) -> Result<Vec<Record>> {
    source.fetch_report(request).await
}

/// Build the source selected by the data configuration
pub fn source_from_config(config: &DataConfig) -> Result<Arc<dyn ReportSource>> {
    match config.source {
        DataSourceKind::Stub => Ok(Arc::new(StubReportSource::new())),
        DataSourceKind::Http => {
            let base_url = config.base_url.as_deref().ok_or_else(|| {
                bureau_core::Error::Configuration {
                    message: "data.base_url is required for the http source".to_string(),
                }
            })?;
            let source = HttpReportSource::new(base_url, config.timeout_secs)?;
            Ok(Arc::new(source))
        }
    }
}
