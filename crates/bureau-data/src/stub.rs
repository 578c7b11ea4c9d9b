//! Stub report source returning fixed sample rows

use crate::ReportSource;
use async_trait::async_trait;
use bureau_core::{Record, ReportRequest, Result, types::fields};
use tracing::info;

/// The two sample rows every stub fetch returns
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new()
            .with(fields::USER_ID, "user123")
            .with(fields::TITLE, "Report 1")
            .with(fields::CATEGORY, "Category A")
            .with(fields::DATE, "2024-01-15")
            .with(fields::VALUE, 123),
        Record::new()
            .with(fields::USER_ID, "user456")
            .with(fields::TITLE, "Report 2")
            .with(fields::CATEGORY, "Category B")
            .with(fields::DATE, "2024-02-20")
            .with(fields::VALUE, 456),
    ]
}

/// Report source that ignores the request and returns [`sample_records`]
#[derive(Debug, Clone, Default)]
pub struct StubReportSource {
    _private: (),
}

impl StubReportSource {
    /// Create a stub source
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ReportSource for StubReportSource {
    async fn fetch_report(&self, request: &ReportRequest) -> Result<Vec<Record>> {
        info!(
            search_criteria = request.search_criteria.as_deref(),
            category = request.category.as_deref(),
            date_from = request.date_from.as_deref(),
            date_to = request.date_to.as_deref(),
            "Fetching bureau usage report"
        );
        Ok(sample_records())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
