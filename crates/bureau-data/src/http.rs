//! HTTP client for a remote bureau usage reporting API

use crate::ReportSource;
use async_trait::async_trait;
use bureau_core::{Error, Record, ReportRequest, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the report endpoint, relative to the base URL
pub const REPORT_PATH: &str = "/api/reports/bureau-usage";

/// Report source backed by a single GET against a reporting API
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    client: Client,
    base_url: String,
}

impl HttpReportSource {
    /// Create a source for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the report endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{REPORT_PATH}", self.base_url)
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch_report(&self, request: &ReportRequest) -> Result<Vec<Record>> {
        let url = self.endpoint();
        debug!(%url, ?request, "Requesting bureau usage report");

        let response = self
            .client
            .get(&url)
            .query(request)
            .send()
            .await
            .map_err(|e| Error::DataSource(format!("Failed to fetch report: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Report API returned an error");
            return Err(Error::DataSource(format!("API returned error: {status}")));
        }

        let records: Vec<Record> = response
            .json()
            .await
            .map_err(|e| Error::DataSource(format!("Failed to parse report: {e}")))?;

        debug!(count = records.len(), "Report fetched");
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ReportRequest {
        ReportRequest {
            search_criteria: Some("usage".to_string()),
            category: Some("Category A".to_string()),
            date_from: Some("2024-01-01".to_string()),
            date_to: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_request_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(REPORT_PATH))
            .and(query_param("SearchCriteria", "usage"))
            .and(query_param("Category", "Category A"))
            .and(query_param("DateFrom", "2024-01-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"UserId": "u1", "Title": "Remote", "Value": 10, "Region": "West"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpReportSource::new(server.uri(), 5).unwrap();
        let records = source.fetch_report(&request()).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title(), Some("Remote"));
        let names: Vec<&str> = records[0].field_names().collect();
        assert_eq!(names, vec!["UserId", "Title", "Value", "Region"]);
    }

    #[tokio::test]
    async fn test_error_status_becomes_data_source_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(REPORT_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpReportSource::new(server.uri(), 5).unwrap();
        let err = source.fetch_report(&request()).await.unwrap_err();

        assert!(matches!(err, Error::DataSource(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_undecodable_body_becomes_data_source_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(REPORT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = HttpReportSource::new(server.uri(), 5).unwrap();
        let err = source.fetch_report(&request()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse report"));
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_data_source_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let source = HttpReportSource::new("http://127.0.0.1:9", 1).unwrap();
        let err = source.fetch_report(&request()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to fetch report"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let source = HttpReportSource::new("http://reports.local/", 5).unwrap();
        assert_eq!(
            source.endpoint(),
            "http://reports.local/api/reports/bureau-usage"
        );
    }
}
