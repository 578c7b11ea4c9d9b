//! Integration tests for the dashboard pages, JSON API and health routes

mod common;

use axum::http::{StatusCode, header};
use common::{empty_app, failing_app, get, get_html, stub_app};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_root_redirects_to_report() {
    let (status, headers, _) = get(stub_app(), "/").await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/reports/bureau-usage");
}

#[tokio::test]
async fn test_report_page_renders_table_and_chart() {
    let (status, html) = get_html(stub_app(), "/reports/bureau-usage").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-row="0""#));
    assert!(html.contains(r#"data-row="1""#));
    assert!(html.contains("Report Count by User"));
    assert!(html.contains(r#"data-user="user123""#));
    assert!(html.contains(r#"data-user="user456""#));
    assert!(html.contains("Page 1 of 1"));
    assert!(html.contains("0 of 2 row(s) selected."));
    assert!(!html.contains(r#"rel="next""#));
    assert!(!html.contains(r#"rel="prev""#));
}

#[tokio::test]
async fn test_title_filter_narrows_rows_and_highlights() {
    let (status, html) = get_html(stub_app(), "/reports/bureau-usage?filter.Title=report+1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-row="0""#));
    assert!(!html.contains(r#"data-row="1""#));
    assert!(html.contains("<mark>Report 1</mark>"));
    assert!(html.contains("0 of 1 row(s) selected."));
    // The chart reflects the fetched report, not the filtered table
    assert!(html.contains(r#"data-user="user456""#));
}

#[tokio::test]
async fn test_global_filter_without_matches_shows_no_results() {
    let (status, html) = get_html(stub_app(), "/reports/bureau-usage?q=zzz").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No results."));
    assert!(!html.contains("data-row="));
}

#[tokio::test]
async fn test_sort_descending_by_value() {
    let (_, html) = get_html(stub_app(), "/reports/bureau-usage?sort=Value&desc=1").await;

    let first = html.find(r#"data-row="1""#).unwrap();
    let second = html.find(r#"data-row="0""#).unwrap();
    assert!(first < second);
    assert!(html.contains(r#"aria-sort="descending""#));
}

#[tokio::test]
async fn test_select_all_marks_every_row() {
    let (_, html) = get_html(stub_app(), "/reports/bureau-usage?toggle_page=all").await;

    assert!(html.contains("2 of 2 row(s) selected."));
    assert_eq!(html.matches(r#"class="selected""#).count(), 2);
}

#[tokio::test]
async fn test_hidden_column_is_not_rendered() {
    let (_, html) = get_html(stub_app(), "/reports/bureau-usage?hide=Category").await;

    assert!(!html.contains("category a"));
    assert!(html.contains("Report 1"));
}

#[tokio::test]
async fn test_unlisted_page_size_is_rejected() {
    let (status, _, _) = get(stub_app(), "/reports/bureau-usage?page_size=15").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fetch_failure_renders_error_panel() {
    let (status, html) = get_html(failing_app(), "/reports/bureau-usage").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("upstream unavailable"));
    assert!(!html.contains("Report Count by User"));
    assert!(!html.contains("data-row="));
}

#[tokio::test]
async fn test_api_returns_records() {
    let (status, headers, body) = get(stub_app(), "/api/reports/bureau-usage?Category=ALL+CATEGORY").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    let records: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["UserId"], "user123");
}

#[tokio::test]
async fn test_api_fetch_failure_is_bad_gateway() {
    let (status, _, body) = get(failing_app(), "/api/reports/bureau-usage").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "REPORT_FETCH_FAILED");
}

#[tokio::test]
async fn test_health_check() {
    let (status, _, body) = get(stub_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["source"], "stub");
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let (status, html) = get_html(stub_app(), "/reports/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("404 - Page Not Found"));
}

#[tokio::test]
async fn test_empty_report_shows_empty_panel_and_table() {
    let (status, html) = get_html(empty_app(), "/reports/bureau-usage").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No data available for the selected filters."));
    assert!(html.contains("No results."));
    assert!(html.contains("0 of 0 row(s) selected."));
    assert!(!html.contains("Report Count by User"));
    assert!(!html.contains("data-row="));
}
