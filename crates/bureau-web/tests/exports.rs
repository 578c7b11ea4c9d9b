//! Integration tests for report downloads

mod common;

use axum::http::{StatusCode, header};
use common::{failing_app, get, pdf_occurrences, pdf_text, stub_app, zip_entry};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Non-empty CSV lines: the header plus one per exported row
fn csv_lines(body: Vec<u8>) -> usize {
    String::from_utf8(body)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .count()
}

/// Spreadsheet rows, header included
fn xlsx_rows(body: &[u8]) -> usize {
    let sheet = String::from_utf8(zip_entry(body, "xl/worksheets/sheet1.xml")).unwrap();
    sheet.matches("<row ").count()
}

#[tokio::test]
async fn test_csv_export_of_filtered_rows() {
    let (status, headers, body) = get(stub_app(), "/reports/bureau-usage/export/csv").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        r#"attachment; filename="bureau_usage_report.csv""#
    );
    let text = String::from_utf8(body).unwrap();
    assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 3);
    assert!(text.contains("user123"));
    assert!(text.contains("user456"));
}

#[tokio::test]
async fn test_csv_export_prefers_selection() {
    let (_, _, body) = get(stub_app(), "/reports/bureau-usage/export/csv?select=1").await;

    let text = String::from_utf8(body).unwrap();
    assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 2);
    assert!(text.contains("user456"));
    assert!(!text.contains("user123"));
}

#[tokio::test]
async fn test_unknown_export_format_is_rejected() {
    let (status, _, _) = get(stub_app(), "/reports/bureau-usage/export/docx").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_fetch_failure_is_bad_gateway() {
    let (status, _, _) = get(failing_app(), "/reports/bureau-usage/export/csv").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[rstest]
#[case("toggle_page=all")]
#[case("select=0&select=1")]
#[tokio::test]
async fn test_select_all_exports_both_rows_in_every_format(#[case] query: &str) {
    let (_, _, csv) = get(stub_app(), &format!("/reports/bureau-usage/export/csv?{query}")).await;
    assert_eq!(csv_lines(csv), 3);

    let (status, headers, xlsx) =
        get(stub_app(), &format!("/reports/bureau-usage/export/xlsx?{query}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        r#"attachment; filename="BureauUsageReport.xlsx""#
    );
    assert!(xlsx.starts_with(b"PK\x03\x04"));
    assert_eq!(xlsx_rows(&xlsx), 3);

    let (status, headers, pdf) =
        get(stub_app(), &format!("/reports/bureau-usage/export/pdf?{query}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
    assert!(pdf.starts_with(b"%PDF"));
    let text = pdf_text(&pdf);
    assert_eq!(pdf_occurrences(&text, "user123"), 1);
    assert_eq!(pdf_occurrences(&text, "user456"), 1);
}

#[tokio::test]
async fn test_single_selection_exports_one_row_in_every_format() {
    let uri = |format: &str| format!("/reports/bureau-usage/export/{format}?select=1");

    let (_, _, csv) = get(stub_app(), &uri("csv")).await;
    assert_eq!(csv_lines(csv), 2);

    let (_, _, xlsx) = get(stub_app(), &uri("xlsx")).await;
    assert_eq!(xlsx_rows(&xlsx), 2);

    let (_, _, pdf) = get(stub_app(), &uri("pdf")).await;
    let text = pdf_text(&pdf);
    assert_eq!(pdf_occurrences(&text, "user123"), 0);
    assert_eq!(pdf_occurrences(&text, "user456"), 1);
}

#[tokio::test]
async fn test_export_skips_selected_rows_hidden_by_filters() {
    let (_, _, csv) = get(
        stub_app(),
        "/reports/bureau-usage/export/csv?select=1&filter.Title=report+1",
    )
    .await;

    // The only selected row is filtered out, so the filtered rows export
    let text = String::from_utf8(csv).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("user123"));
    assert!(!text.contains("user456"));
}
