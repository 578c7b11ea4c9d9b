//! Shared helpers for the dashboard integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use bureau_core::{Config, Error, Record, ReportRequest};
use bureau_data::{ReportSource, StubReportSource};
use bureau_web::build_app_with_source;
use flate2::read::{DeflateDecoder, ZlibDecoder};
use std::io::Read;
use std::sync::Arc;
use tower::ServiceExt;

/// Source that always fails the way an unreachable backend would
pub struct FailingSource;

#[async_trait]
impl ReportSource for FailingSource {
    async fn fetch_report(&self, _request: &ReportRequest) -> bureau_core::Result<Vec<Record>> {
        Err(Error::DataSource("upstream unavailable".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Source whose reports never contain any rows
pub struct EmptySource;

#[async_trait]
impl ReportSource for EmptySource {
    async fn fetch_report(&self, _request: &ReportRequest) -> bureau_core::Result<Vec<Record>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "empty"
    }
}

pub fn stub_app() -> Router {
    build_app_with_source(Config::default(), Arc::new(StubReportSource::new()))
}

pub fn failing_app() -> Router {
    build_app_with_source(Config::default(), Arc::new(FailingSource))
}

pub fn empty_app() -> Router {
    build_app_with_source(Config::default(), Arc::new(EmptySource))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

pub async fn get_html(app: Router, uri: &str) -> (StatusCode, String) {
    let (status, _, body) = get(app, uri).await;
    (status, String::from_utf8(body).unwrap())
}

/// Contents of `name` inside a zip archive, located through the central
/// directory so entries written with data descriptors still resolve
pub fn zip_entry(bytes: &[u8], name: &str) -> Vec<u8> {
    let u16_at = |i: usize| usize::from(u16::from_le_bytes([bytes[i], bytes[i + 1]]));
    let u32_at = |i: usize| {
        usize::try_from(u32::from_le_bytes(bytes[i..i + 4].try_into().unwrap())).unwrap()
    };

    let end = (0..=bytes.len() - 22)
        .rev()
        .find(|&i| bytes[i..i + 4] == [0x50, 0x4b, 0x05, 0x06])
        .unwrap();
    let entries = u16_at(end + 10);
    let mut at = u32_at(end + 16);

    for _ in 0..entries {
        assert_eq!(bytes[at..at + 4], [0x50, 0x4b, 0x01, 0x02]);
        let method = u16_at(at + 10);
        let compressed = u32_at(at + 20);
        let name_len = u16_at(at + 28);
        let extra_len = u16_at(at + 30);
        let comment_len = u16_at(at + 32);
        let local = u32_at(at + 42);

        if &bytes[at + 46..at + 46 + name_len] == name.as_bytes() {
            let start = local + 30 + u16_at(local + 26) + u16_at(local + 28);
            let data = &bytes[start..start + compressed];
            return match method {
                0 => data.to_vec(),
                8 => {
                    let mut out = Vec::new();
                    DeflateDecoder::new(data).read_to_end(&mut out).unwrap();
                    out
                }
                other => panic!("unsupported zip compression method {other}"),
            };
        }
        at += 46 + name_len + extra_len + comment_len;
    }
    panic!("{name} not found in archive");
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Raw PDF text plus every stream that inflates, so page content can be
/// searched whether or not it was compressed
pub fn pdf_text(bytes: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(bytes).into_owned();
    let mut rest = bytes;

    while let Some(start) = find(rest, b"stream") {
        let body = &rest[start + b"stream".len()..];
        let body = body
            .strip_prefix(b"\r\n")
            .or_else(|| body.strip_prefix(b"\n"))
            .unwrap_or(body);
        let Some(end) = find(body, b"endstream") else {
            break;
        };

        let mut out = Vec::new();
        if ZlibDecoder::new(&body[..end]).read_to_end(&mut out).is_ok() {
            text.push_str(&String::from_utf8_lossy(&out));
        }
        rest = &body[end + b"endstream".len()..];
    }
    text
}

/// Occurrences of `needle` in PDF text, whether written as a literal or a
/// hex string
pub fn pdf_occurrences(text: &str, needle: &str) -> usize {
    let hex: String = needle.bytes().map(|b| format!("{b:02X}")).collect();
    text.matches(needle).count()
        + text.matches(hex.as_str()).count()
        + text.matches(hex.to_lowercase().as_str()).count()
}
