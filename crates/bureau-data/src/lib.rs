//! Report data accessors for bureau usage reports
//!
//! A [`ReportSource`] turns a [`ReportRequest`] into the record set the page
//! renders. Two backends are provided: [`StubReportSource`], which returns a
//! fixed pair of sample rows, and [`HttpReportSource`], which queries a remote
//! reporting API.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod http;
pub mod source;
pub mod stub;

pub use bureau_core::{Record, ReportRequest};
pub use http::HttpReportSource;
pub use source::{ReportSource, fetch_report, source_from_config};
pub use stub::{StubReportSource, sample_records};
