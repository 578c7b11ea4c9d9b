//! CSV, XLSX and PDF export of bureau usage reports
//!
//! All generators are synchronous and pure: they take records and an ordered
//! column list and return the file contents. Zero records produce a valid,
//! header-only document.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod delimited;
pub mod error;
pub mod format;
pub mod pdf;
pub mod scope;
pub mod spreadsheet;

pub use delimited::to_csv;
pub use error::{ExportError, ExportResult};
pub use format::{Download, ExportFormat};
pub use pdf::to_pdf_document;
pub use scope::{export_columns, export_rows};
pub use spreadsheet::to_spreadsheet;
