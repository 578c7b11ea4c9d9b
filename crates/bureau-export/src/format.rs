//! Export formats and rendered downloads

use crate::error::{ExportError, ExportResult};
use crate::{to_csv, to_pdf_document, to_spreadsheet};
use bureau_core::Record;
use std::{fmt, str::FromStr};
use tracing::debug;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Comma-separated text
    Csv,
    /// Excel workbook
    Xlsx,
    /// PDF document
    Pdf,
}

impl ExportFormat {
    /// Every format, in menu order
    pub const ALL: [Self; 3] = [Self::Csv, Self::Xlsx, Self::Pdf];

    /// Path segment and query value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "Export CSV",
            Self::Xlsx => "Export Excel (XLSX)",
            Self::Pdf => "Export PDF",
        }
    }

    /// Name of the saved file
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "bureau_usage_report.csv",
            Self::Xlsx => "BureauUsageReport.xlsx",
            Self::Pdf => "bureau_usage_report.pdf",
        }
    }

    /// MIME type of the file
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
        }
    }

    /// Render `records` restricted to `columns`; `title` is used by PDF only
    pub fn render(self, records: &[&Record], columns: &[String], title: &str) -> ExportResult<Download> {
        debug!(
            format = self.as_str(),
            rows = records.len(),
            columns = columns.len(),
            "Rendering export"
        );
        let rows = records.iter().copied();
        let bytes = match self {
            Self::Csv => to_csv(rows, columns).into_bytes(),
            Self::Xlsx => to_spreadsheet(rows, columns)?,
            Self::Pdf => to_pdf_document(rows, columns, title)?,
        };
        Ok(Download {
            file_name: self.file_name(),
            content_type: self.content_type(),
            bytes,
        })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// A rendered file ready to be saved by the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name
    pub file_name: &'static str,
    /// MIME type
    pub content_type: &'static str,
    /// File contents
    pub bytes: Vec<u8>,
}

impl Download {
    /// `Content-Disposition` value that makes the browser save the file
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}
