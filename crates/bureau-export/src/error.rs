//! Export error types

use thiserror::Error;

/// Errors raised while generating export documents
#[derive(Error, Debug)]
pub enum ExportError {
    /// Spreadsheet backend failure
    #[error("Spreadsheet generation failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// PDF backend failure
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// More columns than a worksheet holds
    #[error("Too many columns for a worksheet: {0}")]
    TooManyColumns(usize),

    /// More rows than a worksheet holds
    #[error("Too many rows for a worksheet: {0}")]
    TooManyRows(usize),

    /// Requested format is not supported
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

impl From<ExportError> for bureau_core::Error {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}
