//! Output handler traits and types
//!
//! This module defines the error type shared by the report writers and the
//! trait a report sink implements.

use crate::output::report::ProductReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Something that persists a finished [`ProductReport`]
pub trait ReportWriter {
    /// Writes both sheets of the report
    fn write_report(&self, report: &ProductReport) -> OutputResult<()>;
}
