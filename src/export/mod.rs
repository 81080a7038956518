//! # Export Module
//!
//! Renders the merged table into downloadable artifacts. Both artifacts
//! carry the same rows: a CSV text file and an XLSX workbook with a single
//! "MergedData" worksheet. Generation is pure, the same table always
//! produces the same artifact.

pub mod csv;
pub mod xlsx;

use thiserror::Error;

/// File name of the CSV artifact
pub const CSV_FILE_NAME: &str = "merged_output.csv";
/// MIME type of the CSV artifact
pub const CSV_MIME_TYPE: &str = "text/csv";
/// File name of the XLSX artifact
pub const XLSX_FILE_NAME: &str = "merged_output.xlsx";
/// MIME type of the XLSX artifact
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Custom error types for artifact generation.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed
    #[error("Write csv output failed: {0}")]
    CsvError(#[from] ::csv::Error),

    /// Flushing the CSV buffer failed
    #[error("Write csv output failed: {0}")]
    CsvBufferError(#[from] std::io::Error),

    /// XLSX workbook generation failed
    #[error("Write xlsx output failed: {0}")]
    WorkbookError(#[from] rust_xlsxwriter::XlsxError),
}

/// A generated downloadable artifact
#[derive(Clone, Debug)]
pub struct ExportArtifact {
    /// Fixed artifact file name
    pub file_name: &'static str,
    /// MIME type for download delivery
    pub mime_type: &'static str,
    /// Artifact contents
    pub bytes: Vec<u8>,
}
