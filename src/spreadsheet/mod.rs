//! # Spreadsheet Processing Module
//!
//! Reads Excel (.xlsx) workbooks from in-memory bytes and converts worksheets
//! into tables. Handles workbook relationships, shared strings, number format
//! detection and cell value rendering through a streaming XML parser.

mod cell;
mod reference;
mod sheet;
mod xlsx;

use crate::error::MergeSheetError;
use crate::table::Table;
use thiserror::Error;

pub use crate::spreadsheet::xlsx::XlsxWorkbook;

/// Custom error types for spreadsheet operations.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// A required archive member could not be read
    #[error("Read '{0}' failed")]
    FileError(String),

    /// Workbook defines no worksheets
    #[error("Spreadsheet has no worksheets: '{0}'")]
    SpreadsheetEmptyError(String),

    /// Requested worksheet does not exist in the workbook
    #[error("Sheet '{1}' not found in '{0}'")]
    SheetNotFoundError(String, String),

    /// Cell value could not be rendered as display text
    #[error("Invalid cell value at {2} in '{0}' sheet '{1}': {3}")]
    CellValueError(String, String, String, String),

    /// Shared string reference points outside the shared string table
    #[error("Shared string index '{0}' out of range")]
    SharedStringError(String),
}

/// Reads one worksheet of an XLSX workbook as a table.
///
/// The first occupied row becomes the header. Passing `None` for
/// `sheet_name` reads the first worksheet. A worksheet without any
/// cells yields an empty table.
pub fn read_table(file_name: &str, bytes: &[u8], sheet_name: Option<&str>) -> Result<Table, MergeSheetError> {
    let mut workbook = XlsxWorkbook::open(file_name, bytes.to_vec())?;
    let shared_strings = workbook.load_shared_strings()?;
    let sheet = workbook.read_sheet(sheet_name)?;
    sheet.to_table(&shared_strings)
}
