//! # Input Source Module
//!
//! A source is either an in-memory file (name plus raw bytes) or a
//! spreadsheet share link. Resolving a source yields its raw table:
//! files dispatch on their extension, links are translated to a CSV
//! export URL and fetched over HTTP.

pub(crate) mod delimited;
pub mod sheet_url;

use crate::error::MergeSheetError;
use crate::error::ResultMessage;
use crate::helpers::fetch;
use crate::spreadsheet;
use crate::table::Table;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Custom error types for source handling.
#[derive(Error, Debug)]
pub enum SourceError {
    /// File extension is neither .csv nor .xlsx
    #[error("Unsupported file type: '{0}'")]
    UnsupportedFileTypeError(String),

    /// Share link carries no document identifier
    #[error("Invalid spreadsheet URL: '{0}'")]
    InvalidSheetUrlError(String),
}

/// A single input to the merge
#[derive(Clone, Debug)]
pub enum Source {
    /// An uploaded file with its raw contents
    File { name: String, content: Vec<u8> },
    /// A spreadsheet share link
    Url { url: String },
}

impl Source {
    pub fn file(name: &str, content: Vec<u8>) -> Source {
        Source::File {
            name: name.to_owned(),
            content,
        }
    }

    pub fn url(url: &str) -> Source {
        Source::Url { url: url.to_owned() }
    }

    /// Reads a file source from disk.
    pub fn from_path(path: &Path) -> Result<Source, MergeSheetError> {
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .map(str::to_owned)
            .unwrap_or_else(|| path.display().to_string());
        let content = fs::read(path)
            .map_err(MergeSheetError::IoError)
            .with_prefix(&format!("Read '{}'", path.display()))?;
        Ok(Source::File { name, content })
    }

    /// Display label used in logs and skip reports.
    pub fn label(&self) -> &str {
        match self {
            Source::File { name, .. } => name,
            Source::Url { url } => url,
        }
    }
}

/// Extracts the raw table from a source.
///
/// Files are parsed according to their extension (`.csv` or `.xlsx`,
/// matched case-insensitively); anything else is unsupported. Share
/// links are validated and translated before any network access, then
/// the export is fetched and parsed as CSV.
pub fn resolve(source: &Source) -> Result<Table, MergeSheetError> {
    match source {
        Source::File { name, content } => {
            let suffix = Path::new(name)
                .extension()
                .and_then(OsStr::to_str)
                .map(str::to_ascii_lowercase);
            match suffix.as_deref() {
                Some("csv") => delimited::read_table(content).with_prefix(name),
                Some("xlsx") => spreadsheet::read_table(name, content, None),
                _ => Err(SourceError::UnsupportedFileTypeError(name.to_owned()))?,
            }
        }
        Source::Url { url } => {
            let export_url = sheet_url::to_export_url(url)?;
            let bytes = fetch::fetch_bytes(&export_url)?;
            delimited::read_table(&bytes).with_prefix(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_csv_file() {
        let source = Source::file("contacts.csv", b"Name\nAlice\n".to_vec());

        let table = resolve(&source).unwrap();
        assert_eq!(table.columns(), &["Name".to_string()]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_resolve_matches_extension_case_insensitively() {
        let source = Source::file("CONTACTS.CSV", b"Name\nAlice\n".to_vec());

        assert!(resolve(&source).is_ok());
    }

    #[test]
    fn test_resolve_rejects_unsupported_extension() {
        let source = Source::file("notes.txt", b"whatever".to_vec());

        let error = resolve(&source).unwrap_err();
        assert!(error.to_string().contains("Unsupported file type"));
    }

    #[test]
    fn test_resolve_rejects_invalid_url_before_fetching() {
        let source = Source::url("https://example.com/not-a-sheet");

        let error = resolve(&source).unwrap_err();
        assert!(error.to_string().contains("Invalid spreadsheet URL"));
    }

    #[test]
    fn test_label() {
        assert_eq!(Source::file("a.csv", Vec::new()).label(), "a.csv");
        assert_eq!(Source::url("https://docs.google.com/spreadsheets/d/X/edit").label(), "https://docs.google.com/spreadsheets/d/X/edit");
    }
}
