//! # Merge Module
//!
//! Drives the extract and merge flow. Every source is resolved into a table
//! and projected onto the required schema; the projected tables are then
//! concatenated row-wise in input order. A source that fails at any step is
//! recorded with a reason and skipped, it never aborts the run.

use crate::error::MergeSheetError;
use crate::source;
use crate::source::Source;
use crate::source::SourceError;
use crate::table::schema::RequiredSchema;
use crate::table::schema::SchemaError;
use crate::table::Table;
use log::debug;
use log::info;
use log::warn;
use thiserror::Error;

/// Why a source was left out of the merge
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// File extension is neither .csv nor .xlsx
    #[error("unsupported file type")]
    UnsupportedFileType,

    /// Header lacks one or more required columns
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Share link carries no document identifier
    #[error("invalid spreadsheet URL")]
    InvalidUrl,

    /// Fetching or parsing the source failed
    #[error("{0}")]
    FetchOrParse(String),
}

/// A source left out of the merge and the reason why
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedSource {
    pub source: String,
    pub reason: SkipReason,
}

/// Outcome of a merge run
#[derive(Debug)]
pub struct MergeReport {
    /// The merged table, or None when no source produced valid data
    pub merged: Option<Table>,
    /// Number of sources that contributed rows
    pub merged_sources: usize,
    /// Sources left out, in input order, with their reasons
    pub skipped: Vec<SkippedSource>,
}

/// Extracts the required columns from one source.
///
/// Resolves the source to its raw table and projects it onto the schema.
/// Any failure is folded into a [`SkipReason`] so the caller can record
/// it and move on to the next source.
pub fn extract_required_columns(source: &Source, schema: &RequiredSchema) -> Result<Table, SkipReason> {
    resolve_and_project(source, schema)
        .map_err(|error| skip_reason(error, matches!(source, Source::Url { .. })))
}

fn resolve_and_project(source: &Source, schema: &RequiredSchema) -> Result<Table, MergeSheetError> {
    let raw = source::resolve(source)?;
    Ok(schema.project(&raw)?)
}

fn skip_reason(error: MergeSheetError, is_url: bool) -> SkipReason {
    match error {
        MergeSheetError::SourceError(SourceError::UnsupportedFileTypeError(_)) => {
            SkipReason::UnsupportedFileType
        }
        MergeSheetError::SourceError(SourceError::InvalidSheetUrlError(_)) => SkipReason::InvalidUrl,
        MergeSheetError::SchemaError(SchemaError::MissingColumnsError { missing }) => {
            SkipReason::MissingColumns(missing)
        }
        // Remote fetches commonly fail because the sheet is private
        error if is_url => SkipReason::FetchOrParse(format!(
            "{error} (make sure the sheet is shared as link-accessible)"
        )),
        error => SkipReason::FetchOrParse(error.to_string()),
    }
}

/// Extracts and merges every source into one table.
///
/// Sources are processed in input order and their projected rows are
/// appended in that same order, renumbered densely. Failed sources are
/// collected in the report; `merged` is `None` only when no source at
/// all produced valid data.
pub fn merge_sources(sources: &[Source], schema: &RequiredSchema) -> MergeReport {
    let mut extracted = Vec::new();
    let mut skipped = Vec::new();
    for source in sources {
        match extract_required_columns(source, schema) {
            Ok(table) => {
                debug!("extracted {} row(s) from '{}'", table.row_count(), source.label());
                extracted.push(table);
            }
            Err(reason) => {
                warn!("skipped '{}': {}", source.label(), reason);
                skipped.push(SkippedSource {
                    source: source.label().to_owned(),
                    reason,
                });
            }
        }
    }

    let merged_sources = extracted.len();
    let merged = Table::concat(extracted);
    if let Some(table) = &merged {
        info!("merged {merged_sources} source(s) into {} row(s)", table.row_count());
    }
    MergeReport {
        merged,
        merged_sources,
        skipped,
    }
}
