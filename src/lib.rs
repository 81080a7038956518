//! # MergeSheet
//!
//! Extracts a fixed set of columns from heterogeneous tabular sources and
//! merges them into one table, exported as both CSV and XLSX.
//!
//! ## Features
//!
//! - **Multi-format sources**: In-memory `.csv` and `.xlsx` files plus
//!   Google Sheets share links fetched as CSV exports
//! - **Schema validation**: Sources qualify only when their header carries
//!   every required column (`Date`, `Name`, `Mobile Number`), matched by
//!   exact name
//! - **Fault tolerance**: A bad source is skipped with a recorded reason,
//!   it never aborts the run
//! - **Dual export**: The merged rows render as `merged_output.csv` and as
//!   `merged_output.xlsx` with a single `MergedData` worksheet
//! - **Pure Rust xlsx reader**: Streaming XML parser with shared string and
//!   number format handling, no spreadsheet runtime required
//!
//! ## Flow
//!
//! Build [`Source`] values, run [`merge_sources`] against the
//! [`RequiredSchema`], then hand the merged [`Table`] to the generators in
//! [`export`].

mod error;
mod helpers;

pub mod export;
pub mod merge;
pub mod source;
pub mod spreadsheet;
pub mod table;

pub use crate::error::MergeSheetError;
pub use crate::error::ResultMessage;
pub use crate::export::ExportArtifact;
pub use crate::export::ExportError;
pub use crate::helpers::fetch::FetchError;
pub use crate::helpers::xml::XmlError;
pub use crate::merge::merge_sources;
pub use crate::merge::MergeReport;
pub use crate::merge::SkipReason;
pub use crate::merge::SkippedSource;
pub use crate::source::Source;
pub use crate::source::SourceError;
pub use crate::spreadsheet::SpreadsheetError;
pub use crate::table::schema::RequiredSchema;
pub use crate::table::schema::SchemaError;
pub use crate::table::schema::REQUIRED_COLUMNS;
pub use crate::table::Table;
