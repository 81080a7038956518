//! Low-level helpers shared by the source and spreadsheet layers:
//! HTTP fetching plus the XML and ZIP plumbing under the xlsx reader.

pub mod fetch;
pub mod xml;
pub mod zip;
