//! Required schema validation and projection
//! A source qualifies when its header contains every required column by exact
//! name; qualifying tables are projected down to the required columns only.

use crate::table::Table;
use thiserror::Error;

/// Columns every source must provide, in output order
pub const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Name", "Mobile Number"];

/// Errors specific to schema validation
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Missing required column(s): {}", .missing.join(", "))]
    MissingColumnsError { missing: Vec<String> },
}

/// Ordered set of column names a source table must contain
#[derive(Clone, Debug)]
pub struct RequiredSchema {
    columns: Vec<String>,
}

impl Default for RequiredSchema {
    fn default() -> RequiredSchema {
        RequiredSchema::new(REQUIRED_COLUMNS.iter().map(|name| name.to_string()).collect())
    }
}

impl RequiredSchema {
    pub fn new(columns: Vec<String>) -> RequiredSchema {
        RequiredSchema { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Projects a table down to the schema columns, in schema order
    ///
    /// Matching is case-sensitive on exact names; extra source columns are
    /// dropped. When the same name occurs twice in the source header the
    /// first occurrence wins. Fails listing every absent column when the
    /// source header does not cover the schema.
    pub fn project(&self, table: &Table) -> Result<Table, SchemaError> {
        let mut indexes = Vec::with_capacity(self.columns.len());
        let mut missing = Vec::new();
        for name in &self.columns {
            match table.columns().iter().position(|column| column == name) {
                Some(index) => indexes.push(index),
                None => missing.push(name.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumnsError { missing });
        }

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                indexes
                    .iter()
                    .map(|&index| row.get(index).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Ok(Table::new(self.columns.clone(), rows))
    }
}
