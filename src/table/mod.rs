//! In-memory tabular data model
//! A table is an ordered header row plus zero or more data rows of text cells.

pub mod schema;

/// Rectangular text table with named columns
///
/// Rows are stored in source order and addressed by their dense position,
/// so concatenating tables renumbers every row from zero without gaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        Table { columns, rows }
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in source order, excluding the header
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether the table has neither columns nor rows
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Concatenates tables row-wise, keeping the first table's header
    ///
    /// Inputs must share one schema; rows are appended in input order and
    /// renumbered densely. Returns `None` when no tables are given.
    pub fn concat(tables: Vec<Table>) -> Option<Table> {
        let mut iter = tables.into_iter();
        let mut merged = iter.next()?;
        for table in iter {
            merged.rows.extend(table.rows);
        }
        Some(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_concat_appends_rows_in_order() {
        let first = Table::new(
            row(&["Date", "Name", "Mobile Number"]),
            vec![row(&["2024-01-01", "Alice", "111"]), row(&["2024-01-02", "Bob", "222"])],
        );
        let second = Table::new(
            row(&["Date", "Name", "Mobile Number"]),
            vec![row(&["2024-02-01", "Carol", "333"])],
        );

        let merged = Table::concat(vec![first, second]).unwrap();
        assert_eq!(merged.columns(), &row(&["Date", "Name", "Mobile Number"]));
        assert_eq!(merged.row_count(), 3);
        assert_eq!(merged.rows()[0][1], "Alice");
        assert_eq!(merged.rows()[2][1], "Carol");
    }

    #[test]
    fn test_concat_keeps_duplicate_rows() {
        let table = Table::new(
            row(&["Name"]),
            vec![row(&["Alice"])],
        );

        let merged = Table::concat(vec![table.clone(), table]).unwrap();
        assert_eq!(merged.row_count(), 2);
        assert_eq!(merged.rows()[0], merged.rows()[1]);
    }

    #[test]
    fn test_concat_empty_input() {
        assert_eq!(Table::concat(Vec::new()), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(Table::new(Vec::new(), Vec::new()).is_empty());
        assert!(!Table::new(row(&["Name"]), Vec::new()).is_empty());
    }
}
