//! Delimited text (.csv) parsing
//! The first record is the header; remaining records are data rows. Ragged
//! records are accepted as-is and evened out later during projection.

use crate::error::MergeSheetError;
use crate::table::Table;
use csv::ReaderBuilder;

/// Parses CSV bytes into a table.
pub(crate) fn read_table(bytes: &[u8]) -> Result<Table, MergeSheetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns = reader
        .headers()?
        .iter()
        .map(|column| column.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|value| value.to_string()).collect());
    }
    Ok(Table::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table() {
        let bytes = b"Date,Name,Mobile Number\n2024-01-01,Alice,111\n2024-01-02,Bob,222\n";

        let table = read_table(bytes).unwrap();
        assert_eq!(table.columns(), &["Date".to_string(), "Name".to_string(), "Mobile Number".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], vec!["2024-01-02".to_string(), "Bob".to_string(), "222".to_string()]);
    }

    #[test]
    fn test_read_table_quoted_fields() {
        let bytes = b"Name,Note\n\"Doe, Jane\",\"said \"\"hi\"\"\"\n";

        let table = read_table(bytes).unwrap();
        assert_eq!(table.rows()[0], vec!["Doe, Jane".to_string(), "said \"hi\"".to_string()]);
    }

    #[test]
    fn test_read_table_ragged_rows() {
        let bytes = b"Date,Name,Mobile Number\n2024-01-01,Alice\n2024-01-02,Bob,222,extra\n";

        let table = read_table(bytes).unwrap();
        assert_eq!(table.rows()[0].len(), 2);
        assert_eq!(table.rows()[1].len(), 4);
    }

    #[test]
    fn test_read_table_crlf() {
        let bytes = b"Name\r\nAlice\r\nBob\r\n";

        let table = read_table(bytes).unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_read_table_strips_utf8_bom() {
        let bytes = b"\xef\xbb\xbfDate,Name,Mobile Number\n2024-01-01,Alice,111\n";

        let table = read_table(bytes).unwrap();
        assert_eq!(table.columns(), &["Date".to_string(), "Name".to_string(), "Mobile Number".to_string()]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_read_table_empty_input() {
        let table = read_table(b"").unwrap();
        assert!(table.is_empty());
    }
}
