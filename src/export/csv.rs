//! CSV artifact generation

use crate::export::ExportArtifact;
use crate::export::ExportError;
use crate::export::CSV_FILE_NAME;
use crate::export::CSV_MIME_TYPE;
use crate::table::Table;
use csv::WriterBuilder;

/// Renders the table as the CSV artifact.
///
/// The header record comes first, then the data rows in table order.
/// Fields are quoted only where the CSV grammar requires it.
pub fn generate(table: &Table) -> Result<ExportArtifact, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    // Check for error rather than implicitly flushing and ignoring.
    writer.flush()?;
    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    Ok(ExportArtifact {
        file_name: CSV_FILE_NAME,
        mime_type: CSV_MIME_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_generate() {
        let table = Table::new(
            row(&["Date", "Name", "Mobile Number"]),
            vec![
                row(&["2024-01-01", "Alice", "111"]),
                row(&["2024-01-02", "Doe, Jane", "222"]),
            ],
        );

        let artifact = generate(&table).unwrap();
        assert_eq!(artifact.file_name, "merged_output.csv");
        assert_eq!(artifact.mime_type, "text/csv");
        assert_eq!(
            String::from_utf8(artifact.bytes).unwrap(),
            "Date,Name,Mobile Number\n2024-01-01,Alice,111\n2024-01-02,\"Doe, Jane\",222\n"
        );
    }

    #[test]
    fn test_generate_is_repeatable() {
        let table = Table::new(row(&["Name"]), vec![row(&["Alice"])]);

        let first = generate(&table).unwrap();
        let second = generate(&table).unwrap();
        assert_eq!(first.bytes, second.bytes);
    }
}
