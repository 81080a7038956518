//! XLSX artifact generation

use crate::export::ExportArtifact;
use crate::export::ExportError;
use crate::export::XLSX_FILE_NAME;
use crate::export::XLSX_MIME_TYPE;
use crate::table::Table;
use rust_xlsxwriter::Workbook;

/// Worksheet name carrying the merged rows
pub const SHEET_NAME: &str = "MergedData";

/// Renders the table as the XLSX artifact.
///
/// The workbook holds a single worksheet named "MergedData" with a header
/// row followed by the data rows, all written as text.
pub fn generate(table: &Table) -> Result<ExportArtifact, ExportError> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    for (col, column) in table.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, column)?;
    }
    for (index, row) in table.rows().iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string((index + 1) as u32, col as u16, value)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(ExportArtifact {
        file_name: XLSX_FILE_NAME,
        mime_type: XLSX_MIME_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_generate_reads_back_identically() {
        let table = Table::new(
            row(&["Date", "Name", "Mobile Number"]),
            vec![
                row(&["2024-01-01", "Alice", "111"]),
                row(&["2024-01-02", "Bob", "222"]),
            ],
        );

        let artifact = generate(&table).unwrap();
        assert_eq!(artifact.file_name, "merged_output.xlsx");
        assert_eq!(
            artifact.mime_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );

        let restored =
            spreadsheet::read_table(artifact.file_name, &artifact.bytes, Some(SHEET_NAME)).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_generate_names_the_worksheet() {
        let table = Table::new(row(&["Name"]), vec![row(&["Alice"])]);

        let artifact = generate(&table).unwrap();
        let workbook =
            spreadsheet::XlsxWorkbook::open(artifact.file_name, artifact.bytes).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["MergedData".to_string()]);
    }
}
