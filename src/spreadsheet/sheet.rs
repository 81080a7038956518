use crate::error::MergeSheetError;
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::SpreadsheetError;
use crate::table::Table;
use std::collections::HashMap;

/// Represents a sheet from a spreadsheet file as sparse cells with the
/// occupied bounding box tracked on insert.
pub(crate) struct Sheet {
    /// Source file name
    pub(crate) file_name: String,
    /// Sheet name
    pub(crate) name: String,
    /// All cells in the sheet
    cells: Vec<Cell>,
    /// Cell lookup by (row, col)
    indexes: HashMap<(usize, usize), usize>,
    /// Actual data range (determined from cell data)
    pub(crate) row_lower_bound: Option<usize>,
    pub(crate) row_upper_bound: Option<usize>,
    pub(crate) col_lower_bound: Option<usize>,
    pub(crate) col_upper_bound: Option<usize>,
}

impl Sheet {
    /// Creates a new empty sheet.
    pub(super) fn new(file_name: &str, name: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            name: name.to_owned(),
            cells: Vec::new(),
            indexes: HashMap::new(),
            row_lower_bound: None,
            row_upper_bound: None,
            col_lower_bound: None,
            col_upper_bound: None,
        }
    }

    /// Adds a cell to the sheet, updating the data range.
    pub(super) fn push(&mut self, cell: Cell) {
        self.update_bound(cell.row, cell.col);
        self.indexes.insert((cell.row, cell.col), self.cells.len());
        self.cells.push(cell);
    }

    /// Updates the actual data range boundaries based on cell positions.
    fn update_bound(&mut self, row: usize, col: usize) {
        if self.row_lower_bound.map(|row_lower_bound| row < row_lower_bound).unwrap_or(true) {
            self.row_lower_bound = Some(row);
        }
        if self.row_upper_bound.map(|row_upper_bound| row_upper_bound < row).unwrap_or(true) {
            self.row_upper_bound = Some(row);
        }
        if self.col_lower_bound.map(|col_lower_bound| col < col_lower_bound).unwrap_or(true) {
            self.col_lower_bound = Some(col);
        }
        if self.col_upper_bound.map(|col_upper_bound| col_upper_bound < col).unwrap_or(true) {
            self.col_upper_bound = Some(col);
        }
    }

    /// Retrieves the cell at (row, col), if occupied.
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.indexes.get(&(row, col)).map(|&index| &self.cells[index])
    }

    /// Converts the sheet into a dense table.
    ///
    /// The first occupied row becomes the header; the remaining rows inside
    /// the bounding box become data rows. Unoccupied positions render as
    /// empty strings. A sheet with no cells yields an empty table.
    pub(crate) fn to_table(&self, shared_strings: &[String]) -> Result<Table, MergeSheetError> {
        let bounds = self.row_lower_bound.zip(self.row_upper_bound)
            .zip(self.col_lower_bound.zip(self.col_upper_bound));
        let ((row_lower, row_upper), (col_lower, col_upper)) = match bounds {
            Some(bounds) => bounds,
            None => return Ok(Table::new(Vec::new(), Vec::new())),
        };

        let mut columns = Vec::with_capacity(col_upper - col_lower + 1);
        for col in col_lower..=col_upper {
            columns.push(self.render_at(row_lower, col, shared_strings)?);
        }

        let mut rows = Vec::new();
        for row in (row_lower + 1)..=row_upper {
            let mut record = Vec::with_capacity(columns.len());
            for col in col_lower..=col_upper {
                record.push(self.render_at(row, col, shared_strings)?);
            }
            rows.push(record);
        }
        Ok(Table::new(columns, rows))
    }

    /// Renders the cell at (row, col) as display text, empty when unoccupied.
    fn render_at(&self, row: usize, col: usize, shared_strings: &[String]) -> Result<String, MergeSheetError> {
        match self.get(row, col) {
            Some(cell) => cell.render(shared_strings).map_err(|error| {
                SpreadsheetError::CellValueError(
                    self.file_name.clone(),
                    self.name.clone(),
                    cell.reference(),
                    error.to_string(),
                )
                .into()
            }),
            None => Ok(String::new()),
        }
    }
}
