use crate::spreadsheet::cell::Cell;

/// The used range of one worksheet: its non-empty cells plus row and column bounds.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Source file name
    pub file_name: String,
    /// Sheet name
    pub name: String,
    /// Non-empty cells in row-major order once `finish` has run
    pub cells: Vec<Cell>,
    pub row_lower_bound: Option<usize>,
    pub row_upper_bound: Option<usize>,
    pub col_lower_bound: Option<usize>,
    pub col_upper_bound: Option<usize>,
}

impl Sheet {
    pub(crate) fn new(file_name: &str, name: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            name: name.to_owned(),
            cells: Vec::new(),
            row_lower_bound: None,
            row_upper_bound: None,
            col_lower_bound: None,
            col_upper_bound: None,
        }
    }

    /// Returns true if the sheet contains no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Adds a cell and widens the used range to include it.
    pub(crate) fn push(&mut self, cell: Cell) {
        self.update_bound(cell.row, cell.col);
        self.cells.push(cell);
    }

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

    /// Restores row-major order after all cells have been added.
    /// Duplicated positions keep the first cell.
    pub(crate) fn finish(&mut self) {
        self.cells.sort_by_key(|cell| (cell.row, cell.col));
        self.cells.dedup_by_key(|cell| (cell.row, cell.col));
    }

    /// Number of columns from column A up to the rightmost used column.
    pub fn width(&self) -> usize {
        self.col_upper_bound.map(|upper| upper + 1).unwrap_or(0)
    }

    /// Rows holding at least one cell, each laid out from column A to the rightmost used column.
    /// Rows without any cell are not returned.
    pub fn records(&self) -> Vec<(usize, Vec<Option<&Cell>>)> {
        let width = self.width();
        let mut records = Vec::<(usize, Vec<Option<&Cell>>)>::new();
        for cell in &self.cells {
            if records.last().map(|(row, _)| *row != cell.row).unwrap_or(true) {
                records.push((cell.row, vec![None; width]));
            }
            if let Some((_, record)) = records.last_mut() {
                record[cell.col] = Some(cell);
            }
        }
        records
    }
}
