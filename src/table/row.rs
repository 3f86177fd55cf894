/// A row of cells, one per column in the table's header.
///
/// Cells are kept as the raw text the loader read; interpretation
/// happens at comparison time via [`CellValue`](super::CellValue).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The ordered cells in this row.
    pub cells: Vec<String>,
}

impl Row {
    /// Creates a new row from a vector of cells.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given column index, if the row has one.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}
