pub(crate) mod row;
pub(crate) mod value;

pub use row::Row;
pub use value::CellValue;

/// An in-memory table: an ordered header plus the rows that share it.
///
/// Row order is meaningful; it is what sorting rearranges and what the
/// renderer displays. Operations never mutate a table in place, they
/// build a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Rows in file order, each holding one cell per column.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_lookup() {
        let table = Table::new(
            vec!["name".to_string(), "rating".to_string()],
            vec![Row::new(vec!["iphone".to_string(), "4.9".to_string()])],
        );

        assert_eq!(table.column_index("name"), Some(0));
        assert_eq!(table.column_index("rating"), Some(1));
        assert_eq!(table.column_index("price"), None);
    }
}
