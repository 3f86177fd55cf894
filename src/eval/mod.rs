use crate::error::SiftError;
use crate::table::{CellValue, Table};

pub(crate) mod aggregate;
pub(crate) mod filter;
pub(crate) mod median;
pub(crate) mod sort;

pub use aggregate::aggregate_rows;
pub use filter::filter_rows;
pub use median::median_rows;
pub use sort::sort_rows;

/// A single labeled value produced by an aggregation or a median.
///
/// Terminal in the pipeline: nothing chains after a scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarResult {
    /// Header to render above the value: the reducer name for
    /// aggregations, the column name for medians.
    pub label: String,
    pub value: f64,
}

/// Collects the numeric values of one column, skipping cells that are
/// empty, absent or non-numeric. A missing column propagates.
pub(crate) fn numeric_column(table: &Table, column: &str) -> Result<Vec<f64>, SiftError> {
    let index = table
        .column_index(column)
        .ok_or_else(|| SiftError::MissingColumn(column.to_string()))?;

    Ok(table
        .rows
        .iter()
        .filter_map(|row| CellValue::parse(row.get(index).unwrap_or("")))
        .filter_map(CellValue::as_number)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    #[test]
    fn test_numeric_column_skips_non_numeric_cells() {
        let table = Table::new(
            vec!["rating".to_string()],
            vec![
                Row::new(vec!["4.5".to_string()]),
                Row::new(vec!["".to_string()]),
                Row::new(vec!["n/a".to_string()]),
                Row::new(vec!["3".to_string()]),
            ],
        );

        assert_eq!(numeric_column(&table, "rating").unwrap(), vec![4.5, 3.0]);
    }

    #[test]
    fn test_numeric_column_missing_column_propagates() {
        let table = Table::new(vec!["rating".to_string()], vec![]);

        assert!(matches!(
            numeric_column(&table, "price"),
            Err(SiftError::MissingColumn(name)) if name == "price"
        ));
    }
}
