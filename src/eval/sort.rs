use std::cmp::Ordering;

use crate::error::SiftError;
use crate::query::{Direction, OrderSpec};
use crate::table::{CellValue, Table};

/// Returns a stably reordered copy of the rows, sorted by one column.
///
/// Each cell is coerced independently: numbers order before text,
/// numbers by `f64::total_cmp`, text lexicographically, and empty or
/// absent cells before everything. Descending reverses the comparator,
/// which keeps equal-key rows in their original relative order.
pub fn sort_rows(table: &Table, spec: &OrderSpec) -> Result<Table, SiftError> {
    let index = table
        .column_index(&spec.column)
        .ok_or_else(|| SiftError::MissingColumn(spec.column.clone()))?;

    let mut rows = table.rows.clone();
    rows.sort_by(|a, b| {
        let ordering = compare_cells(a.get(index).unwrap_or(""), b.get(index).unwrap_or(""));
        match spec.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    Ok(Table::new(table.columns.clone(), rows))
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (CellValue::parse(a), CellValue::parse(b)) {
        (Some(a), Some(b)) => a.order(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    fn table(cells: &[(&str, &str)]) -> Table {
        Table::new(
            vec!["model".to_string(), "rating".to_string()],
            cells
                .iter()
                .map(|(model, rating)| {
                    Row::new(vec![(*model).to_string(), (*rating).to_string()])
                })
                .collect(),
        )
    }

    fn ratings(table: &Table) -> Vec<String> {
        table
            .rows
            .iter()
            .map(|row| row.get(1).unwrap().to_string())
            .collect()
    }

    fn models(table: &Table) -> Vec<String> {
        table
            .rows
            .iter()
            .map(|row| row.get(0).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let source = table(&[("a", "4.9"), ("b", "4.4"), ("c", "4.6")]);

        let asc = sort_rows(&source, &OrderSpec::parse("rating=asc").unwrap()).unwrap();
        assert_eq!(ratings(&asc), vec!["4.4", "4.6", "4.9"]);

        let desc = sort_rows(&source, &OrderSpec::parse("rating=desc").unwrap()).unwrap();
        assert_eq!(ratings(&desc), vec!["4.9", "4.6", "4.4"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let source = table(&[("first", "4.5"), ("second", "4.5"), ("third", "4.4")]);

        let asc = sort_rows(&source, &OrderSpec::parse("rating=asc").unwrap()).unwrap();
        assert_eq!(models(&asc), vec!["third", "first", "second"]);

        let desc = sort_rows(&source, &OrderSpec::parse("rating=desc").unwrap()).unwrap();
        assert_eq!(models(&desc), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_mixed_column_orders_numbers_before_text() {
        let source = table(&[("a", "banana"), ("b", "10"), ("c", "apple"), ("d", "2")]);

        let sorted = sort_rows(&source, &OrderSpec::parse("rating=asc").unwrap()).unwrap();

        assert_eq!(ratings(&sorted), vec!["2", "10", "apple", "banana"]);
    }

    #[test]
    fn test_empty_cells_sort_first() {
        let source = table(&[("a", "4.5"), ("b", ""), ("c", "2")]);

        let sorted = sort_rows(&source, &OrderSpec::parse("rating=asc").unwrap()).unwrap();

        assert_eq!(ratings(&sorted), vec!["", "2", "4.5"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let source = table(&[("a", "4.9"), ("b", "4.4")]);
        let copy = source.clone();

        sort_rows(&source, &OrderSpec::parse("rating=asc").unwrap()).unwrap();

        assert_eq!(source, copy);
    }

    #[test]
    fn test_missing_column_propagates() {
        let source = table(&[("a", "4.9")]);

        assert!(matches!(
            sort_rows(&source, &OrderSpec::parse("price=asc").unwrap()),
            Err(SiftError::MissingColumn(name)) if name == "price"
        ));
    }
}
