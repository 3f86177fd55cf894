use crate::error::SiftError;
use crate::query::Predicate;
use crate::table::Table;

/// Keeps the rows satisfying the predicate, in their original order.
///
/// Rows with an empty or absent target cell are excluded regardless of
/// the operator. When both the cell and the literal parse as numbers
/// they compare numerically, otherwise as raw text.
pub fn filter_rows(table: &Table, predicate: &Predicate) -> Result<Table, SiftError> {
    let index = table
        .column_index(&predicate.column)
        .ok_or_else(|| SiftError::MissingColumn(predicate.column.clone()))?;

    let literal = predicate.literal.as_str();

    let mut kept = Vec::new();
    for row in &table.rows {
        let cell = row.get(index).unwrap_or("");
        if cell.is_empty() {
            continue;
        }

        let ordering = match (cell.parse::<f64>(), literal.parse::<f64>()) {
            // NaN on either side compares to nothing and matches no operator
            (Ok(a), Ok(b)) => a.partial_cmp(&b),
            _ => Some(cell.cmp(literal)),
        };

        if ordering.is_some_and(|ordering| predicate.op.matches(ordering)) {
            kept.push(row.clone());
        }
    }

    Ok(Table::new(table.columns.clone(), kept))
}
