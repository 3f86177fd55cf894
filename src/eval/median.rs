use crate::error::SiftError;
use crate::eval::{ScalarResult, numeric_column};
use crate::table::Table;

/// Reduces one column to its median, labeled with the column name.
///
/// Collection follows the aggregation rule: empty, absent and
/// non-numeric cells are skipped, and no numeric values at all yields
/// `None`. For an even count the median is the mean of the two central
/// elements. The final value is truncated toward zero to an integer in
/// both branches; that quirk is part of the tool's contract and must
/// not be changed to rounding.
pub fn median_rows(table: &Table, column: &str) -> Result<Option<ScalarResult>, SiftError> {
    let mut values = numeric_column(table, column)?;

    if values.is_empty() {
        return Ok(None);
    }

    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    let raw = if values.len() % 2 == 0 {
        (values[mid] + values[values.len() - 1 - mid]) / 2.0
    } else {
        values[mid]
    };

    Ok(Some(ScalarResult {
        label: column.to_string(),
        value: raw.trunc(),
    }))
}
