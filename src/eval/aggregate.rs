use crate::error::SiftError;
use crate::eval::{ScalarResult, numeric_column};
use crate::query::{AggregateSpec, Reducer};
use crate::table::Table;

/// Reduces one column to a single scalar labeled with the reducer name.
///
/// Non-numeric and empty cells are skipped; a column with no numeric
/// values at all yields `None` rather than an error.
pub fn aggregate_rows(
    table: &Table,
    spec: &AggregateSpec,
) -> Result<Option<ScalarResult>, SiftError> {
    let values = numeric_column(table, &spec.column)?;

    if values.is_empty() {
        return Ok(None);
    }

    let value = match spec.reducer {
        Reducer::Avg => values.iter().sum::<f64>() / values.len() as f64,
        Reducer::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        Reducer::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    Ok(Some(ScalarResult {
        label: spec.reducer.as_str().to_string(),
        value,
    }))
}
