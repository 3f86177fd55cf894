use crate::error::SiftError;
use crate::eval::{ScalarResult, aggregate_rows, filter_rows, median_rows, sort_rows};
use crate::query::{AggregateSpec, OrderSpec, Predicate};
use crate::table::Table;

/// The raw expression strings collected from the command line, passed
/// through unmodified; validation is the parsers' job.
#[derive(Debug, Default, Clone)]
pub struct QueryRequest {
    pub filter: Option<String>,
    pub aggregate: Option<String>,
    pub order_by: Option<String>,
    pub median: Option<String>,
}

/// The closed set of operations that can follow the filter. Exactly one
/// slot, chosen by fixed precedence.
#[derive(Debug, Clone, PartialEq)]
enum Operation {
    Aggregate(AggregateSpec),
    OrderBy(OrderSpec),
    Median(String),
}

/// What the driver hands back to rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    /// The (possibly filtered, possibly sorted) table.
    Rows(Table),
    /// A terminal scalar from an aggregation or a median.
    Scalar(ScalarResult),
    /// Median found nothing numeric to work with; the caller reports
    /// the column, renders nothing and still exits cleanly.
    NoNumericData { column: String },
    /// An aggregation over no numeric data: render nothing.
    Empty,
}

/// Composes the requested operations over the table.
///
/// The composition policy is fixed and non-orthogonal: the filter, if
/// present, always runs first; after it at most one other operation
/// runs, picked by strict precedence aggregate > order-by > median.
/// Requests outside that single slot are silently dropped. Both the
/// filter expression and the chosen operation's expression are parsed
/// before anything touches the table, so a malformed expression never
/// leaves a partial result behind.
pub fn run_query(table: Table, request: &QueryRequest) -> Result<QueryOutput, SiftError> {
    let predicate = request
        .filter
        .as_deref()
        .map(Predicate::parse)
        .transpose()?;
    let operation = select_operation(request)?;

    let table = match &predicate {
        Some(predicate) => filter_rows(&table, predicate)?,
        None => table,
    };

    match operation {
        None => Ok(QueryOutput::Rows(table)),
        Some(Operation::OrderBy(spec)) => Ok(QueryOutput::Rows(sort_rows(&table, &spec)?)),
        Some(Operation::Aggregate(spec)) => Ok(match aggregate_rows(&table, &spec)? {
            Some(scalar) => QueryOutput::Scalar(scalar),
            None => QueryOutput::Empty,
        }),
        Some(Operation::Median(column)) => Ok(match median_rows(&table, &column)? {
            Some(scalar) => QueryOutput::Scalar(scalar),
            None => QueryOutput::NoNumericData { column },
        }),
    }
}

/// Picks the single post-filter operation. Lower-precedence requests
/// are not even parsed, so e.g. a malformed `--median` argument next to
/// a valid `--aggregate` goes unnoticed, exactly like the original
/// tool's if/elif chain.
fn select_operation(request: &QueryRequest) -> Result<Option<Operation>, SiftError> {
    if let Some(raw) = &request.aggregate {
        return Ok(Some(Operation::Aggregate(AggregateSpec::parse(raw)?)));
    }
    if let Some(raw) = &request.order_by {
        return Ok(Some(Operation::OrderBy(OrderSpec::parse(raw)?)));
    }
    if let Some(column) = &request.median {
        return Ok(Some(Operation::Median(column.clone())));
    }
    Ok(None)
}
