pub(crate) mod error;
pub(crate) mod eval;
pub(crate) mod loader;
pub(crate) mod pipeline;
pub(crate) mod query;
pub(crate) mod render;
pub(crate) mod table;

pub use error::SiftError;
pub use eval::ScalarResult;
pub use loader::load_csv;
pub use pipeline::{QueryOutput, QueryRequest, run_query};
pub use query::{AggregateSpec, Comparison, Direction, OrderSpec, Predicate, Reducer};
pub use render::{render_scalar, render_table};
pub use table::{CellValue, Row, Table};
