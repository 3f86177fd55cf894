pub(crate) mod operator;
pub(crate) mod predicate;
pub(crate) mod spec;

pub use operator::{Comparison, Direction, Reducer};
pub use predicate::Predicate;
pub use spec::{AggregateSpec, OrderSpec};
