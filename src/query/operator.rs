use std::cmp::Ordering;
use std::fmt;

use strum::EnumString;

/// Comparison operators accepted in a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Comparison {
    /// Greater than (>)
    #[strum(serialize = ">")]
    GreaterThan,

    /// Less than (<)
    #[strum(serialize = "<")]
    LessThan,

    /// Equality (=)
    #[strum(serialize = "=")]
    Equal,
}

impl Comparison {
    pub fn to_symbol(self) -> &'static str {
        match self {
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
            Comparison::Equal => "=",
        }
    }

    /// Whether a comparison outcome satisfies this operator.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Comparison::GreaterThan => ordering.is_gt(),
            Comparison::LessThan => ordering.is_lt(),
            Comparison::Equal => ordering.is_eq(),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_symbol())
    }
}

/// Reductions that collapse one numeric column to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Reducer {
    Avg,
    Min,
    Max,
}

impl Reducer {
    pub fn as_str(self) -> &'static str {
        match self {
            Reducer::Avg => "avg",
            Reducer::Min => "min",
            Reducer::Max => "max",
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction for an order-by expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
