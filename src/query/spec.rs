use std::fmt;

use crate::error::SiftError;
use crate::query::{Direction, Reducer};

/// A parsed `--aggregate` expression: which column to reduce and how.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSpec {
    pub column: String,
    pub reducer: Reducer,
}

impl AggregateSpec {
    /// Parses a `column=operation` expression, operation one of
    /// avg/min/max.
    pub fn parse(input: &str) -> Result<Self, SiftError> {
        let (column, operation) = split_spec(input, "--aggregate", "column=operation")?;

        let reducer =
            operation
                .parse::<Reducer>()
                .map_err(|_| SiftError::UnsupportedOperation {
                    expression: "--aggregate",
                    found: operation.to_string(),
                    expected: "avg, min or max",
                })?;

        Ok(Self {
            column: column.to_string(),
            reducer,
        })
    }
}

impl fmt::Display for AggregateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.reducer)
    }
}

/// A parsed `--order-by` expression: which column to sort on and which way.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSpec {
    pub column: String,
    pub direction: Direction,
}

impl OrderSpec {
    /// Parses a `column=direction` expression, direction asc or desc.
    pub fn parse(input: &str) -> Result<Self, SiftError> {
        let (column, direction) = split_spec(input, "--order-by", "column=asc|desc")?;

        let direction =
            direction
                .parse::<Direction>()
                .map_err(|_| SiftError::UnsupportedOperation {
                    expression: "--order-by",
                    found: direction.to_string(),
                    expected: "asc or desc",
                })?;

        Ok(Self {
            column: column.to_string(),
            direction,
        })
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.direction)
    }
}

/// Splits a spec on its first `=` and trims both halves. A second `=`
/// ends up inside the operation token and fails its parse downstream.
fn split_spec<'a>(
    input: &'a str,
    expression: &'static str,
    expected: &'static str,
) -> Result<(&'a str, &'a str), SiftError> {
    let Some((column, operation)) = input.split_once('=') else {
        return Err(SiftError::Format {
            expression,
            expected,
        });
    };

    Ok((column.trim(), operation.trim()))
}
