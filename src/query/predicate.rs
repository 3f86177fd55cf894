use std::fmt;

use crate::error::SiftError;
use crate::query::Comparison;

/// A parsed filter condition: column, operator, literal.
///
/// The literal stays raw text; whether it compares numerically or
/// lexically is decided per row at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: Comparison,
    pub literal: String,
}

impl Predicate {
    /// Parses a `--where` expression of the form `column operator value`.
    pub fn parse(input: &str) -> Result<Self, SiftError> {
        let parts: Vec<&str> = input.split_whitespace().collect();

        let [column, op, literal] = parts.as_slice() else {
            return Err(SiftError::Format {
                expression: "--where",
                expected: "column operator value",
            });
        };

        let op = op
            .parse::<Comparison>()
            .map_err(|_| SiftError::UnsupportedOperator {
                found: (*op).to_string(),
            })?;

        Ok(Self {
            column: (*column).to_string(),
            op,
            literal: (*literal).to_string(),
        })
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.literal)
    }
}
