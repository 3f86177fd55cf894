use std::cmp::Ordering;

/// A cell interpreted for comparison: numeric when its text parses as a
/// float, text otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// The cell parsed as a 64-bit float (signs, decimal point and
    /// exponents accepted).
    Number(f64),

    /// Anything that did not parse as a number, kept verbatim.
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    /// Best-effort interpretation of a raw cell. Empty cells carry no
    /// value and yield `None` so callers can skip the row.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        match raw.parse::<f64>() {
            Ok(number) => Some(Self::Number(number)),
            Err(_) => Some(Self::Text(raw)),
        }
    }

    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(number),
            Self::Text(_) => None,
        }
    }

    /// Total order over heterogeneous cells: numbers sort before text,
    /// numbers by `f64::total_cmp`, text lexicographically.
    pub fn order(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(&b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}
