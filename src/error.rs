use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong between loading a file and producing output.
///
/// Expression errors carry the flag whose argument was malformed so the
/// message points the user at the right place.
#[derive(Debug, Error, Diagnostic)]
pub enum SiftError {
    /// An expression did not have the shape its parser expects.
    #[error("invalid {expression} expression: expected {expected}")]
    #[diagnostic(code(rowsift::query::format))]
    Format {
        expression: &'static str,
        expected: &'static str,
    },

    #[error("unsupported operator {found:?}, expected one of >, < or =")]
    #[diagnostic(code(rowsift::query::operator))]
    UnsupportedOperator { found: String },

    #[error("unsupported {expression} operation {found:?}, expected one of {expected}")]
    #[diagnostic(code(rowsift::query::operation))]
    UnsupportedOperation {
        expression: &'static str,
        found: String,
        expected: &'static str,
    },

    #[error("column not found: {0}")]
    #[diagnostic(code(rowsift::table::column))]
    MissingColumn(String),

    #[error("failed to read {path}")]
    #[diagnostic(code(rowsift::io))]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv in {path}")]
    #[diagnostic(code(rowsift::csv))]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
}
