use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use rowsift::{QueryOutput, QueryRequest, load_csv, render_scalar, render_table, run_query};

/// Filter, sort and aggregate CSV files from the command line.
///
/// The filter always runs first; after it exactly one of --aggregate,
/// --order-by or --median runs, in that order of precedence.
#[derive(Parser, Debug)]
#[command(name = "rowsift", version)]
struct Cli {
    /// Path to the CSV file
    file: PathBuf,

    /// Filter condition "column operator value" (operators >, <, =)
    #[arg(long = "where", value_name = "CONDITION")]
    filter: Option<String>,

    /// Aggregation "column=operation" (avg, min or max)
    #[arg(long, value_name = "SPEC")]
    aggregate: Option<String>,

    /// Sort order "column=asc|desc"
    #[arg(long = "order-by", value_name = "SPEC")]
    order_by: Option<String>,

    /// Column to take the median of
    #[arg(long, value_name = "COLUMN")]
    median: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let table = load_csv(&cli.file)?;

    let request = QueryRequest {
        filter: cli.filter,
        aggregate: cli.aggregate,
        order_by: cli.order_by,
        median: cli.median,
    };

    let mut stdout = stdout().lock();

    match run_query(table, &request)? {
        QueryOutput::Rows(table) => render_table(&mut stdout, &table).into_diagnostic()?,
        QueryOutput::Scalar(scalar) => render_scalar(&mut stdout, &scalar).into_diagnostic()?,
        QueryOutput::NoNumericData { column } => {
            eprintln!("no numeric data in column \"{column}\" to compute a median");
        }
        QueryOutput::Empty => {}
    }

    Ok(())
}
