use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::SiftError;
use crate::table::{Row, Table};

/// Loads a CSV file into memory: the header row becomes the table's
/// columns and every record becomes one row of raw text cells.
///
/// The reader runs in the csv crate's strict mode, so a record with the
/// wrong number of fields is a parse error rather than a short row.
pub fn load_csv(path: &Path) -> Result<Table, SiftError> {
    let display = path.display().to_string();

    let file = File::open(path).map_err(|source| SiftError::File {
        path: display.clone(),
        source,
    })?;

    read_table(file).map_err(|source| SiftError::Parse {
        path: display,
        source,
    })
}

fn read_table(input: impl Read) -> Result<Table, csv::Error> {
    let mut reader = csv::Reader::from_reader(input);

    let columns = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(Row::new(record.iter().map(str::to_string).collect()));
    }

    Ok(Table::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_with_header() {
        let input = "model,rating\niphone 15,4.9\npoco x5 pro,4.4\n";

        let table = read_table(input.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["model", "rating"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get(0), Some("iphone 15"));
        assert_eq!(table.rows[1].get(1), Some("4.4"));
    }

    #[test]
    fn test_read_table_keeps_empty_cells() {
        let input = "model,rating\niphone 15,\n";

        let table = read_table(input.as_bytes()).unwrap();

        assert_eq!(table.rows[0].get(1), Some(""));
    }

    #[test]
    fn test_ragged_record_is_a_parse_error() {
        let input = "model,rating\niphone 15,4.9,extra\n";

        assert!(read_table(input.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let path = Path::new("definitely/not/here.csv");

        assert!(matches!(
            load_csv(path),
            Err(SiftError::File { .. })
        ));
    }
}
