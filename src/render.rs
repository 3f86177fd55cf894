use std::io::{self, Write};

use crate::eval::ScalarResult;
use crate::table::{Row, Table};

/// Writes the table as a bordered grid: `+---+` frame, `+===+` under
/// the header, cells left-padded to their column's widest value. An
/// empty table writes nothing at all.
pub fn render_table(out: &mut impl Write, table: &Table) -> io::Result<()> {
    if table.is_empty() {
        return Ok(());
    }

    let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
    for row in &table.rows {
        for (index, width) in widths.iter_mut().enumerate() {
            *width = (*width).max(row.get(index).unwrap_or("").len());
        }
    }

    write_border(out, &widths, "-")?;
    write_cells(out, &widths, table.columns.iter().map(String::as_str))?;
    write_border(out, &widths, "=")?;
    for row in &table.rows {
        write_cells(out, &widths, (0..widths.len()).map(|i| row.get(i).unwrap_or("")))?;
    }
    write_border(out, &widths, "-")
}

/// Renders a scalar as a one-column grid with its label as the header.
pub fn render_scalar(out: &mut impl Write, scalar: &ScalarResult) -> io::Result<()> {
    // f64 Display keeps truncated medians looking like integers
    let table = Table::new(
        vec![scalar.label.clone()],
        vec![Row::new(vec![scalar.value.to_string()])],
    );

    render_table(out, &table)
}

fn write_border(out: &mut impl Write, widths: &[usize], fill: &str) -> io::Result<()> {
    for width in widths {
        write!(out, "+{}", fill.repeat(width + 2))?;
    }
    writeln!(out, "+")
}

fn write_cells<'a>(
    out: &mut impl Write,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    for (&width, cell) in widths.iter().zip(cells) {
        write!(out, "| {cell:<width$} ")?;
    }
    writeln!(out, "|")
}
