//! Bordered text-table renderer for query results.
//!
//! Renders headers and rows as a fixed-width table drawn with `+`, `-` and
//! `|`. Cells use each value's default stringification; DUMP's type-aware
//! SQL quoting lives in the executor, not here. Zero-row handling ("Empty
//! set" and friends) is the caller's responsibility.

use crate::sql::types::{Row, Value};

/// Formats result rows as an aligned, bordered text table.
///
/// Column width is the maximum of the header width and the widest
/// stringified cell in that column.
pub fn render(headers: &[String], rows: &[Row]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(value.to_string().len());
            }
        }
    }

    let mut output = String::new();
    draw_border(&mut output, &widths);
    draw_cells(&mut output, &widths, headers.iter().map(String::as_str));
    draw_border(&mut output, &widths);
    for row in rows {
        let cells: Vec<String> = row.iter().map(Value::to_string).collect();
        draw_cells(&mut output, &widths, cells.iter().map(String::as_str));
    }
    draw_border(&mut output, &widths);
    output
}

/// A horizontal border: `+`, a run of dashes spanning every column field
/// plus one dash of separation between fields, then `+`
fn draw_border(output: &mut String, widths: &[usize]) {
    let dashes: usize =
        widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1);
    output.push('+');
    output.push_str(&"-".repeat(dashes));
    output.push_str("+\n");
}

/// One row of cells: `| cell | cell |`, left-aligned and padded
fn draw_cells<'a>(output: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    output.push('|');
    for (cell, width) in cells.zip(widths) {
        output.push(' ');
        output.push_str(cell);
        output.push_str(&" ".repeat(width - cell.len()));
        output.push_str(" |");
    }
    output.push('\n');
}
