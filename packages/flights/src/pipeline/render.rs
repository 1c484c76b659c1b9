//! Fixed-column ASCII table rendering.

use std::fmt::Write;

use crate::types::record::FlightRecord;

/// Column headers, in render order.
pub const HEADER: [&str; 6] = [
    "Airline",
    "Price",
    "Duration",
    "Stops",
    "Departure",
    "Arrival",
];

/// Render records as a bordered six-column table.
///
/// Columns auto-size to their widest cell. An empty slice renders as an
/// empty string. The only failure mode is a formatter error, which the
/// caller downgrades to an empty table.
pub fn render_table(records: &[FlightRecord]) -> Result<String, std::fmt::Error> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let rows: Vec<[&str; 6]> = records.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADER.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_rule(&mut out, &widths, '-')?;
    write_row(&mut out, &widths, &HEADER)?;
    write_rule(&mut out, &widths, '=')?;
    for row in &rows {
        write_row(&mut out, &widths, row)?;
        write_rule(&mut out, &widths, '-')?;
    }

    // Drop the trailing newline after the bottom border.
    Ok(out.trim_end_matches('\n').to_string())
}

fn row_cells(record: &FlightRecord) -> [&str; 6] {
    [
        &record.airline,
        &record.price_display,
        &record.duration,
        &record.stops,
        &record.departure,
        &record.arrival,
    ]
}

fn write_rule(out: &mut String, widths: &[usize], fill: char) -> std::fmt::Result {
    out.push('+');
    for width in widths {
        for _ in 0..width + 2 {
            out.push(fill);
        }
        out.push('+');
    }
    out.push('\n');
    Ok(())
}

fn write_row(out: &mut String, widths: &[usize], cells: &[&str; 6]) -> std::fmt::Result {
    for (width, cell) in widths.iter().zip(cells) {
        let pad = width - cell.chars().count();
        write!(out, "| {}{} ", cell, " ".repeat(pad))?;
    }
    out.push_str("|\n");
    Ok(())
}
