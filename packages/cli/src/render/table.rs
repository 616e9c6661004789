//! Box drawn console tables.
//!
//! ```text
//! ╒═══════╤══════════════════╤═════════════╕
//! │ name  │ departure        │ itinerary   │
//! ╞═══════╪══════════════════╪═════════════╡
//! │ alice │ may-26 6:45 2020 │ AMS->LHR    │
//! ╘═══════╧══════════════════╧═════════════╛
//! ```

use super::{cell, column_count};

/// Render `headers` and `rows` as a grid. Rows keep their order.
///
/// With no rows only the header block is drawn.
pub fn render_table(headers: &[impl AsRef<str>], rows: &[Vec<String>]) -> String {
    let columns = column_count(headers, rows);
    if columns == 0 {
        return String::new();
    }

    let header_cells: Vec<String> = (0..columns)
        .map(|i| headers.get(i).map(|h| h.as_ref().to_string()).unwrap_or_default())
        .collect();
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .map(|row| cell(row, i).chars().count())
                .chain(std::iter::once(header_cells[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&rule(&widths, '╒', '═', '╤', '╕'));
    out.push_str(&line(&widths, &header_cells));
    if rows.is_empty() {
        out.push_str(&rule(&widths, '╘', '═', '╧', '╛'));
        return out;
    }
    out.push_str(&rule(&widths, '╞', '═', '╪', '╡'));
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = (0..columns).map(|i| cell(row, i).to_string()).collect();
        out.push_str(&line(&widths, &cells));
        if index + 1 < rows.len() {
            out.push_str(&rule(&widths, '├', '─', '┼', '┤'));
        }
    }
    out.push_str(&rule(&widths, '╘', '═', '╧', '╛'));
    out
}

fn rule(widths: &[usize], left: char, fill: char, joint: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{left}{}{right}\n", segments.join(&joint.to_string()))
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(w, c)| {
            let pad = w - c.chars().count();
            format!(" {c}{} ", " ".repeat(pad))
        })
        .collect();
    format!("│{}│\n", padded.join("│"))
}
