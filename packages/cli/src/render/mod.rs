//! Rendering of tables for the console and for static HTML export.

pub mod html;
pub mod table;

pub use html::{export_html, render_html};
pub use table::render_table;

/// Number of columns needed to show `headers` and every row.
fn column_count(headers: &[impl AsRef<str>], rows: &[Vec<String>]) -> usize {
    rows.iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0)
}

/// Cell `index` of `row`, empty when the row is short.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
