//! Static HTML export of a table.

use std::{fs, io, path::Path};

use super::{cell, column_count};

/// Render `headers` and `rows` as an HTML `<table>` (cell text is escaped).
pub fn render_html(headers: &[impl AsRef<str>], rows: &[Vec<String>]) -> String {
    let columns = column_count(headers, rows);
    let mut out = String::from("<table border=\"1\" class=\"dataframe\">\n  <thead>\n");
    out.push_str("    <tr style=\"text-align: right;\">\n");
    for header in headers {
        out.push_str(&format!("      <th>{}</th>\n", escape(header.as_ref())));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in rows {
        out.push_str("    <tr>\n");
        for i in 0..columns {
            out.push_str(&format!("      <td>{}</td>\n", escape(cell(row, i))));
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

/// Write the rendered table to `path`.
///
/// The parent directory must already exist.
pub fn export_html(path: &Path, headers: &[impl AsRef<str>], rows: &[Vec<String>]) -> io::Result<()> {
    fs::write(path, render_html(headers, rows))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
