// src/tsv.rs
//! Tab-separated rows as pasted into the spreadsheet. Fields are written as is.

pub const SEP: &str = "\t";

/// One row, fields joined by tabs, no line terminator.
pub fn join_row(row: &[String]) -> String {
    row.join(SEP)
}

/// Rows joined with `\n`, no trailing newline.
pub fn rows_to_string(rows: &[String]) -> String {
    rows.join("\n")
}
