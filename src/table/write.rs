// src/table/write.rs

use super::Table;

/// Serialize a [`Table`] back to comma-delimited text.
///
/// The header line is the headers joined bare; every data field is wrapped
/// in double quotes unconditionally, embedded quotes doubled, and rows are
/// rendered in header order with missing values as empty strings. The
/// parser strips the wrapping quotes on read.
pub fn write_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(table.headers.join(","));

    for row in &table.rows {
        let fields: Vec<String> = table
            .headers
            .iter()
            .map(|header| quote(row.get(header).map(String::as_str).unwrap_or("")))
            .collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
