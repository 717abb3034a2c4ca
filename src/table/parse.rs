// src/table/parse.rs

use super::{Row, Table};

/// Parse comma-delimited text into a [`Table`].
///
/// The first non-blank line is the header row; every later non-blank line
/// becomes one [`Row`] keyed by header position, values trimmed, missing
/// trailing fields filled with empty strings. Fields may be wrapped in
/// double quotes, in which case delimiters inside the quoted span are
/// literal content. Anything with fewer than two non-blank lines parses as
/// an empty table: no usable prior data is not an error.
pub fn parse_table(text: &str) -> Table {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Table::default();
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|field| field.replace('"', "").trim().to_string())
        .collect();

    let rows = lines[1..]
        .iter()
        .map(|line| {
            let fields = split_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), fields.get(i).cloned().unwrap_or_default()))
                .collect::<Row>()
        })
        .collect();

    Table { headers, rows }
}

/// Split one data line on unquoted delimiters.
///
/// A quote at field start (line start or right after a delimiter) opens a
/// quoted span; a quote inside a span at field end (line end or right
/// before a delimiter) closes it. Structural quotes are stripped, stray
/// quotes outside a span are dropped, and malformed quoting never fails:
/// the scan keeps splitting best-effort.
fn split_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for (i, &c) in chars.iter().enumerate() {
        let at_field_start = i == 0 || chars[i - 1] == ',';
        let at_field_end = i + 1 == chars.len() || chars[i + 1] == ',';

        if c == '"' && at_field_start {
            in_quotes = true;
        } else if c == '"' && in_quotes && at_field_end {
            in_quotes = false;
        } else if c == ',' && !in_quotes {
            fields.push(field.trim().to_string());
            field.clear();
        } else if c != '"' || in_quotes {
            field.push(c);
        }
    }
    fields.push(field.trim().to_string());

    fields
}
