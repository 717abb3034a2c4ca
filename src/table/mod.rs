// src/table/mod.rs

use std::collections::HashMap;

pub mod parse;
pub mod write;

/// One record: column name to value. Columns a row does not define render
/// as empty strings on output.
pub type Row = HashMap<String, String>;

/// An ordered list of column names plus the rows under them. Column order
/// lives here; `Row` lookups are always driven by `headers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// True when the table carries neither headers nor rows, i.e. the
    /// parser found no usable data.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}
