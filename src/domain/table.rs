// Tabular dataset model
use serde::Serialize;

/// Rows by named columns, in source order. Cells stay untyped strings;
/// columns are whatever the source file contains.
#[derive(Debug, Clone, Serialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
