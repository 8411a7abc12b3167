//! Tabular model - Named relations of ordered, loosely-typed rows

use fxhash::FxHashMap;
use serde_json::Value;

/// A single row: field name → cell value
///
/// Fields a row does not carry read as null. Cell values use the same
/// currency as ingestion payloads (`serde_json::Value`).
pub type Row = FxHashMap<String, Value>;

/// A named table of rows in source order
///
/// Column order and row order are preserved from the source sheet; the
/// pipeline relies on row order for stable join and ranking output.
#[derive(Clone, Debug)]
pub struct Relation {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Relation {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a relation from pre-assembled rows, deriving the column set
    /// from the union of row fields
    pub fn from_rows(name: impl Into<String>, rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        // Keys come out of the map unordered; sort for a deterministic column list
        columns.sort();

        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Rename a column across the header and every row
    ///
    /// No-op if `from` is absent. The schema normalizer never renames onto
    /// a column name the relation already carries.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        for col in &mut self.columns {
            if col == from {
                *col = to.to_string();
            }
        }
        for row in &mut self.rows {
            if let Some(value) = row.remove(from) {
                row.insert(to.to_string(), value);
            }
        }
    }

    /// Read a cell; absent fields read as null
    pub fn cell<'a>(&self, row: &'a Row, column: &str) -> &'a Value {
        row.get(column).unwrap_or(&Value::Null)
    }
}

/// Coerce a cell to a join identifier
///
/// Identifiers arrive as integers, as integral floats (spreadsheet
/// exports), or as integer-formatted strings.
pub fn as_identifier(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64().and_then(|f| {
                    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                        Some(f as i64)
                    } else {
                        None
                    }
                })
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerce a cell to text
pub fn as_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }
}
