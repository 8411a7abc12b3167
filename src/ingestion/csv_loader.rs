//! CSV Loader - Reads headered CSV sheets into relations

use std::path::Path;

use anyhow::{Context, Result};
use csv::Reader;
use serde_json::Value;

use crate::relation::{Relation, Row};

/// Load one headered CSV file as a relation, preserving row order
///
/// Cell typing follows the usual ladder: empty → null, else i64, else
/// f64, else string. Join keys and quantities survive either spelling
/// because the pipeline coerces at use sites.
pub fn load_relation_csv(path: impl AsRef<Path>, name: &str) -> Result<Relation> {
    let path = path.as_ref();
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read CSV headers from {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut relation = Relation::new(name, headers.clone());

    for (line, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to read CSV record {} from {}", line + 2, path.display()))?;

        let mut row = Row::default();
        for (idx, field) in record.iter().enumerate() {
            if let Some(header) = headers.get(idx) {
                row.insert(header.clone(), type_cell(field));
            }
        }
        relation.push_row(row);
    }

    tracing::debug!(
        relation = name,
        rows = relation.row_count(),
        path = %path.display(),
        "loaded relation"
    );

    Ok(relation)
}

/// Load the three-sheet restaurant dataset from a directory
///
/// Expects `orders.csv`, `order_items.csv` and `menu_items.csv`, the
/// file-per-sheet layout of the source workbook.
pub fn load_dataset(dir: impl AsRef<Path>) -> Result<(Relation, Relation, Relation)> {
    let dir = dir.as_ref();
    let orders = load_relation_csv(dir.join("orders.csv"), "orders")?;
    let order_items = load_relation_csv(dir.join("order_items.csv"), "order_items")?;
    let menu_items = load_relation_csv(dir.join("menu_items.csv"), "menu_items")?;
    Ok((orders, order_items, menu_items))
}

/// Type a raw CSV cell: empty → null, else i64, else f64, else string
fn type_cell(field: &str) -> Value {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(field.to_string())
}
