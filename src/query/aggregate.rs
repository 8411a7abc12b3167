//! Period Aggregator - Grouped sales totals for one (year, month)

use chrono::Datelike;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::pipeline::FactTable;

/// Summed sales volume for one item name within a period
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub name: String,
    pub total_quantity: u64,
}

/// Filter the fact table to (year, month) and sum quantity per item name
///
/// Groups appear in first-encounter order of the underlying fact records,
/// which is what makes the ranker's tie handling deterministic. The sum of
/// totals always equals the sum of quantities over the matching records.
/// A period with no matching records yields an empty vector, not an error.
pub fn aggregate_period(facts: &FactTable, year: i32, month: u32) -> Vec<AggregateRow> {
    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for record in facts.records() {
        if record.order_date.year() != year || record.order_date.month() != month {
            continue;
        }

        match index.get(record.name.as_str()) {
            Some(&slot) => {
                rows[slot].total_quantity += record.quantity;
            }
            None => {
                index.insert(record.name.as_str(), rows.len());
                rows.push(AggregateRow {
                    name: record.name.clone(),
                    total_quantity: record.quantity,
                });
            }
        }
    }

    rows
}
