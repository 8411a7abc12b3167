//! Fact table - One-time build of the denormalized, date-sanitized record set

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::InsightResult;
use crate::pipeline::{join, sanitize};
use crate::relation::Relation;
use crate::schema::{ITEM_ID, ITEM_NAME, ORDER_DATE, ORDER_ID, QUANTITY};

/// One fully joined, sanitized fact row
///
/// Immutable after the build; every date is a valid calendar date and
/// every quantity a non-negative integer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    pub order_id: i64,
    pub item_id: i64,
    pub name: String,
    pub order_date: NaiveDate,
    pub quantity: u64,
}

/// Per-stage drop counters recorded during the fact-table build
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Rows emitted by the two-stage join
    pub joined: usize,

    /// Line items excluded for lack of a matching order
    pub dropped_without_order: usize,

    /// Line items excluded for lack of a matching menu entry
    pub dropped_without_menu_item: usize,

    /// Joined rows excluded for an unparsable order date
    pub dropped_invalid_date: usize,

    /// Joined rows excluded for a malformed quantity
    pub dropped_bad_quantity: usize,
}

impl BuildStats {
    /// Total rows excluded across all stages
    pub fn total_dropped(&self) -> usize {
        self.dropped_without_order
            + self.dropped_without_menu_item
            + self.dropped_invalid_date
            + self.dropped_bad_quantity
    }
}

/// The prepared fact table: built once per dataset, read-only afterwards
///
/// Queries borrow it immutably, so concurrent callers need no
/// synchronization.
#[derive(Clone, Debug)]
pub struct FactTable {
    records: Vec<FactRecord>,
    stats: BuildStats,
}

impl FactTable {
    pub fn records(&self) -> &[FactRecord] {
        &self.records
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, deduplicated years present in the fact table
    ///
    /// Callers populate period selectors from this rather than guessing at
    /// a year range.
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.order_date.year()).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<FactRecord>) -> Self {
        Self {
            records,
            stats: BuildStats::default(),
        }
    }
}

/// Build the fact table from the three raw relations
///
/// Normalizer → Joiner → Sanitizer, run once per loaded dataset. Fails
/// only on schema errors (a required column missing from a relation);
/// per-record anomalies are dropped, counted in [`BuildStats`] and logged.
pub fn build_fact_table(
    mut orders: Relation,
    mut order_items: Relation,
    mut menu_items: Relation,
    config: &PipelineConfig,
) -> InsightResult<FactTable> {
    let mapping = &config.schema;
    mapping.normalize(&mut orders, &[ORDER_ID, ORDER_DATE])?;
    mapping.normalize(&mut order_items, &[ORDER_ID, ITEM_ID, QUANTITY])?;
    mapping.normalize(&mut menu_items, &[ITEM_ID, ITEM_NAME])?;

    let joined = join::join_relations(&order_items, &orders, &menu_items);
    let joined_rows = joined.rows.len();
    let sanitized = sanitize::sanitize_rows(joined.rows, &config.date_formats);

    let stats = BuildStats {
        joined: joined_rows,
        dropped_without_order: joined.dropped_without_order,
        dropped_without_menu_item: joined.dropped_without_menu_item,
        dropped_invalid_date: sanitized.dropped_invalid_date,
        dropped_bad_quantity: sanitized.dropped_bad_quantity,
    };

    tracing::info!(
        facts = sanitized.records.len(),
        dropped = stats.total_dropped(),
        "fact table built"
    );

    Ok(FactTable {
        records: sanitized.records,
        stats,
    })
}
