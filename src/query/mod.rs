//! Period queries over the fact table
//!
//! Every query is a pure function of (fact table, year, month): the fact
//! table is an explicit immutable value passed in by the caller, never
//! ambient state, and results are recomputed per call rather than cached.

pub mod aggregate;
pub mod rank;

pub use aggregate::{aggregate_period, AggregateRow};
pub use rank::Ranking;

use crate::error::InsightResult;
use crate::pipeline::FactTable;

/// Ranked item sales for a (year, month) period, best seller first
///
/// Returns an empty vector when no record falls in the period; callers
/// must handle the empty case explicitly.
pub fn top_selling_items(facts: &FactTable, year: i32, month: u32) -> Vec<AggregateRow> {
    let rows = aggregate_period(facts, year, month);
    Ranking::for_period(year, month, rows).into_rows()
}

/// The single best-selling item for a (year, month) period
///
/// Fails with [`crate::InsightError::EmptyPeriod`] when the period has no
/// records. Deliberately asymmetric with [`top_selling_items`], which
/// returns an empty vector for the same condition.
pub fn top_selling_item(facts: &FactTable, year: i32, month: u32) -> InsightResult<AggregateRow> {
    let rows = aggregate_period(facts, year, month);
    let ranking = Ranking::for_period(year, month, rows);
    ranking.top_entry().cloned()
}
