//! Ranker - Orders aggregated totals and exposes the top entry

use crate::error::{InsightError, InsightResult};
use crate::query::aggregate::AggregateRow;

/// Aggregated totals for one period, sorted best seller first
///
/// The sort is stable and descending on `total_quantity`; ties keep the
/// aggregator's first-encounter order, with no additional tie-break key.
#[derive(Clone, Debug)]
pub struct Ranking {
    year: i32,
    month: u32,
    rows: Vec<AggregateRow>,
}

impl Ranking {
    /// Rank an aggregate set for the period it was computed from
    pub fn for_period(year: i32, month: u32, mut rows: Vec<AggregateRow>) -> Self {
        rows.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
        Self { year, month, rows }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The full ranked sequence, possibly empty
    pub fn ranked_rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The single best-selling entry
    ///
    /// Fails with `EmptyPeriod` when the ranking has no rows.
    pub fn top_entry(&self) -> InsightResult<&AggregateRow> {
        self.rows
            .first()
            .ok_or_else(|| InsightError::empty_period(self.year, self.month))
    }

    pub fn into_rows(self) -> Vec<AggregateRow> {
        self.rows
    }
}
