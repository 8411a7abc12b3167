//! Temporal Sanitizer - Date validation and quantity screening after the join

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::pipeline::fact::FactRecord;
use crate::pipeline::join::JoinedRow;

/// Sanitizer output: the typed fact records plus data-quality drop counters
#[derive(Clone, Debug, Default)]
pub struct SanitizeOutput {
    pub records: Vec<FactRecord>,
    pub dropped_invalid_date: usize,
    pub dropped_bad_quantity: usize,
}

/// Coerce each joined row into a typed fact record, dropping rows that
/// fail coercion
///
/// Rows with an unparsable `order_date` are removed from the working set,
/// not flagged; nothing downstream of this step ever sees an invalid
/// date. Quantities must read as non-negative integers; anything else is
/// a data-quality defect that is dropped and counted rather than summed.
/// Runs exactly once, after the join and before any aggregation.
pub fn sanitize_rows(rows: Vec<JoinedRow>, date_formats: &[String]) -> SanitizeOutput {
    let mut output = SanitizeOutput::default();

    for row in rows {
        let order_date = match parse_order_date(&row.order_date, date_formats) {
            Some(date) => date,
            None => {
                output.dropped_invalid_date += 1;
                continue;
            }
        };

        let quantity = match parse_quantity(&row.quantity) {
            Some(quantity) => quantity,
            None => {
                output.dropped_bad_quantity += 1;
                tracing::warn!(
                    order_id = row.order_id,
                    item_id = row.item_id,
                    raw = %row.quantity,
                    "dropping row with malformed quantity"
                );
                continue;
            }
        };

        output.records.push(FactRecord {
            order_id: row.order_id,
            item_id: row.item_id,
            name: row.name,
            order_date,
            quantity,
        });
    }

    if output.dropped_invalid_date > 0 {
        tracing::warn!(
            dropped = output.dropped_invalid_date,
            "dropped rows with unparsable order_date"
        );
    }

    output
}

/// Parse a raw order-date cell against the configured format list
///
/// Datetime formats are tried before date-only formats so a format string
/// with a time component accepts full timestamps; the time of day is
/// discarded either way.
fn parse_order_date(raw: &Value, formats: &[String]) -> Option<NaiveDate> {
    let text = match raw {
        Value::String(s) => s.trim(),
        _ => return None,
    };
    if text.is_empty() {
        return None;
    }

    for format in formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    None
}

/// Coerce a raw quantity cell to a non-negative integer
///
/// Accepts integer values, integral floats (spreadsheet exports), and
/// integer-formatted strings. Negative, fractional, and non-numeric
/// values are malformed.
fn parse_quantity(raw: &Value) -> Option<u64> {
    match raw {
        Value::Number(n) => {
            if let Some(quantity) = n.as_u64() {
                return Some(quantity);
            }
            if n.as_i64().is_some() {
                // Negative integer
                return None;
            }
            n.as_f64().and_then(|f| {
                if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
                    Some(f as u64)
                } else {
                    None
                }
            })
        }
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
