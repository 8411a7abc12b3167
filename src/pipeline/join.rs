//! Relation Joiner - Two-stage inner hash join over the normalized relations

use fxhash::FxHashMap;
use serde_json::Value;

use crate::relation::{as_identifier, as_text, Relation};
use crate::schema::{ITEM_ID, ITEM_NAME, ORDER_DATE, ORDER_ID, QUANTITY};

/// One denormalized row out of the join
///
/// Dates and quantities are still raw cell values at this stage; the
/// sanitizer owns their coercion.
#[derive(Clone, Debug)]
pub struct JoinedRow {
    pub order_id: i64,
    pub item_id: i64,
    pub name: String,
    pub order_date: Value,
    pub quantity: Value,
}

/// Join output with exclusion counters
///
/// Unmatched rows are documented inner-join behavior, not errors, but the
/// drop counts stay observable for data-quality debugging.
#[derive(Clone, Debug, Default)]
pub struct JoinOutput {
    pub rows: Vec<JoinedRow>,
    pub dropped_without_order: usize,
    pub dropped_without_menu_item: usize,
}

/// Inner-join `order_items ⨝ orders` on `order_id`, then the result
/// `⨝ menu_items` on `item_id`
///
/// Output order is stable with respect to the line-item relation: rows are
/// probed in input order and matches are emitted in build insertion order,
/// so downstream consumers see a deterministic sequence before ranking.
/// Relations must already carry canonical key names; normalization happens
/// before this function, never inside it.
pub fn join_relations(
    order_items: &Relation,
    orders: &Relation,
    menu_items: &Relation,
) -> JoinOutput {
    let order_index = build_key_index(orders, ORDER_ID);
    let menu_index = build_key_index(menu_items, ITEM_ID);

    let mut output = JoinOutput::default();

    for item_row in order_items.rows() {
        let order_id = match as_identifier(order_items.cell(item_row, ORDER_ID)) {
            Some(id) => id,
            None => {
                output.dropped_without_order += 1;
                continue;
            }
        };
        let item_id = match as_identifier(order_items.cell(item_row, ITEM_ID)) {
            Some(id) => id,
            None => {
                output.dropped_without_menu_item += 1;
                continue;
            }
        };

        let order_matches = match order_index.get(&order_id) {
            Some(matches) => matches,
            None => {
                output.dropped_without_order += 1;
                continue;
            }
        };
        let menu_matches = match menu_index.get(&item_id) {
            Some(matches) => matches,
            None => {
                output.dropped_without_menu_item += 1;
                continue;
            }
        };

        let quantity = order_items.cell(item_row, QUANTITY);

        for &order_idx in order_matches {
            let order_row = &orders.rows()[order_idx];
            let order_date = orders.cell(order_row, ORDER_DATE);

            for &menu_idx in menu_matches {
                let menu_row = &menu_items.rows()[menu_idx];
                let name = match as_text(menu_items.cell(menu_row, ITEM_NAME)) {
                    Some(name) => name,
                    None => {
                        output.dropped_without_menu_item += 1;
                        continue;
                    }
                };

                output.rows.push(JoinedRow {
                    order_id,
                    item_id,
                    name: name.to_string(),
                    order_date: order_date.clone(),
                    quantity: quantity.clone(),
                });
            }
        }
    }

    tracing::debug!(
        joined = output.rows.len(),
        dropped_without_order = output.dropped_without_order,
        dropped_without_menu_item = output.dropped_without_menu_item,
        "join complete"
    );

    output
}

/// Build-side hash index: key value → row indices in insertion order
///
/// Rows whose key cell does not coerce to an identifier are left out of
/// the index; they can never match a probe, which is the inner-join drop.
fn build_key_index(relation: &Relation, key: &str) -> FxHashMap<i64, Vec<usize>> {
    let mut index: FxHashMap<i64, Vec<usize>> = FxHashMap::default();
    for (idx, row) in relation.rows().iter().enumerate() {
        if let Some(value) = as_identifier(relation.cell(row, key)) {
            index.entry(value).or_default().push(idx);
        }
    }
    index
}
