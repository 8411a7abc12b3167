/// Integration tests for the period queries
///
/// Covers:
/// - Ranked-sequence and top-entry scenarios over a joined dataset
/// - The asymmetric empty-period contract
/// - Conservation of totals, sort order and idempotence properties
use order_insights_engine::{
    build_fact_table, top_selling_item, top_selling_items, FactTable, PipelineConfig, Relation,
    Row,
};
use serde_json::{json, Value};

fn relation(name: &str, rows: Vec<Vec<(&str, Value)>>) -> Relation {
    let rows = rows
        .into_iter()
        .map(|pairs| {
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<Row>()
        })
        .collect();
    Relation::from_rows(name, rows)
}

/// Test helper: one order on 2024-03-05 with two line items
fn reference_facts() -> FactTable {
    let orders = relation(
        "orders",
        vec![vec![
            ("order_id", json!(1)),
            ("order_date", json!("2024-03-05")),
        ]],
    );
    let order_items = relation(
        "order_items",
        vec![
            vec![
                ("order_id", json!(1)),
                ("menu_item_id", json!(10)),
                ("quantity", json!(3)),
            ],
            vec![
                ("order_id", json!(1)),
                ("menu_item_id", json!(11)),
                ("quantity", json!(5)),
            ],
        ],
    );
    let menu_items = relation(
        "menu_items",
        vec![
            vec![("menu_item_id", json!(10)), ("name", json!("Burger"))],
            vec![("menu_item_id", json!(11)), ("name", json!("Fries"))],
        ],
    );

    build_fact_table(orders, order_items, menu_items, &PipelineConfig::default()).unwrap()
}

#[test]
fn test_ranked_sequence_for_populated_period() {
    let facts = reference_facts();

    let ranked = top_selling_items(&facts, 2024, 3);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "Fries");
    assert_eq!(ranked[0].total_quantity, 5);
    assert_eq!(ranked[1].name, "Burger");
    assert_eq!(ranked[1].total_quantity, 3);
}

#[test]
fn test_top_entry_for_populated_period() {
    let facts = reference_facts();

    let top = top_selling_item(&facts, 2024, 3).unwrap();

    assert_eq!(top.name, "Fries");
    assert_eq!(top.total_quantity, 5);
}

#[test]
fn test_empty_period_contract_is_asymmetric() {
    let facts = reference_facts();

    // Same condition, two contracts: empty sequence vs typed error
    assert!(top_selling_items(&facts, 2024, 4).is_empty());

    let err = top_selling_item(&facts, 2024, 4).unwrap_err();
    assert!(err.is_empty_period());
    assert_eq!(err.to_string(), "No data for period 2024-04");
}

#[test]
fn test_totals_are_conserved_per_period() {
    let facts = reference_facts();

    let ranked = top_selling_items(&facts, 2024, 3);
    let ranked_total: u64 = ranked.iter().map(|r| r.total_quantity).sum();
    let fact_total: u64 = facts
        .records()
        .iter()
        .filter(|r| r.order_date.to_string().starts_with("2024-03"))
        .map(|r| r.quantity)
        .sum();

    assert_eq!(ranked_total, fact_total);
}

#[test]
fn test_ranked_sequence_is_non_increasing() {
    let orders = relation(
        "orders",
        vec![vec![
            ("order_id", json!(1)),
            ("order_date", json!("2024-03-05")),
        ]],
    );
    let order_items = relation(
        "order_items",
        vec![
            vec![("order_id", json!(1)), ("menu_item_id", json!(10)), ("quantity", json!(2))],
            vec![("order_id", json!(1)), ("menu_item_id", json!(11)), ("quantity", json!(7))],
            vec![("order_id", json!(1)), ("menu_item_id", json!(12)), ("quantity", json!(7))],
            vec![("order_id", json!(1)), ("menu_item_id", json!(13)), ("quantity", json!(1))],
        ],
    );
    let menu_items = relation(
        "menu_items",
        vec![
            vec![("menu_item_id", json!(10)), ("name", json!("Burger"))],
            vec![("menu_item_id", json!(11)), ("name", json!("Fries"))],
            vec![("menu_item_id", json!(12)), ("name", json!("Salad"))],
            vec![("menu_item_id", json!(13)), ("name", json!("Shake"))],
        ],
    );
    let facts =
        build_fact_table(orders, order_items, menu_items, &PipelineConfig::default()).unwrap();

    let ranked = top_selling_items(&facts, 2024, 3);

    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].total_quantity >= pair[1].total_quantity));
    // Tied items keep fact-table encounter order
    assert_eq!(ranked[0].name, "Fries");
    assert_eq!(ranked[1].name, "Salad");
}

#[test]
fn test_queries_are_idempotent() {
    let facts = reference_facts();

    let first = top_selling_items(&facts, 2024, 3);
    let second = top_selling_items(&facts, 2024, 3);

    assert_eq!(first, second);
}

#[test]
fn test_unparsable_date_never_contributes_to_any_period() {
    let orders = relation(
        "orders",
        vec![
            vec![("order_id", json!(1)), ("order_date", json!("2024-03-05"))],
            vec![("order_id", json!(2)), ("order_date", json!("not-a-date"))],
        ],
    );
    let order_items = relation(
        "order_items",
        vec![
            vec![("order_id", json!(1)), ("menu_item_id", json!(10)), ("quantity", json!(3))],
            vec![("order_id", json!(2)), ("menu_item_id", json!(10)), ("quantity", json!(50))],
        ],
    );
    let menu_items = relation(
        "menu_items",
        vec![vec![("menu_item_id", json!(10)), ("name", json!("Burger"))]],
    );
    let facts =
        build_fact_table(orders, order_items, menu_items, &PipelineConfig::default()).unwrap();

    for year in 2020..=2030 {
        for month in 1..=12 {
            let total: u64 = top_selling_items(&facts, year, month)
                .iter()
                .map(|r| r.total_quantity)
                .sum();
            assert!(total <= 3, "dropped row leaked into {}-{}", year, month);
        }
    }
}
