/// Performance benchmarks for the reconciliation pipeline
///
/// Measures:
/// - Fact-table build latency (normalize + join + sanitize)
/// - Period query throughput over a prepared fact table
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use order_insights_engine::{
    build_fact_table, top_selling_items, FactTable, PipelineConfig, Relation, Row,
};
use serde_json::json;

const ORDER_COUNT: i64 = 1000;
const MENU_SIZE: i64 = 50;

fn synthetic_dataset() -> (Relation, Relation, Relation) {
    let mut orders = Relation::new(
        "orders",
        vec!["order_id".to_string(), "order_date".to_string()],
    );
    let mut order_items = Relation::new(
        "order_items",
        vec![
            "order_id".to_string(),
            "menu_item_id".to_string(),
            "quantity".to_string(),
        ],
    );
    let mut menu_items = Relation::new(
        "menu_items",
        vec!["menu_item_id".to_string(), "name".to_string()],
    );

    for i in 1..=ORDER_COUNT {
        let mut row = Row::default();
        row.insert("order_id".to_string(), json!(i));
        row.insert(
            "order_date".to_string(),
            json!(format!("2024-{:02}-{:02}", (i % 12) + 1, (i % 28) + 1)),
        );
        orders.push_row(row);

        for j in 0..3 {
            let mut row = Row::default();
            row.insert("order_id".to_string(), json!(i));
            row.insert("menu_item_id".to_string(), json!((i + j) % MENU_SIZE + 1));
            row.insert("quantity".to_string(), json!(j + 1));
            order_items.push_row(row);
        }
    }

    for i in 1..=MENU_SIZE {
        let mut row = Row::default();
        row.insert("menu_item_id".to_string(), json!(i));
        row.insert("name".to_string(), json!(format!("Item{}", i)));
        menu_items.push_row(row);
    }

    (orders, order_items, menu_items)
}

fn prepared_facts() -> FactTable {
    let (orders, order_items, menu_items) = synthetic_dataset();
    build_fact_table(orders, order_items, menu_items, &PipelineConfig::default())
        .expect("Failed to build fact table")
}

fn benchmark_fact_table_build(c: &mut Criterion) {
    c.bench_function("fact table build", |b| {
        b.iter(|| {
            let (orders, order_items, menu_items) = synthetic_dataset();
            let facts =
                build_fact_table(orders, order_items, menu_items, &PipelineConfig::default())
                    .unwrap();
            black_box(facts);
        });
    });
}

fn benchmark_period_query(c: &mut Criterion) {
    let facts = prepared_facts();

    c.bench_function("period query", |b| {
        b.iter(|| {
            black_box(top_selling_items(&facts, 2024, 3));
        });
    });
}

criterion_group!(benches, benchmark_fact_table_build, benchmark_period_query);
criterion_main!(benches);
