//! # Order Insights Engine
//!
//! An in-memory reconciliation and aggregation engine for restaurant
//! order analytics: three raw relations (orders, order line items, menu
//! catalog) are normalized, joined and date-sanitized into one immutable
//! fact table, which then answers per-period sales queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use order_insights_engine::{
//!     build_fact_table, top_selling_item, top_selling_items, PipelineConfig, Relation,
//! };
//! use serde_json::json;
//!
//! fn row(pairs: &[(&str, serde_json::Value)]) -> order_insights_engine::Row {
//!     pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
//! }
//!
//! let orders = Relation::from_rows("orders", vec![
//!     row(&[("order_id", json!(1)), ("order_date", json!("2024-03-05"))]),
//! ]);
//! let order_items = Relation::from_rows("order_items", vec![
//!     row(&[("order_id", json!(1)), ("menu_item_id", json!(10)), ("quantity", json!(3))]),
//!     row(&[("order_id", json!(1)), ("menu_item_id", json!(11)), ("quantity", json!(5))]),
//! ]);
//! let menu_items = Relation::from_rows("menu_items", vec![
//!     row(&[("menu_item_id", json!(10)), ("name", json!("Burger"))]),
//!     row(&[("menu_item_id", json!(11)), ("name", json!("Fries"))]),
//! ]);
//!
//! // Build the fact table once per dataset
//! let config = PipelineConfig::default();
//! let facts = build_fact_table(orders, order_items, menu_items, &config).unwrap();
//!
//! // Query it as often as needed
//! let ranked = top_selling_items(&facts, 2024, 3);
//! assert_eq!(ranked[0].name, "Fries");
//!
//! let top = top_selling_item(&facts, 2024, 3).unwrap();
//! assert_eq!(top.total_quantity, 5);
//! ```
//!
//! ## Design
//!
//! - The fact table is an explicit immutable value passed into every
//!   query call, never ambient state.
//! - Schema errors abort the build; per-record anomalies (unmatched keys,
//!   invalid dates, malformed quantities) are dropped, counted and
//!   logged, never fatal.
//! - Requesting the single top entry for an empty period is a typed
//!   error; the ranked-sequence query returns an empty vector instead.

// Internal modules
pub mod config;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod query;
pub mod relation;
pub mod report;
pub mod schema;

// Public API - Main types users need
pub use config::{default_date_formats, PipelineConfig};
pub use pipeline::{build_fact_table, BuildStats, FactRecord, FactTable};
pub use query::{top_selling_item, top_selling_items, AggregateRow, Ranking};
pub use relation::{Relation, Row};
pub use schema::SchemaMapping;

// Re-export commonly used error types
pub use error::{InsightError, InsightResult};
