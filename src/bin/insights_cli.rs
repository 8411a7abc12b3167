//! One-shot CLI consumer: load a dataset directory, build the fact table,
//! answer a (year, month) query

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use order_insights_engine::ingestion::load_dataset;
use order_insights_engine::report::{render_ranking_table, render_top_entry};
use order_insights_engine::{
    build_fact_table, top_selling_item, top_selling_items, PipelineConfig,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        bail!("Usage: insights_cli <data_dir> <year> <month>");
    }

    let data_dir = &args[0];
    let year: i32 = args[1]
        .parse()
        .with_context(|| format!("Invalid year '{}'", args[1]))?;
    let month: u32 = args[2]
        .parse()
        .with_context(|| format!("Invalid month '{}'", args[2]))?;

    let (orders, order_items, menu_items) =
        load_dataset(data_dir).with_context(|| format!("Failed to load dataset from {}", data_dir))?;

    let config = PipelineConfig::default();
    let facts = build_fact_table(orders, order_items, menu_items, &config)
        .context("Failed to build fact table")?;

    println!(
        "Loaded {} fact records ({} rows dropped); years with data: {:?}",
        facts.len(),
        facts.stats().total_dropped(),
        facts.available_years()
    );
    println!();

    println!("Top selling items for {}-{:02}:", year, month);
    let ranked = top_selling_items(&facts, year, month);
    println!("{}", render_ranking_table(&ranked));

    match top_selling_item(&facts, year, month) {
        Ok(top) => println!("{}", render_top_entry(&top)),
        Err(err) if err.is_empty_period() => {
            println!("{}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
