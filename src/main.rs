use anyhow::Result;

fn main() -> Result<()> {
    println!("Order Insights Engine - CLI Mode");
    println!("{}", "=".repeat(80));
    println!("Use the 'insights_cli' binary to query a dataset:");
    println!("  cargo run --bin insights_cli -- <data_dir> <year> <month>");
    println!();
    println!("Example:");
    println!("  cargo run --bin insights_cli -- ./data 2024 3");
    println!();

    Ok(())
}
