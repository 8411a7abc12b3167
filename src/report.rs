/// Plain-text rendering of query results for terminal consumers
/// Presentation only; the query path never consults this module
use crate::query::AggregateRow;

/// Render a ranked sequence as an aligned two-column text table
pub fn render_ranking_table(rows: &[AggregateRow]) -> String {
    if rows.is_empty() {
        return "No data for selected period".to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("item".len());
    let qty_width = rows
        .iter()
        .map(|r| r.total_quantity.to_string().len())
        .max()
        .unwrap_or(0)
        .max("total".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>qty_width$}\n",
        "item", "total"
    ));
    out.push_str(&format!(
        "{:-<name_width$}  {:-<qty_width$}\n",
        "", ""
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<name_width$}  {:>qty_width$}\n",
            row.name, row.total_quantity
        ));
    }
    out
}

/// One-line summary of the best seller
pub fn render_top_entry(row: &AggregateRow) -> String {
    format!("Most sold item: {} ({} units)", row.name, row.total_quantity)
}
