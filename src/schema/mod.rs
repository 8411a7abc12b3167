//! Schema Mapping - Canonical column names and source-variant normalization

use serde::{Deserialize, Serialize};

use crate::error::{InsightError, InsightResult};
use crate::relation::Relation;

/// Canonical key for the menu item identifier
pub const ITEM_ID: &str = "item_id";
/// Canonical key for the order identifier
pub const ORDER_ID: &str = "order_id";
/// Canonical name of the order timestamp column
pub const ORDER_DATE: &str = "order_date";
/// Canonical name of the line-item quantity column
pub const QUANTITY: &str = "quantity";
/// Canonical name of the menu item display name column
pub const ITEM_NAME: &str = "name";

/// One canonical column and the source spellings accepted for it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Canonical column name used by the pipeline
    pub canonical: String,

    /// Accepted source spellings, tried in order; the canonical name
    /// itself always matches first
    pub variants: Vec<String>,
}

impl ColumnMapping {
    pub fn new(canonical: impl Into<String>, variants: &[&str]) -> Self {
        Self {
            canonical: canonical.into(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Declared mapping table: canonical name → accepted source variants
///
/// Renaming is driven by this table, validated when relations are
/// normalized, never by ad hoc string substitution inside the join.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SchemaMapping {
    pub columns: Vec<ColumnMapping>,
}

impl SchemaMapping {
    /// Look up the mapping entry for a canonical column
    pub fn mapping_for(&self, canonical: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|m| m.canonical == canonical)
    }

    /// Rename each required column's source variant onto its canonical name
    ///
    /// Fails when a relation carries no spelling of a required column at
    /// all; a relation already using the canonical name passes untouched.
    pub fn normalize(&self, relation: &mut Relation, required: &[&str]) -> InsightResult<()> {
        for canonical in required {
            if relation.has_column(canonical) {
                continue;
            }

            let mapping = self.mapping_for(canonical).ok_or_else(|| {
                InsightError::schema_with_column(
                    format!("No mapping declared for column '{}'", canonical),
                    relation.name(),
                    *canonical,
                )
            })?;

            let found = mapping
                .variants
                .iter()
                .find(|variant| relation.has_column(variant));

            match found {
                Some(variant) => {
                    tracing::debug!(
                        relation = relation.name(),
                        from = variant.as_str(),
                        to = canonical,
                        "normalized column name"
                    );
                    relation.rename_column(variant, canonical);
                }
                None => {
                    return Err(InsightError::schema_with_column(
                        format!(
                            "Relation '{}' has no '{}' column (accepted spellings: {:?})",
                            relation.name(),
                            canonical,
                            mapping.variants
                        ),
                        relation.name(),
                        *canonical,
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for SchemaMapping {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnMapping::new(ITEM_ID, &["item_id", "menu_item_id"]),
                ColumnMapping::new(ORDER_ID, &["order_id"]),
                ColumnMapping::new(ORDER_DATE, &["order_date"]),
                ColumnMapping::new(QUANTITY, &["quantity"]),
                ColumnMapping::new(ITEM_NAME, &["name", "item_name"]),
            ],
        }
    }
}
