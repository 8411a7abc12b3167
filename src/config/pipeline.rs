//! Pipeline configuration: schema mapping and accepted date formats

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{InsightError, InsightResult};
use crate::schema::SchemaMapping;

/// Date formats accepted for `order_date`, tried in order
///
/// Formats with a time component are matched as datetimes; the rest as
/// bare dates.
pub fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

/// Configuration for the fact-table build
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Canonical column names and their accepted source spellings
    pub schema: SchemaMapping,

    /// Accepted `order_date` formats (chrono strftime syntax)
    pub date_formats: Vec<String>,
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> InsightResult<()> {
        if self.schema.columns.is_empty() {
            return Err(InsightError::schema(
                "Schema mapping declares no columns".to_string(),
            ));
        }
        if self.date_formats.is_empty() {
            return Err(InsightError::internal(
                "Date format list is empty; every order_date would be dropped",
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            schema: SchemaMapping::default(),
            date_formats: default_date_formats(),
        }
    }
}
