/// Unified error type for the insights engine
/// Provides structured error handling with categories for different failure modes
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum InsightError {
    /// Schema errors: a required identifying column is absent from an input relation
    #[error("Schema error: {message}")]
    Schema {
        message: String,
        relation: Option<String>,
        column: Option<String>,
    },

    /// Empty period: the single top entry was requested for a period with no records
    #[error("No data for period {year}-{month:02}")]
    EmptyPeriod { year: i32, month: u32 },

    /// Ingest errors: dataset loading failures (file I/O, malformed input)
    #[error("Ingest error: {message}")]
    Ingest {
        message: String,
        path: Option<String>,
    },

    /// Internal errors: should never happen, indicates bug
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl InsightError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            relation: None,
            column: None,
        }
    }

    pub fn schema_with_column(
        message: impl Into<String>,
        relation: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self::Schema {
            message: message.into(),
            relation: Some(relation.into()),
            column: Some(column.into()),
        }
    }

    pub fn empty_period(year: i32, month: u32) -> Self {
        Self::EmptyPeriod { year, month }
    }

    pub fn ingest(message: impl Into<String>) -> Self {
        Self::Ingest {
            message: message.into(),
            path: None,
        }
    }

    pub fn ingest_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Ingest {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for the only error an end user is expected to see
    pub fn is_empty_period(&self) -> bool {
        matches!(self, Self::EmptyPeriod { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}

impl From<std::io::Error> for InsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Ingest {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Result type alias for engine operations
pub type InsightResult<T> = Result<T, InsightError>;
