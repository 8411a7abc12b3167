//! Fact-table build pipeline: normalize → join → sanitize

pub mod fact;
pub mod join;
pub mod sanitize;

pub use fact::{build_fact_table, BuildStats, FactRecord, FactTable};
pub use join::{JoinOutput, JoinedRow};
pub use sanitize::SanitizeOutput;
