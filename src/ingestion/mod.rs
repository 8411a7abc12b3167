//! Dataset loading - External storage collaborators feeding the pipeline

pub mod csv_loader;

pub use csv_loader::{load_dataset, load_relation_csv};
