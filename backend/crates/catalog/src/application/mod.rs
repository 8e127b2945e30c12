//! Application Layer
//!
//! The reference-data client and its configuration.

pub mod config;
pub mod reference_data;

pub use config::CatalogConfig;
pub use reference_data::ReferenceDataClient;
