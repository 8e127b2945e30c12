//! Catalog (Reference Data) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Reference entities, pure filtering rules, source trait
//! - `application/` - `ReferenceDataClient` and configuration
//! - `infra/` - Open5e wire format, reqwest source, freshness cache
//! - `presentation/` - HTTP handlers and router
//!
//! ## Contract
//! - Every operation issues exactly one upstream request (or none on a cache hit)
//! - Any non-success upstream status fails the whole operation; no partial results
//! - Subclasses are a projection of the class collection, never a separate fetch
//! - No retries; callers decide how to render failures

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use application::reference_data::ReferenceDataClient;
pub use domain::source::{CatalogSource, UpstreamRequest};
pub use error::{CatalogError, CatalogResult};
pub use infra::cache::CachedCatalogSource;
pub use infra::http::HttpCatalogSource;
pub use presentation::router::{catalog_router, catalog_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
}
