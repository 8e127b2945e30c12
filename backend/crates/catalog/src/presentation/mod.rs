//! Presentation Layer
//!
//! HTTP handlers, query DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CatalogAppState;
pub use router::{catalog_router, catalog_router_generic};
