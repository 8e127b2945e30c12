//! Infrastructure Layer
//!
//! Open5e wire format, HTTP source and freshness cache.

pub mod cache;
pub mod http;
pub mod open5e;

pub use cache::CachedCatalogSource;
pub use http::HttpCatalogSource;
