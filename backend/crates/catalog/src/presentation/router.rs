//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::application::reference_data::ReferenceDataClient;
use crate::domain::source::CatalogSource;
use crate::infra::cache::CachedCatalogSource;
use crate::infra::http::HttpCatalogSource;
use crate::presentation::handlers::{self, CatalogAppState};

/// Source used by the server: reqwest behind the freshness cache
pub type DefaultCatalogSource = CachedCatalogSource<HttpCatalogSource>;

/// Create the catalog router backed by Open5e
pub fn catalog_router(config: CatalogConfig) -> Router {
    let source = CachedCatalogSource::new(HttpCatalogSource::new(&config), config.cache_ttl);
    let client = ReferenceDataClient::new(Arc::new(source), Arc::new(config));

    catalog_router_generic::<DefaultCatalogSource>(client)
}

/// Create a catalog router for any source implementation
pub fn catalog_router_generic<S>(client: ReferenceDataClient<S>) -> Router
where
    S: CatalogSource + Send + Sync + 'static,
{
    let state = CatalogAppState { client };

    Router::new()
        .route("/races", get(handlers::list_races::<S>))
        .route("/races/{key}", get(handlers::get_race::<S>))
        .route("/classes", get(handlers::list_classes::<S>))
        .route("/classes/{key}", get(handlers::get_class::<S>))
        .route("/subclasses", get(handlers::list_subclasses::<S>))
        .route("/backgrounds", get(handlers::list_backgrounds::<S>))
        .route("/backgrounds/{key}", get(handlers::get_background::<S>))
        .route("/spells", get(handlers::list_spells::<S>))
        .with_state(state)
}
