//! HTTP Handlers
//!
//! Thin pass-throughs to [`ReferenceDataClient`]. Upstream failures are
//! rendered as problem details; a missing `class` parameter is an empty
//! selection, not an error.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::application::reference_data::ReferenceDataClient;
use crate::domain::entities::{Background, Class, Race, Spell, Subclass};
use crate::domain::source::CatalogSource;
use crate::error::CatalogResult;
use crate::presentation::dto::{SpellQuery, SubclassQuery, non_blank};

/// Shared state for catalog handlers
pub struct CatalogAppState<S>
where
    S: CatalogSource + Send + Sync + 'static,
{
    pub client: ReferenceDataClient<S>,
}

impl<S> Clone for CatalogAppState<S>
where
    S: CatalogSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

/// GET /api/races
pub async fn list_races<S>(State(state): State<CatalogAppState<S>>) -> CatalogResult<Json<Vec<Race>>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Ok(Json(state.client.list_races().await?))
}

/// GET /api/races/{key}
pub async fn get_race<S>(
    State(state): State<CatalogAppState<S>>,
    Path(key): Path<String>,
) -> CatalogResult<Json<Race>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Ok(Json(state.client.get_race(&key).await?))
}

/// GET /api/classes
pub async fn list_classes<S>(
    State(state): State<CatalogAppState<S>>,
) -> CatalogResult<Json<Vec<Class>>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Ok(Json(state.client.list_classes().await?))
}

/// GET /api/classes/{key}
pub async fn get_class<S>(
    State(state): State<CatalogAppState<S>>,
    Path(key): Path<String>,
) -> CatalogResult<Json<Class>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Ok(Json(state.client.get_class(&key).await?))
}

/// GET /api/subclasses?class=KEY
pub async fn list_subclasses<S>(
    State(state): State<CatalogAppState<S>>,
    Query(query): Query<SubclassQuery>,
) -> CatalogResult<Json<Vec<Subclass>>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    let Some(class_key) = non_blank(query.class.as_deref()) else {
        return Ok(Json(Vec::new()));
    };

    Ok(Json(state.client.list_subclasses_by_parent(class_key).await?))
}

/// GET /api/backgrounds
pub async fn list_backgrounds<S>(
    State(state): State<CatalogAppState<S>>,
) -> CatalogResult<Json<Vec<Background>>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Ok(Json(state.client.list_backgrounds().await?))
}

/// GET /api/backgrounds/{key}
pub async fn get_background<S>(
    State(state): State<CatalogAppState<S>>,
    Path(key): Path<String>,
) -> CatalogResult<Json<Background>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    Ok(Json(state.client.get_background(&key).await?))
}

/// GET /api/spells?class=KEY&level=N
pub async fn list_spells<S>(
    State(state): State<CatalogAppState<S>>,
    Query(query): Query<SpellQuery>,
) -> CatalogResult<Json<Vec<Spell>>>
where
    S: CatalogSource + Send + Sync + 'static,
{
    let Some(class_key) = non_blank(query.class.as_deref()) else {
        return Ok(Json(Vec::new()));
    };

    Ok(Json(
        state
            .client
            .list_spells_by_class(class_key, query.level)
            .await?,
    ))
}
