//! HTTP Handlers
//!
//! Every handler runs as the session user; the gate has already redirected
//! anonymous browsers, and [`CurrentUser`] rejects anything else with 401.

use auth::middleware::CurrentUser;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::id::CharacterId;

use crate::application::service::CharacterService;
use crate::domain::entity::Character;
use crate::domain::repository::CharacterRepository;
use crate::error::CharacterResult;
use crate::presentation::dto::CharacterRequest;

/// Shared state for character handlers
pub struct CharacterAppState<R>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    pub service: CharacterService<R>,
}

impl<R> Clone for CharacterAppState<R>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

/// GET /characters
pub async fn list_characters<R>(
    State(state): State<CharacterAppState<R>>,
    user: CurrentUser,
) -> CharacterResult<Json<Vec<Character>>>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    Ok(Json(state.service.list(user.user_id()).await?))
}

/// POST /characters
pub async fn create_character<R>(
    State(state): State<CharacterAppState<R>>,
    user: CurrentUser,
    Json(req): Json<CharacterRequest>,
) -> CharacterResult<impl IntoResponse>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    let character = state.service.create(user.user_id(), &req.into()).await?;
    let location = format!("/characters/{}", character.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(character),
    ))
}

/// GET /characters/{id}
pub async fn get_character<R>(
    State(state): State<CharacterAppState<R>>,
    user: CurrentUser,
    Path(id): Path<CharacterId>,
) -> CharacterResult<Json<Character>>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    Ok(Json(state.service.get(user.user_id(), id).await?))
}

/// PUT /characters/{id}
pub async fn update_character<R>(
    State(state): State<CharacterAppState<R>>,
    user: CurrentUser,
    Path(id): Path<CharacterId>,
    Json(req): Json<CharacterRequest>,
) -> CharacterResult<Json<Character>>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    Ok(Json(
        state
            .service
            .update(user.user_id(), id, &req.into())
            .await?,
    ))
}

/// DELETE /characters/{id}
pub async fn delete_character<R>(
    State(state): State<CharacterAppState<R>>,
    user: CurrentUser,
    Path(id): Path<CharacterId>,
) -> CharacterResult<StatusCode>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    state.service.delete(user.user_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
