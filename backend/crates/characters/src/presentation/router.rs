//! Character Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::service::CharacterService;
use crate::domain::repository::CharacterRepository;
use crate::infra::postgres::PgCharacterRepository;
use crate::presentation::handlers::{self, CharacterAppState};

/// Create the character router with PostgreSQL repository
pub fn characters_router(repo: PgCharacterRepository) -> Router {
    characters_router_generic(repo)
}

/// Create a character router for any repository implementation
pub fn characters_router_generic<R>(repo: R) -> Router
where
    R: CharacterRepository + Send + Sync + 'static,
{
    let state = CharacterAppState {
        service: CharacterService::new(Arc::new(repo)),
    };

    Router::new()
        .route(
            "/characters",
            get(handlers::list_characters::<R>).post(handlers::create_character::<R>),
        )
        .route(
            "/characters/{id}",
            get(handlers::get_character::<R>)
                .put(handlers::update_character::<R>)
                .delete(handlers::delete_character::<R>),
        )
        .with_state(state)
}
