//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::presentation::dto::SessionStatusResponse;
use crate::presentation::extractor::MaybeUser;

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState {
    pub config: Arc<GateConfig>,
}

/// GET /api/session
pub async fn session_status(MaybeUser(claims): MaybeUser) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse::from(claims))
}

/// POST /api/session/logout
///
/// Clears the session cookie and sends the browser to the sign-in page.
pub async fn logout(State(state): State<SessionAppState>, MaybeUser(claims): MaybeUser) -> Response {
    if let Some(claims) = &claims {
        tracing::info!(sub = %claims.sub, "Signed out");
    }

    let clear = state.config.session_cookie().build_delete_cookie();

    (
        [(header::SET_COOKIE, clear)],
        Redirect::to(&state.config.sign_in_path),
    )
        .into_response()
}
