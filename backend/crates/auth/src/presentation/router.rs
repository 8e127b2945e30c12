//! Session Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::presentation::handlers::{self, SessionAppState};

/// Create the session status / logout router
pub fn session_router(config: Arc<GateConfig>) -> Router {
    let state = SessionAppState { config };

    Router::new()
        .route("/session", get(handlers::session_status))
        .route("/session/logout", post(handlers::logout))
        .with_state(state)
}
