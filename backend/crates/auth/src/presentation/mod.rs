//! Presentation Layer
//!
//! HTTP middleware, extractors, handlers and router.

pub mod dto;
pub mod extractor;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extractor::{CurrentUser, MaybeUser};
pub use handlers::SessionAppState;
pub use middleware::{AuthStatus, GateState, session_gate};
pub use router::session_router;
